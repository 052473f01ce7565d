//! Move classification and application.
//!
//! Application dispatches on the move's shape in the current position: en
//! passant, promotion, one of the four castles, or the generic case. Each
//! produces a brand-new [`Game`]; the input position is never touched.

use super::error::MoveError;
use super::types::{Move, Piece, Promotion, Square};
use super::Game;

impl Game {
    /// Whether `mv` is an en-passant capture for the side to move: a pawn
    /// moving onto an empty square whose file matches the recorded
    /// en-passant file, between the standard en-passant ranks for its
    /// color.
    #[must_use]
    pub fn is_en_passant_move(&self, mv: Move) -> bool {
        let color = self.info.side_to_move();
        self.board.piece_at(mv.from) == Some((color, Piece::Pawn))
            && self.board.piece_at(mv.to).is_none()
            && self.info.en_passant_file == Some(mv.to.file())
            && mv.from.rank() == color.en_passant_from_rank()
            && mv.to.rank() == color.en_passant_to_rank()
    }

    /// Whether `mv` moves a pawn of the side to move onto its back rank.
    #[must_use]
    pub fn is_promotion_move(&self, mv: Move) -> bool {
        let color = self.info.side_to_move();
        self.board.piece_at(mv.from) == Some((color, Piece::Pawn))
            && mv.to.rank() == color.pawn_promotion_rank()
    }

    /// Whether `mv` is a king-side castle for the side to move: the right
    /// is recorded, king and rook stand on their original squares, and the
    /// squares between them are empty.
    #[must_use]
    pub fn is_kingside_castle_move(&self, mv: Move) -> bool {
        let color = self.info.side_to_move();
        let home = color.back_rank();
        self.info.castling.has(color, true)
            && self.board.piece_at(mv.from) == Some((color, Piece::King))
            && self.board.piece_at(Square(home, 7)) == Some((color, Piece::Rook))
            && mv.from == Square(home, 4)
            && mv.to == Square(home, 6)
            && self.board.piece_at(Square(home, 5)).is_none()
            && self.board.piece_at(Square(home, 6)).is_none()
    }

    /// Whether `mv` is a queen-side castle for the side to move.
    #[must_use]
    pub fn is_queenside_castle_move(&self, mv: Move) -> bool {
        let color = self.info.side_to_move();
        let home = color.back_rank();
        self.info.castling.has(color, false)
            && self.board.piece_at(mv.from) == Some((color, Piece::King))
            && self.board.piece_at(Square(home, 0)) == Some((color, Piece::Rook))
            && mv.from == Square(home, 4)
            && mv.to == Square(home, 2)
            && self.board.piece_at(Square(home, 3)).is_none()
            && self.board.piece_at(Square(home, 2)).is_none()
            && self.board.piece_at(Square(home, 1)).is_none()
    }

    /// Apply `mv`, producing the resulting position.
    ///
    /// Validates that the origin is occupied and the move is pseudo-legal
    /// for the side to move; callers wanting full legality should gate on
    /// [`Game::is_legal_move`] first. `promotion` defaults to a queen of
    /// the mover's color and must match the mover's color when supplied.
    pub fn apply_move(&self, mv: Move, promotion: Option<Promotion>) -> Result<Game, MoveError> {
        let (color, piece) = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;

        if color != self.info.side_to_move() || !self.piece_rule_allows(piece, color, mv) {
            return Err(MoveError::IllegalMove { mv });
        }

        let promotion = promotion.unwrap_or_else(|| Promotion::queen(color));
        self.apply_unchecked(mv, promotion)
    }

    /// Apply `mv` without validating its geometry.
    ///
    /// Still performs all bookkeeping (turn, move number, en-passant file,
    /// halfmove clock, castling rights) and still fails on an empty origin,
    /// a wrong-colored promotion piece, or a castle whose transit path is
    /// occupied at apply time.
    pub(crate) fn apply_unchecked(&self, mv: Move, promotion: Promotion) -> Result<Game, MoveError> {
        let (color, piece) = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;
        let capture = self.board.piece_at(mv.to).is_some();

        let mut board = self.board.clone();
        let mut info = self.info.clone();
        info.white_to_move = !self.info.white_to_move;
        if !self.info.white_to_move {
            info.move_number += 1;
        }

        if self.is_en_passant_move(mv) {
            info.en_passant_file = None;
            info.halfmove_clock = 0;
            board.clear_square(mv.from);
            board.set_piece(mv.to, color, piece);
            // The captured pawn sits one rank behind the destination, not
            // on the destination itself.
            let captured_rank = if self.info.white_to_move {
                mv.to.rank() - 1
            } else {
                mv.to.rank() + 1
            };
            board.clear_square(Square(captured_rank, mv.to.file()));
        } else if self.is_promotion_move(mv) {
            if promotion.color != color {
                return Err(MoveError::WrongPromotionColor {
                    expected: color,
                    found: promotion.color,
                });
            }
            info.en_passant_file = None;
            info.halfmove_clock = 0;
            board.clear_square(mv.from);
            board.set_piece(mv.to, promotion.color, promotion.piece.piece());
        } else if self.is_kingside_castle_move(mv) || self.is_queenside_castle_move(mv) {
            let kingside = self.is_kingside_castle_move(mv);
            let home = color.back_rank();

            let transit: &[usize] = if kingside { &[5, 6] } else { &[3, 2, 1] };
            if transit
                .iter()
                .any(|&file| self.board.piece_at(Square(home, file)).is_some())
            {
                return Err(MoveError::IllegalMove { mv });
            }

            board.clear_square(mv.from);
            board.set_piece(mv.to, color, piece);

            let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
            board.clear_square(Square(home, rook_from));
            board.set_piece(Square(home, rook_to), color, Piece::Rook);

            info.castling.remove(color, true);
            info.castling.remove(color, false);
            info.en_passant_file = None;
            // Neither a pawn move nor a capture.
            info.halfmove_clock = self.info.halfmove_clock + 1;
        } else {
            board.clear_square(mv.from);
            board.set_piece(mv.to, color, piece);

            let double_pawn_step = piece == Piece::Pawn
                && mv.delta_file() == 0
                && mv.delta_rank() == 2 * color.pawn_direction()
                && mv.from.rank() == color.pawn_start_rank();

            info.en_passant_file = if double_pawn_step {
                Some(mv.from.file())
            } else {
                None
            };

            info.halfmove_clock = if piece == Piece::Pawn || capture {
                0
            } else {
                self.info.halfmove_clock + 1
            };

            let home = color.back_rank();
            match piece {
                Piece::King => {
                    info.castling.remove(color, true);
                    info.castling.remove(color, false);
                }
                // A right lapses when the rook leaves its original square;
                // capturing the rook in place does not revoke it.
                Piece::Rook if mv.from == Square(home, 7) => {
                    info.castling.remove(color, true);
                }
                Piece::Rook if mv.from == Square(home, 0) => {
                    info.castling.remove(color, false);
                }
                _ => {}
            }
        }

        Ok(Game { board, info })
    }
}
