//! Attack detection, move legality and full move enumeration.

use super::error::MoveError;
use super::types::{Color, Move, Piece, Promotion, Square};
use super::Game;

impl Game {
    /// Whether `mv` obeys the moving piece's geometry for the side to move,
    /// ignoring king safety.
    #[must_use]
    pub fn is_pseudo_legal_move(&self, mv: Move) -> bool {
        match self.board.piece_at(mv.from) {
            Some((color, piece)) if color == self.info.side_to_move() => {
                self.piece_rule_allows(piece, color, mv)
            }
            _ => false,
        }
    }

    /// Locate the king of the given color.
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.board.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Whether `target` is attacked by the opponent of the side to move.
    ///
    /// Scans a hypothetical position with the turn handed to the opponent
    /// and the en-passant file cleared. Kings are excluded from the scan: a
    /// king can never attack the enemy king anyway, and the exclusion is
    /// what bounds the recursion between attack detection and the castling
    /// rule.
    pub(crate) fn square_attacked_by_opponent(&self, target: Square) -> bool {
        let mut hypothetical = self.clone();
        hypothetical.info.white_to_move = !self.info.white_to_move;
        hypothetical.info.en_passant_file = None;

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match hypothetical.board.piece_at(from) {
                    None | Some((_, Piece::King)) => continue,
                    Some(_) => {
                        if hypothetical.is_pseudo_legal_move(Move::new(from, target)) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Whether the side to move's king is currently attacked.
    ///
    /// Fails with [`MoveError::KingNotFound`] if that king is not on the
    /// board (malformed or hand-built test positions).
    pub fn king_in_check(&self) -> Result<bool, MoveError> {
        let color = self.info.side_to_move();
        let king = self
            .king_square(color)
            .ok_or(MoveError::KingNotFound { color })?;
        Ok(self.square_attacked_by_opponent(king))
    }

    /// Whether applying `mv` would leave the mover's own king attacked.
    ///
    /// Applies the move speculatively with the turn restored to the mover
    /// afterwards. A queen stands in for any promotion choice: occupancy is
    /// all that matters for the mover's king safety.
    fn leaves_own_king_exposed(&self, mv: Move) -> Result<bool, MoveError> {
        let mover = self.info.side_to_move();
        let mut after = self.apply_unchecked(mv, Promotion::queen(mover))?;
        after.info.white_to_move = self.info.white_to_move;
        after.king_in_check()
    }

    /// Whether `mv` is fully legal: pseudo-legal and leaving the mover's
    /// king unattacked.
    ///
    /// A position whose mover has no king on the board yields `false` for
    /// every move.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_pseudo_legal_move(mv) && !self.leaves_own_king_exposed(mv).unwrap_or(true)
    }

    /// Enumerate every legal move in the position.
    ///
    /// Tries all 4032 ordered pairs of distinct squares against
    /// [`Game::is_legal_move`]. Deliberately simple over fast: fine for
    /// interactive use, recomputed on every call.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for from_rank in 0..8 {
            for from_file in 0..8 {
                let from = Square(from_rank, from_file);
                for to_rank in 0..8 {
                    for to_file in 0..8 {
                        let to = Square(to_rank, to_file);
                        if from == to {
                            continue;
                        }
                        let mv = Move::new(from, to);
                        if self.is_legal_move(mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        moves
    }

    /// Whether the side to move is checkmated: in check with no legal move.
    ///
    /// A position with no legal moves while *not* in check (stalemate) is
    /// not classified here or anywhere else.
    pub fn is_checkmate(&self) -> Result<bool, MoveError> {
        Ok(self.king_in_check()? && self.legal_moves().is_empty())
    }
}
