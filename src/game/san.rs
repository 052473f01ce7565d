//! Algebraic and figurine notation generation.
//!
//! Generation only: moves always originate from board input here, so
//! nothing ever needs to be parsed back out of notation.

use super::error::MoveError;
use super::types::{Move, Piece, Promotion};
use super::Game;

impl Game {
    /// Format a legal move in standard algebraic notation, e.g. "e4",
    /// "Nbd2", "fxe6", "O-O-O", "e8=Q", "Qh4#".
    ///
    /// `promotion` defaults to a queen of the mover's color. Fails with
    /// [`MoveError::IllegalMove`] if the move is not fully legal.
    pub fn san_for_move(&self, mv: Move, promotion: Option<Promotion>) -> Result<String, MoveError> {
        if !self.is_legal_move(mv) {
            return Err(MoveError::IllegalMove { mv });
        }

        let color = self.info.side_to_move();
        let promotion = promotion.unwrap_or_else(|| Promotion::queen(color));
        let mut san = String::new();

        if self.is_kingside_castle_move(mv) {
            san.push_str("O-O");
        } else if self.is_queenside_castle_move(mv) {
            san.push_str("O-O-O");
        } else {
            let (_, piece) = self
                .board
                .piece_at(mv.from)
                .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;

            if piece == Piece::Pawn {
                // Any file change on a pawn move is a capture (including en
                // passant, whose destination square is empty).
                if mv.from.file() != mv.to.file() {
                    san.push((b'a' + mv.from.file() as u8) as char);
                    san.push('x');
                }
                san.push_str(&mv.to.to_string());

                if self.is_promotion_move(mv) {
                    san.push('=');
                    san.push(promotion.piece.piece().to_char().to_ascii_uppercase());
                }
            } else {
                san.push(piece.to_char().to_ascii_uppercase());
                self.push_disambiguation(&mut san, mv, piece);

                if self
                    .board
                    .piece_at(mv.to)
                    .is_some_and(|(c, _)| c == color.opponent())
                {
                    san.push('x');
                }
                san.push_str(&mv.to.to_string());
            }
        }

        // Check/checkmate suffix, read off a scratch application.
        let after = self.apply_unchecked(mv, promotion)?;
        if after.is_checkmate()? {
            san.push('#');
        } else if after.king_in_check()? {
            san.push('+');
        }

        Ok(san)
    }

    /// Disambiguate against every other legal move of the same piece kind
    /// landing on the same destination: none — nothing; a rival sharing the
    /// origin rank — the origin file; a rival sharing the origin file — the
    /// origin rank; rivals sharing neither — the origin file alone.
    fn push_disambiguation(&self, san: &mut String, mv: Move, piece: Piece) {
        let color = self.info.side_to_move();
        let rivals: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|other| {
                other.to == mv.to
                    && *other != mv
                    && self.board.piece_at(other.from) == Some((color, piece))
            })
            .collect();

        if rivals.is_empty() {
            return;
        }

        let shares_rank = rivals.iter().any(|m| m.from.rank() == mv.from.rank());
        let shares_file = rivals.iter().any(|m| m.from.file() == mv.from.file());

        if shares_rank || shares_file {
            if shares_rank {
                san.push((b'a' + mv.from.file() as u8) as char);
            }
            if shares_file {
                san.push((b'1' + mv.from.rank() as u8) as char);
            }
        } else {
            san.push((b'a' + mv.from.file() as u8) as char);
        }
    }

    /// Format a legal move in figurine algebraic notation: the same string
    /// as [`Game::san_for_move`] with the ASCII piece letters replaced by
    /// Unicode glyphs of the mover's color.
    pub fn fan_for_move(&self, mv: Move, promotion: Option<Promotion>) -> Result<String, MoveError> {
        let san = self.san_for_move(mv, promotion)?;
        let color = self.info.side_to_move();

        Ok(san
            .chars()
            .map(|c| match c {
                'N' | 'B' | 'R' | 'Q' | 'K' => match Piece::from_char(c) {
                    Some(piece) => piece.figurine(color),
                    None => c,
                },
                _ => c,
            })
            .collect())
    }
}
