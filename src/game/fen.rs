//! Position-text (de)serialization for whole positions.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Game, GameInfo};

impl Game {
    /// Parse a position from its text form (6 whitespace-separated fields:
    /// placement, side to move, castling rights, en-passant target,
    /// halfmove clock, move number).
    ///
    /// Fails when fields are missing or a numeric field is malformed. The
    /// placement field itself is parsed leniently (see
    /// [`Board::from_placement`]).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 6 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let board = Board::from_placement(parts[0]);
        let info = GameInfo::from_fen_fields(&parts[1..6])?;

        Ok(Game { board, info })
    }

    /// Parse a position from its text form.
    ///
    /// # Panics
    /// Panics if the text is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid position text")
    }

    /// Serialize the position to its text form.
    ///
    /// Round-trips exactly with [`Game::try_from_fen`] for any well-formed
    /// input.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.placement(), self.info.fen_fields())
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::try_from_fen(s)
    }
}
