//! The `Game` position value.

use once_cell::sync::Lazy;

use super::board::Board;
use super::info::GameInfo;

/// Position text of the standard starting position.
pub(crate) const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

static INITIAL_POSITION: Lazy<Game> = Lazy::new(|| Game::from_fen(INITIAL_FEN));

/// A full chess position: the piece grid plus the game metadata.
///
/// `Game` is an immutable value. Every operation that "changes" a position
/// (most notably [`Game::apply_move`]) returns a new one; a value in hand
/// never changes underneath its owner and can be shared freely across
/// threads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) info: GameInfo,
}

impl Game {
    /// The standard starting position.
    #[must_use]
    pub fn initial() -> Self {
        INITIAL_POSITION.clone()
    }

    /// The piece grid.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The game metadata.
    #[inline]
    #[must_use]
    pub fn info(&self) -> &GameInfo {
        &self.info
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Color, Piece, Square};

    #[test]
    fn test_initial_position() {
        let game = Game::initial();
        assert!(game.info().white_to_move());
        assert_eq!(game.info().move_number(), 1);
        assert_eq!(
            game.board().piece_at(Square(0, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(game.to_fen(), INITIAL_FEN);
    }

    #[test]
    fn test_positions_are_values() {
        let a = Game::initial();
        let b = Game::default();
        assert_eq!(a, b);
    }
}
