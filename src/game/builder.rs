//! Fluent builder for constructing chess positions.
//!
//! Handy for setting up test and study positions piece by piece rather
//! than writing position text by hand.
//!
//! # Example
//! ```
//! use chess_study::game::{Color, GameBuilder, Piece, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(game.is_legal_move(chess_study::Move::new(Square(1, 0), Square(3, 0))));
//! ```

use super::board::Board;
use super::info::GameInfo;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Game;

/// A fluent builder for [`Game`] positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_file: Option<usize>,
    halfmove_clock: u32,
    move_number: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a builder for an empty board, White to move, no castling
    /// rights.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_file: None,
            halfmove_clock: 0,
            move_number: 1,
        }
    }

    /// Place a piece. Later placements on the same square win.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((sq, color, piece));
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    #[must_use]
    pub fn en_passant_file(mut self, file: usize) -> Self {
        self.en_passant_file = Some(file);
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn move_number(mut self, number: u32) -> Self {
        self.move_number = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Game {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.set_piece(sq, color, piece);
        }

        Game {
            board,
            info: GameInfo {
                white_to_move: self.side_to_move == Color::White,
                castling: self.castling,
                en_passant_file: self.en_passant_file,
                halfmove_clock: self.halfmove_clock,
                move_number: self.move_number.max(1),
            },
        }
    }
}
