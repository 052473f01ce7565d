//! Chess position representation and rules.
//!
//! A [`Game`] is an immutable value combining an 8×8 [`Board`] with the
//! [`GameInfo`] metadata (side to move, castling rights, en-passant file,
//! halfmove clock, move number). Applying a move never mutates a position;
//! it produces a fresh one.
//!
//! # Example
//! ```
//! use chess_study::game::{Game, Move, Square};
//!
//! let game = Game::initial();
//! let nf3 = Move::new(Square(0, 6), Square(2, 5));
//! assert!(game.is_legal_move(nf3));
//! let after = game.apply_move(nf3, None).unwrap();
//! assert_eq!(after.info().move_number(), 1);
//! ```

mod board;
mod builder;
mod error;
mod fen;
mod info;
mod make_move;
mod movegen;
mod rules;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::GameBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use info::GameInfo;
pub use state::Game;
pub use types::{CastlingRights, Color, Move, Piece, PromotablePiece, Promotion, Square};
