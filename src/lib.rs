//! Chess rules engine with an annotated variation tree.
//!
//! The [`game`] module represents immutable positions, validates and
//! enumerates legal moves, applies moves to produce new positions, and
//! generates algebraic/figurine notation. The [`history`] module records
//! played moves in a tree of positions (a main line plus ordered variants,
//! with per-node comments), and [`session`] ties the two together behind a
//! caller-owned cursor.
//!
//! # Example
//! ```
//! use chess_study::{Game, Move, Square};
//!
//! let game = Game::initial();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let e4 = Move::new(Square(1, 4), Square(3, 4));
//! assert_eq!(game.san_for_move(e4, None).unwrap(), "e4");
//! let after = game.apply_move(e4, None).unwrap();
//! assert!(!after.info().white_to_move());
//! ```

pub mod game;
pub mod history;
pub mod session;

pub use game::{
    Board, CastlingRights, Color, FenError, Game, GameBuilder, GameInfo, Move, MoveError, Piece,
    PromotablePiece, Promotion, Square, SquareError,
};
pub use history::{History, NodeId};
pub use session::GameSession;
