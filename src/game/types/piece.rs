//! Piece, color and promotion types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Parse a piece from a character (p, n, b, r, q, k, any case)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// The Unicode chess glyph for this piece in the given color.
    #[must_use]
    pub const fn figurine(self, color: Color) -> char {
        match (color, self) {
            (Color::White, Piece::King) => '\u{2654}',
            (Color::White, Piece::Queen) => '\u{2655}',
            (Color::White, Piece::Rook) => '\u{2656}',
            (Color::White, Piece::Bishop) => '\u{2657}',
            (Color::White, Piece::Knight) => '\u{2658}',
            (Color::White, Piece::Pawn) => '\u{2659}',
            (Color::Black, Piece::King) => '\u{265a}',
            (Color::Black, Piece::Queen) => '\u{265b}',
            (Color::Black, Piece::Rook) => '\u{265c}',
            (Color::Black, Piece::Bishop) => '\u{265d}',
            (Color::Black, Piece::Knight) => '\u{265e}',
            (Color::Black, Piece::Pawn) => '\u{265f}',
        }
    }

    /// Returns true if this piece can move diagonally any distance (Bishop, Queen)
    #[inline]
    #[must_use]
    pub(crate) const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece can move along ranks/files any distance (Rook, Queen)
    #[inline]
    #[must_use]
    pub(crate) const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn captures en passant from (4 for White, 3 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_from_rank(self) -> usize {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    /// Rank a pawn lands on after an en passant capture (5 for White, 2 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_to_rank(self) -> usize {
        match self {
            Color::White => 5,
            Color::Black => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds a pawn may promote to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotablePiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotablePiece {
    /// All promotion targets in order of typical preference (queen first)
    pub const ALL: [PromotablePiece; 4] = [
        PromotablePiece::Queen,
        PromotablePiece::Rook,
        PromotablePiece::Bishop,
        PromotablePiece::Knight,
    ];

    /// The plain piece kind this promotion target corresponds to.
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            PromotablePiece::Knight => Piece::Knight,
            PromotablePiece::Bishop => Piece::Bishop,
            PromotablePiece::Rook => Piece::Rook,
            PromotablePiece::Queen => Piece::Queen,
        }
    }
}

/// A colored promotion choice.
///
/// The color must match the side making the promoting move; application
/// fails otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Promotion {
    pub piece: PromotablePiece,
    pub color: Color,
}

impl Promotion {
    #[must_use]
    pub const fn new(piece: PromotablePiece, color: Color) -> Self {
        Promotion { piece, color }
    }

    /// The default promotion: a queen of the given color.
    #[must_use]
    pub const fn queen(color: Color) -> Self {
        Promotion {
            piece: PromotablePiece::Queen,
            color,
        }
    }
}
