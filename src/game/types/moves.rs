//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A candidate move: an origin and a destination square.
///
/// Carries no validity of its own; whether it is en passant, a castle, a
/// promotion or simply illegal depends entirely on the position it is
/// played in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// File change from origin to destination.
    #[inline]
    #[must_use]
    pub(crate) const fn delta_file(self) -> isize {
        self.to.file() as isize - self.from.file() as isize
    }

    /// Rank change from origin to destination.
    #[inline]
    #[must_use]
    pub(crate) const fn delta_rank(self) -> isize {
        self.to.rank() as isize - self.from.rank() as isize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
