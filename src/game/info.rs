//! Position metadata: side to move, castling rights, en-passant file,
//! halfmove clock and move number.

use super::error::FenError;
use super::types::{CastlingRights, Color};

/// The non-placement state of a position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameInfo {
    pub(crate) white_to_move: bool,
    pub(crate) castling: CastlingRights,
    /// File of a pawn capturable en passant this ply, set only by the
    /// immediately preceding two-square pawn advance.
    pub(crate) en_passant_file: Option<usize>,
    /// Plies since the last pawn move or capture.
    pub(crate) halfmove_clock: u32,
    pub(crate) move_number: u32,
}

impl GameInfo {
    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<usize> {
        self.en_passant_file
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Parse the five metadata fields of position text (everything after
    /// the placement field).
    ///
    /// Only the numeric fields are validated: the halfmove clock must parse
    /// as a non-negative integer and the move number as a positive one. The
    /// side-to-move field is 'w' for White, anything else for Black; unknown
    /// castling characters are ignored; the en-passant field contributes
    /// only its file letter.
    pub(crate) fn from_fen_fields(fields: &[&str]) -> Result<Self, FenError> {
        debug_assert_eq!(fields.len(), 5);

        let white_to_move = fields[0] == "w";

        let mut castling = CastlingRights::none();
        for c in fields[1].chars() {
            match c {
                'K' => castling.set(Color::White, true),
                'Q' => castling.set(Color::White, false),
                'k' => castling.set(Color::Black, true),
                'q' => castling.set(Color::Black, false),
                _ => {}
            }
        }

        let en_passant_file = fields[2]
            .chars()
            .next()
            .filter(|c| ('a'..='h').contains(c))
            .map(|c| c as usize - 'a' as usize);

        let halfmove_clock =
            fields[3]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: fields[3].to_string(),
                })?;

        let move_number = fields[4]
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::InvalidMoveNumber {
                found: fields[4].to_string(),
            })?;

        Ok(GameInfo {
            white_to_move,
            castling,
            en_passant_file,
            halfmove_clock,
            move_number,
        })
    }

    /// Serialize the five metadata fields.
    ///
    /// The en-passant field, when present, renders as its file letter plus
    /// the rank a capturing pawn would land on for the current side to move
    /// (6 when White is to move, 3 when Black is).
    pub(crate) fn fen_fields(&self) -> String {
        let side = if self.white_to_move { "w" } else { "b" };

        let mut castling = String::new();
        if self.castling.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant_file {
            Some(file) => format!(
                "{}{}",
                (b'a' + file as u8) as char,
                if self.white_to_move { '6' } else { '3' }
            ),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {}",
            side, castling, en_passant, self.halfmove_clock, self.move_number
        )
    }
}
