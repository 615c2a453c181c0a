//! Source position tracking.
//!
//! Scanning works on a single in-memory input, so a location is just a
//! row and a column. Both count from 1; columns count bytes.

use serde::Serialize;
use std::fmt;

/// A 1-based row/column location in the source.
///
/// # Examples
///
/// ```
/// use polylex_util::Position;
///
/// let mut pos = Position::START;
/// pos.bump(b'a');
/// assert_eq!(pos, Position::new(1, 2));
/// pos.bump(b'\n');
/// assert_eq!(pos, Position::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, in bytes)
    pub col: u32,
}

impl Position {
    /// The position of the first byte of any input
    pub const START: Position = Position { row: 1, col: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Advance past one consumed byte.
    ///
    /// A newline moves to the start of the next row; any other byte moves
    /// one column to the right.
    #[inline]
    pub fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
