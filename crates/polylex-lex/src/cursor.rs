//! Byte cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which hands out source bytes one
//! at a time, tracks the row/column of the next unread byte, and can take
//! back exactly one byte that was read too far.

use polylex_util::Position;

/// A cursor over raw source bytes with a single-slot pushback buffer.
///
/// Every byte returned by [`Cursor::next`] advances the position: a newline
/// moves to column 1 of the next row, anything else moves one column right.
/// [`Cursor::pushback`] undoes the last read, including its effect on the
/// position, so the position always names the next byte to be read.
///
/// # Example
///
/// ```
/// use polylex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"ab");
/// assert_eq!(cursor.next(), Some(b'a'));
/// let b = cursor.next().unwrap();
/// cursor.pushback(b);
/// assert_eq!(cursor.position().col, 2);
/// assert_eq!(cursor.next(), Some(b'b'));
/// assert_eq!(cursor.next(), None);
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Offset of the next byte not yet taken from `source`.
    offset: usize,

    /// Position of the next byte to be returned.
    position: Position,

    /// Position before the most recent read, restored on pushback.
    previous: Position,

    /// Byte returned by the next read instead of `source[offset]`.
    pending: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at row 1, column 1.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::START,
            previous: Position::START,
            pending: None,
        }
    }

    /// Reads the next byte, or `None` at end of input.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = match self.pending.take() {
            Some(byte) => byte,
            None => {
                let byte = *self.source.get(self.offset)?;
                self.offset += 1;
                byte
            },
        };
        self.previous = self.position;
        self.position.bump(byte);
        Some(byte)
    }

    /// Returns `byte` to the cursor so the next read yields it again.
    ///
    /// Only the byte returned by the most recent [`Cursor::next`] may be
    /// pushed back, and only once.
    #[inline]
    pub fn pushback(&mut self, byte: u8) {
        debug_assert!(
            self.pending.is_none(),
            "cursor holds at most one byte of pushback"
        );
        self.pending = Some(byte);
        self.position = self.previous;
    }

    /// Looks at the next byte without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<u8> {
        let byte = self.next()?;
        self.pushback(byte);
        Some(byte)
    }

    /// Position of the next byte to be read.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current row number (1-based).
    pub fn row(&self) -> u32 {
        self.position.row
    }

    /// Current column number (1-based).
    pub fn col(&self) -> u32 {
        self.position.col
    }

    /// Returns true if no bytes remain, including pushed-back ones.
    pub fn is_at_end(&self) -> bool {
        self.pending.is_none() && self.offset >= self.source.len()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.offset + usize::from(self.pending.is_some())
    }
}
