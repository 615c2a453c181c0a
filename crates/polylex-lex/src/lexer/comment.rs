//! Comment skipping.
//!
//! Comment markers share their first byte with an operator (`/`, `-`), so
//! every check peeks one byte and pushes it back on a mismatch. A byte that
//! opens no comment falls through to the operator rule.

use polylex_util::{Diagnostic, DiagnosticCode};
use tracing::{debug, warn};

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a comment opened by `first`, if any.
    ///
    /// Returns false, with nothing but `first` consumed, when no marker of
    /// the profile matches.
    pub(crate) fn skip_comment(&mut self, first: u8) -> bool {
        let comment = *self.profile.comment();

        if let Some(marker) = comment.line {
            if self.match_marker(first, marker.as_bytes()) {
                self.skip_line_comment();
                return true;
            }
        }

        if let Some((open, close)) = comment.block {
            if self.match_marker(first, open.as_bytes()) {
                self.skip_block_comment(close.as_bytes());
                return true;
            }
        }

        false
    }

    /// Checks `first` plus the peeked byte against a one or two byte marker,
    /// consuming the second byte on a match.
    fn match_marker(&mut self, first: u8, marker: &[u8]) -> bool {
        match *marker {
            [only] => only == first,
            [open, second] if open == first => {
                if self.cursor.peek() == Some(second) {
                    self.cursor.next();
                    true
                } else {
                    false
                }
            },
            _ => false,
        }
    }

    /// Skips to the end of the line, leaving the newline unread.
    pub(crate) fn skip_line_comment(&mut self) {
        while let Some(byte) = self.cursor.next() {
            if byte == b'\n' {
                self.cursor.pushback(byte);
                break;
            }
        }
        debug!(start = %self.token_start, "skipped line comment");
    }

    /// Skips through the two-byte close marker or to end of input.
    fn skip_block_comment(&mut self, close: &[u8]) {
        let (first, second) = match *close {
            [first, second] => (first, second),
            _ => return,
        };

        while let Some(byte) = self.cursor.next() {
            if byte == first && self.cursor.peek() == Some(second) {
                self.cursor.next();
                debug!(start = %self.token_start, end = %self.cursor.position(), "skipped block comment");
                return;
            }
        }

        self.unterminated_comment();
    }

    /// Skips a triple-quote comment whose three opening quotes were consumed.
    ///
    /// The comment ends after three consecutive `quote` bytes.
    pub(crate) fn skip_triple_quote_comment(&mut self, quote: u8) {
        let mut run = 0;
        while let Some(byte) = self.cursor.next() {
            if byte == quote {
                run += 1;
                if run == 3 {
                    debug!(start = %self.token_start, "skipped triple-quote comment");
                    return;
                }
            } else {
                run = 0;
            }
        }

        self.unterminated_comment();
    }

    fn unterminated_comment(&mut self) {
        warn!(start = %self.token_start, "unterminated comment");
        self.report(
            Diagnostic::warning("unterminated comment", self.token_start)
                .with_code(DiagnosticCode::W_LEXER_UNTERMINATED_COMMENT),
        );
    }
}
