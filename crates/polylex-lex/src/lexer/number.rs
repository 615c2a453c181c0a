//! Number literal lexing.

use crate::ascii::is_number_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a greedy run of digits, plus `.` where the profile allows
    /// real literals. The text is kept verbatim; no value is computed.
    pub(crate) fn lex_number(&mut self, first: u8) -> Token {
        let allow_dot = self.profile.allows_reals();
        let mut text = String::from(char::from(first));
        while let Some(byte) = self.cursor.next() {
            if !is_number_continue(byte, allow_dot) {
                self.cursor.pushback(byte);
                break;
            }
            text.push(char::from(byte));
        }
        self.token(TokenKind::Number, text)
    }
}
