//! String and character literal lexing.
//!
//! Literal bodies are collected byte for byte up to the matching quote,
//! whatever their encoding. Escapes are not interpreted, so `\"` ends a
//! literal like any other quote.

use polylex_util::{Diagnostic, DiagnosticCode};
use tracing::warn;

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a literal opened by `quote`.
    ///
    /// Returns `None` when the quote opened a triple-quote comment instead.
    pub(crate) fn lex_literal(&mut self, quote: u8) -> Option<Token> {
        if self.profile.comment().triple_quote && self.cursor.peek() == Some(quote) {
            self.cursor.next();
            if self.cursor.peek() == Some(quote) {
                self.cursor.next();
                self.skip_triple_quote_comment(quote);
                return None;
            }
            return Some(self.literal(quote, Vec::new()));
        }

        let mut body = Vec::new();
        loop {
            match self.cursor.next() {
                Some(byte) if byte == quote => break,
                Some(byte) => body.push(byte),
                None => {
                    self.unterminated_literal(quote);
                    break;
                },
            }
        }
        Some(self.literal(quote, body))
    }

    fn literal(&self, quote: u8, body: Vec<u8>) -> Token {
        Token::literal(self.profile.literal_kind(quote), quote, body, self.token_start)
    }

    fn unterminated_literal(&mut self, quote: u8) {
        let kind = self.profile.literal_kind(quote);
        warn!(start = %self.token_start, %kind, "unterminated literal");
        self.report(
            Diagnostic::warning(format!("unterminated {} literal", kind), self.token_start)
                .with_code(DiagnosticCode::W_LEXER_UNTERMINATED_LITERAL),
        );
    }
}
