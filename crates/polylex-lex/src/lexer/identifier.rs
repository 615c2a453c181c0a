//! Identifier and keyword lexing.
//!
//! This module handles keywords, identifiers and the profile's function
//! rule, and records every non-keyword word in the symbol table.

use crate::ascii::is_ident_continue;
use crate::profile::FunctionDetect;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a word starting with `first`.
    ///
    /// Keywords become `last_keyword`. Other words are checked against the
    /// function rule by peeking one byte, without skipping whitespace; the
    /// peeked byte stays unread so a `(` is still lexed as a delimiter.
    pub(crate) fn lex_identifier(&mut self, first: u8) -> Token {
        let mut word = String::from(char::from(first));
        while let Some(byte) = self.cursor.next() {
            if !is_ident_continue(byte) {
                self.cursor.pushback(byte);
                break;
            }
            word.push(char::from(byte));
        }

        if self.profile.is_keyword(&word) {
            self.last_keyword = Some(word.clone());
            return self.token(TokenKind::Keyword, word);
        }

        if self.is_function() {
            self.symbols.record_function(&word);
            self.current_scope.clone_from(&word);
            self.token(TokenKind::Function, word)
        } else {
            self.symbols.record_identifier(&word, &self.current_scope);
            self.token(TokenKind::Identifier, word)
        }
    }

    fn is_function(&mut self) -> bool {
        match self.profile.function_detect() {
            FunctionDetect::OpenParen => self.cursor.peek() == Some(b'('),
            FunctionDetect::AfterKeyword(keyword) => {
                self.last_keyword.as_deref() == Some(keyword) && self.cursor.peek() == Some(b'(')
            },
            FunctionDetect::Never => false,
        }
    }
}
