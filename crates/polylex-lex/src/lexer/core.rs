//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its main loop and the first-byte
//! dispatch.

use polylex_sym::{SymbolTable, GLOBAL_SCOPE};
use polylex_util::{Diagnostic, DiagnosticCode, Handler, Position};
use tracing::trace;

use crate::ascii::{is_blank, is_ident_start};
use crate::cursor::Cursor;
use crate::profile::LanguageProfile;
use crate::token::{Lexeme, Token, TokenKind};

/// Profile-driven lexer.
///
/// The lexer reads one byte at a time, skips blanks and newlines, and
/// classifies each lexeme according to its profile. Identifiers and
/// functions are recorded in the borrowed symbol table; invalid bytes and
/// unterminated literals are reported to the borrowed handler and scanning
/// continues.
///
/// # Example
///
/// ```
/// use polylex_lex::{Language, Lexer, TokenKind};
/// use polylex_sym::{SymbolTable, TableLayout};
/// use polylex_util::Handler;
///
/// let profile = Language::C.profile();
/// let mut table = SymbolTable::new(TableLayout::Simple);
/// let mut handler = Handler::new();
///
/// let tokens = Lexer::new(b"x = 1;", &profile, &mut table, &mut handler).tokenize();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Number, TokenKind::Delimiter]
/// );
/// assert_eq!(table.len(), 1);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Language configuration.
    pub(crate) profile: &'a LanguageProfile,

    /// Table receiving identifier and function symbols.
    pub(crate) symbols: &'a mut SymbolTable,

    /// Diagnostic sink.
    pub(crate) handler: &'a mut Handler,

    /// Name of the most recently detected function, or `Global`.
    pub(crate) current_scope: String,

    /// Most recent keyword, kept until the next keyword.
    pub(crate) last_keyword: Option<String>,

    /// Position of the first byte of the current token.
    pub(crate) token_start: Position,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(
        source: &'a [u8],
        profile: &'a LanguageProfile,
        symbols: &'a mut SymbolTable,
        handler: &'a mut Handler,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            profile,
            symbols,
            handler,
            current_scope: GLOBAL_SCOPE.to_string(),
            last_keyword: None,
            token_start: Position::START,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Blanks, newlines and comments produce no token; the loop keeps
    /// reading until a token is classified or the input runs out.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let start = self.cursor.position();
            let byte = self.cursor.next()?;
            if is_blank(byte) || byte == b'\n' {
                continue;
            }

            self.token_start = start;
            if let Some(token) = self.dispatch(byte) {
                trace!(token = %token, "lexed token");
                return Some(token);
            }
        }
    }

    /// Scans the remaining input into a vector.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Classifies the lexeme starting with `byte`.
    ///
    /// Returns `None` when the bytes formed a comment.
    fn dispatch(&mut self, byte: u8) -> Option<Token> {
        if self.profile.is_preprocessor(byte) {
            return Some(self.lex_preprocessor(byte));
        }

        if self.profile.comment().may_open(byte) && self.skip_comment(byte) {
            return None;
        }

        if is_ident_start(byte) {
            return Some(self.lex_identifier(byte));
        }

        if byte.is_ascii_digit() {
            return Some(self.lex_number(byte));
        }

        if self.profile.is_quote(byte) {
            return self.lex_literal(byte);
        }

        if self.profile.is_single_op(byte) {
            return Some(self.lex_operator(byte));
        }

        if self.profile.is_delimiter(byte) {
            return Some(self.token(TokenKind::Delimiter, byte));
        }

        Some(self.lex_invalid(byte))
    }

    fn lex_invalid(&mut self, byte: u8) -> Token {
        self.report(
            Diagnostic::error(format!("invalid byte 0x{:02x}", byte), self.token_start)
                .with_code(DiagnosticCode::E_LEXER_INVALID_BYTE),
        );
        self.token(TokenKind::Invalid, byte)
    }

    /// Builds a token at the current token start.
    pub(crate) fn token(&self, kind: TokenKind, lexeme: impl Into<Lexeme>) -> Token {
        Token::new(kind, lexeme, self.token_start)
    }

    /// Emits a diagnostic to the handler.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.handler.emit(diagnostic);
    }

    /// Scope that new identifiers are recorded under.
    pub fn current_scope(&self) -> &str {
        &self.current_scope
    }

    /// Most recent keyword seen, if any.
    pub fn last_keyword(&self) -> Option<&str> {
        self.last_keyword.as_deref()
    }

    /// Position of the next byte to be read.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Profile driving this lexer.
    pub fn profile(&self) -> &LanguageProfile {
        self.profile
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
