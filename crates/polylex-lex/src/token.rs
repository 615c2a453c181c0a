//! Token definitions.
//!
//! A token is a classified lexeme plus the position of its first byte.
//! Tokens print in the bracketed `<KIND,LEXEME,ROW,COL>` form; invalid
//! bytes print as a diagnostic line instead.

use polylex_util::Position;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io;

/// Token category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A word in the profile's keyword set
    Keyword,
    /// Any other word
    Identifier,
    /// A word the profile's function rule classifies as a call or definition
    Function,
    /// A run of digits (and `.` where reals are allowed)
    Number,
    /// A quoted string literal
    String,
    /// A character literal
    Char,
    /// An operator, one or two bytes long
    Operator,
    /// A delimiter byte
    Delimiter,
    /// A preprocessor directive marker
    Preprocessor,
    /// A byte that belongs to no category
    Invalid,
}

impl TokenKind {
    /// Tag used in the bracketed output form
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Function => "FUNC",
            TokenKind::Number => "NUM",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Operator => "OP",
            TokenKind::Delimiter => "DELIM",
            TokenKind::Preprocessor => "PREPROC",
            TokenKind::Invalid => "INVALID",
        }
    }

    /// Returns true for string and char literals
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Char)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Source bytes of a token, kept exactly as read.
///
/// Literal bodies may hold bytes that are not UTF-8. `Display` and JSON
/// render each such byte as `\xNN`; [`Token::write_to`] writes the bytes
/// unchanged.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Lexeme(Vec<u8>);

impl Lexeme {
    /// The raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The text, if the bytes are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for an empty literal body
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Lexeme {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<String> for Lexeme {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for Lexeme {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<u8> for Lexeme {
    fn from(byte: u8) -> Self {
        Self(vec![byte])
    }
}

impl PartialEq<str> for Lexeme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Lexeme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<String> for Lexeme {
    fn eq(&self, other: &String) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => return f.write_str(text),
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    f.write_str(std::str::from_utf8(valid).map_err(|_| fmt::Error)?)?;
                    let bad = err.error_len().unwrap_or(after.len());
                    for byte in &after[..bad] {
                        write!(f, "\\x{:02x}", byte)?;
                    }
                    rest = &after[bad..];
                },
            }
        }
    }
}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

impl Serialize for Lexeme {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// A classified lexeme with its source position
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Matched bytes; for literals, the bytes between the quotes
    pub lexeme: Lexeme,
    /// Row of the first byte (1-based)
    pub row: u32,
    /// Column of the first byte (1-based)
    pub col: u32,
    /// Opening quote byte of a string or char literal
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_quote")]
    pub quote: Option<u8>,
}

fn serialize_quote<S: Serializer>(quote: &Option<u8>, s: S) -> Result<S::Ok, S::Error> {
    match quote {
        Some(q) => s.serialize_char(char::from(*q)),
        None => s.serialize_none(),
    }
}

impl Token {
    /// Create a token starting at `position`
    pub fn new(kind: TokenKind, lexeme: impl Into<Lexeme>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            row: position.row,
            col: position.col,
            quote: None,
        }
    }

    /// Create a string or char literal token
    pub fn literal(kind: TokenKind, quote: u8, text: impl Into<Lexeme>, position: Position) -> Self {
        Self {
            quote: Some(quote),
            ..Self::new(kind, text, position)
        }
    }

    /// Position of the token's first byte
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Writes the bracketed form with the lexeme's bytes unchanged.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        if self.kind == TokenKind::Invalid {
            return write!(out, "Invalid token at {} {}", self.row, self.col);
        }
        write!(out, "<{},", self.kind)?;
        match self.quote {
            Some(quote) => {
                out.write_all(&[quote])?;
                out.write_all(self.lexeme.as_bytes())?;
                out.write_all(&[quote])?;
            },
            None => out.write_all(self.lexeme.as_bytes())?,
        }
        write!(out, ",{},{}>", self.row, self.col)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.quote) {
            (TokenKind::Invalid, _) => write!(f, "Invalid token at {} {}", self.row, self.col),
            (_, Some(quote)) => {
                let quote = char::from(quote);
                write!(
                    f,
                    "<{},{}{}{},{},{}>",
                    self.kind, quote, self.lexeme, quote, self.row, self.col
                )
            },
            _ => write!(f, "<{},{},{},{}>", self.kind, self.lexeme, self.row, self.col),
        }
    }
}
