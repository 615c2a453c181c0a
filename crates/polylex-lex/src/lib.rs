//! polylex-lex - Profile-Driven Lexical Scanner
//!
//! This crate turns the raw bytes of a C, Java, Python, Rust or SQL source
//! file into an ordered stream of classified tokens, recording every
//! identifier and function it sees in a [`polylex_sym::SymbolTable`].
//!
//! # Overview
//!
//! There is one scanning engine. Everything language-specific (keywords,
//! operators, delimiters, comment markers, quotes, the function rule) lives
//! in a [`LanguageProfile`] built from a [`Language`]. The engine reads one
//! byte at a time through a [`Cursor`] with a single byte of pushback.
//!
//! # Example Usage
//!
//! ```
//! use polylex_lex::{Language, Lexer};
//! use polylex_sym::{SymbolTable, TableLayout};
//! use polylex_util::Handler;
//!
//! let profile = Language::C.profile();
//! let mut table = SymbolTable::new(TableLayout::Simple);
//! let mut handler = Handler::new();
//!
//! let mut lexer = Lexer::new(b"int add(int a)", &profile, &mut table, &mut handler);
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.to_string(), "<KEYWORD,int,1,1>");
//! assert_eq!(lexer.next_token().unwrap().to_string(), "<FUNC,add,1,5>");
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Byte cursor with one-byte pushback and row/column tracking
//! - [`profile`] - Languages and their profiles
//! - [`token`] - Token kinds and the bracketed output form
//! - [`lexer`] - The scanning engine
//! - [`ascii`] - Byte classes
//!
//! # Token Categories
//!
//! | Kind | Tag | Lexeme |
//! |------|-----|--------|
//! | Keyword | `KEYWORD` | word in the profile's keyword set |
//! | Identifier | `IDENTIFIER` | any other word |
//! | Function | `FUNC` | word matching the profile's function rule |
//! | Number | `NUM` | digits, with `.` in C, Java and Rust |
//! | String | `STRING` | text between the quotes |
//! | Char | `CHAR` | text between `'` quotes in C, Java and Rust |
//! | Operator | `OP` | one or two bytes |
//! | Delimiter | `DELIM` | one byte |
//! | Preprocessor | `PREPROC` | `#` (C only) |
//! | Invalid | - | the offending byte |
//!
//! Lexemes are raw bytes ([`Lexeme`]); literal bodies are not required to be
//! UTF-8.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod lexer;
pub mod profile;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use profile::{CommentSyntax, FunctionDetect, Language, LanguageProfile};
pub use token::{Lexeme, Token, TokenKind};
