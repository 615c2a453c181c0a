//! Lexer module.
//!
//! The scanner is one engine driven by a [`LanguageProfile`](crate::LanguageProfile),
//! split into focused components:
//! - `core` - Lexer struct, main loop and dispatch
//! - `comment` - Line, block and triple-quote comment skipping
//! - `identifier` - Keywords, identifiers and function detection
//! - `number` - Number literals
//! - `string` - String and char literals
//! - `operator` - Operators, delimiters and preprocessor markers

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
