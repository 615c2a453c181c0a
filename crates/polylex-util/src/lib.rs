//! polylex-util - Core Utilities and Foundation Types
//!
//! This crate holds the small set of types shared by every phase of the
//! polylex scanner:
//!
//! - [`Position`] - 1-based row/column of a byte in the source
//! - [`diagnostic`] - diagnostic levels, codes and the collecting [`Handler`]
//! - [`error`] - error enums for profile lookup and symbol table setup
//!
//! Keyword and operator sets throughout the workspace use the Fx hashers
//! re-exported here, since every key is a short ASCII string.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod position;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{ProfileError, ProfileResult, SymbolError, SymbolResult};
pub use position::Position;

// Re-export commonly used types
pub use rustc_hash::FxHashSet;
