//! Core error types for polylex-util crate
//!
//! These errors cover the setup of a scan (choosing a language, sizing the
//! symbol table). Scanning itself never fails: bad input is reported as
//! diagnostics and recovered from.

use thiserror::Error;

/// Error type for language profile lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The language name is not one of the supported front-ends
    #[error("unknown language: {0} (expected one of c, java, python, rust, sql)")]
    UnknownLanguage(String),

    /// The file extension does not map to a supported language
    #[error("cannot infer language from extension: {0}")]
    UnknownExtension(String),
}

/// Error type for symbol table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// A table needs at least one bucket
    #[error("symbol table bucket count must be at least 1")]
    ZeroBuckets,

    /// The layout name is not `simple` or `scoped`
    #[error("unknown symbol table layout: {0} (expected simple or scoped)")]
    UnknownLayout(String),

    /// The hash name is not `additive` or `djb2`
    #[error("unknown hash strategy: {0} (expected additive or djb2)")]
    UnknownHash(String),
}

/// Result type alias for profile operations
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

/// Result type alias for symbol table operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
