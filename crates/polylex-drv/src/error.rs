//! Error handling for the polylex driver.
//!
//! Everything here is fatal: the run stops before any token is written.
//! Problems inside the scanned source are diagnostics, not errors.

use std::path::PathBuf;

use polylex_util::{ProfileError, SymbolError};
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input file could not be opened or read.
    #[error("Cannot open file {}: {source}", .path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested language is not supported.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The symbol table settings are invalid.
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_display() {
        let err = DriverError::Open {
            path: PathBuf::from("input.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "Cannot open file input.c: No such file or directory");
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_profile_error_is_transparent() {
        let err: DriverError = ProfileError::UnknownLanguage("cobol".to_string()).into();
        assert!(err.to_string().starts_with("unknown language: cobol"));
    }

    #[test]
    fn test_symbol_error_conversion() {
        let err: DriverError = SymbolError::ZeroBuckets.into();
        assert!(matches!(err, DriverError::Symbol(SymbolError::ZeroBuckets)));
    }
}
