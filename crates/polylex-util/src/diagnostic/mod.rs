//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer never aborts on bad input. Instead it records a [`Diagnostic`]
//! in a [`Handler`] and keeps scanning; the driver decides what to do with
//! the collected diagnostics once the scan is finished.
//!
//! # Examples
//!
//! ```
//! use polylex_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use polylex_util::Position;
//!
//! let mut handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("unexpected byte '`'", Position::new(1, 4))
//!         .with_code(DiagnosticCode::E_LEXER_INVALID_BYTE),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::Position;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Input the scanner could not classify
    Error,
    /// Input the scanner accepted but that looks malformed
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Where the offending lexeme starts
    pub position: Position,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Warning, message, position)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]", self.level, code)?,
            None => write!(f, "{}", self.level)?,
        }
        write!(f, ": {} at {}", self.message, self.position)
    }
}

/// Handler for collecting diagnostics
///
/// A handler is owned by one scan. The lexer borrows it mutably for the
/// duration of the scan and the driver inspects it afterwards.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    /// All diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }
}
