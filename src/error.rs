//! Centralized error handling for file-picker
//!
//! A picker call either returns a selection (possibly empty, when the user
//! cancels) or one of the errors below. Cancelling is never an error.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for picker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for picker operations.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Environment Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// No windowing system is reachable, so no host window can be created
    DisplayUnavailable { reason: String },

    /// The backend failed while showing a dialog
    Dialog(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Options Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// A file type filter has an empty label or an empty pattern
    InvalidFilter { label: String, pattern: String },

    /// Failed to parse picker options (invalid JSON/format)
    OptionsParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::OptionsParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display trait implementation for user-friendly error messages
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DisplayUnavailable { reason } => {
                write!(f, "No display available for the file dialog: {}", reason)
            }
            Error::Dialog(msg) => write!(f, "File dialog failed: {}", msg),
            Error::InvalidFilter { label, pattern } => {
                write!(f, "Invalid file filter ('{}', '{}')", label, pattern)
            }
            Error::OptionsParse { message, .. } => {
                write!(f, "Invalid picker options: {}", message)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::error::Error trait implementation for error chaining
// ─────────────────────────────────────────────────────────────────────────────
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OptionsParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::DisplayUnavailable { .. } | Error::Dialog(_) | Error::InvalidFilter { .. } => {
                None
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
