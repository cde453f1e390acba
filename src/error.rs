//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all
//! error cases in the library. There are only a few fatal conditions:
//!
//! - the export is empty or contains no timestamped line ([`ChatstatError::Parse`])
//! - I/O or UTF-8 decoding failed while loading an export or stop-word list
//! - a two-user comparison was requested on a chat with fewer than two users
//!
//! Malformed individual lines are never errors; the parser folds them into
//! the preceding message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the export or stop-word file doesn't
    /// exist, or when an output file cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export cannot be analyzed.
    ///
    /// No partial results are produced when this is returned.
    #[error("Cannot analyze this file{}: {source}", .path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    Parse {
        /// Why the export was rejected
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when the uploaded bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A comparison needs at least two distinct (non-notification) senders.
    #[error("Comparison requires at least 2 users, found {found}")]
    InsufficientUsers {
        /// Number of distinct human senders in the chat
        found: usize,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input is empty or whitespace-only
    #[error("input is empty")]
    Empty,
    /// Not a single line matched the dated-message prefix
    #[error("no timestamped lines found ({lines} lines scanned)")]
    NoTimestampedLines {
        /// Number of lines that were scanned
        lines: usize,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "export decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a parse error for an empty export.
    pub fn empty_input(path: Option<PathBuf>) -> Self {
        ChatstatError::Parse {
            source: ParseErrorKind::Empty,
            path,
        }
    }

    /// Creates a parse error for an export without any timestamped line.
    pub fn no_timestamped_lines(lines: usize, path: Option<PathBuf>) -> Self {
        ChatstatError::Parse {
            source: ParseErrorKind::NoTimestampedLines { lines },
            path,
        }
    }

    /// Creates an insufficient-users error.
    pub fn insufficient_users(found: usize) -> Self {
        ChatstatError::InsufficientUsers { found }
    }

    /// Attaches a file path to a parse error. Other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatError::Parse { source, .. } => ChatstatError::Parse {
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatError::Parse { .. })
    }

    /// Returns `true` if the comparison was rejected for lack of users.
    pub fn is_insufficient_users(&self) -> bool {
        matches!(self, ChatstatError::InsufficientUsers { .. })
    }
}
