//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! A transcript either parses completely or not at all: a timestamp that
//! matches the boundary pattern but fails calendar parsing fails the whole
//! file, because it means the export convention is not the supported one.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordSet;
///
/// fn my_function() -> Result<RecordSet> {
///     // ... operations that may fail
///     Ok(RecordSet::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A timestamp matched the boundary pattern but failed to parse into a
    /// calendar value.
    ///
    /// This is fatal for the whole transcript: it signals that the file does
    /// not follow the supported `D/M/YY, H:MM:SS AM|PM` convention, not that
    /// a single line is broken.
    #[error("unsupported timestamp '{input}'{}: expected D/M/YY, H:MM:SS AM|PM", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Timestamp {
        /// The timestamp text that failed to parse (brackets stripped)
        input: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The transcript doesn't match the expected export structure.
    ///
    /// This occurs when no timestamp boundary matches at all — the file is
    /// not a supported chat export.
    #[error("invalid transcript: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a timestamp parse error.
    pub fn timestamp(input: impl Into<String>) -> Self {
        ChatlensError::Timestamp {
            input: input.into(),
            path: None,
        }
    }

    /// Creates a timestamp parse error with the offending file path.
    pub fn timestamp_in_file(input: impl Into<String>, path: PathBuf) -> Self {
        ChatlensError::Timestamp {
            input: input.into(),
            path: Some(path),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a timestamp parse error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, ChatlensError::Timestamp { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
