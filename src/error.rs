//! Error types for the Quill library.
//!
//! All errors are represented by the [`QuillError`] enum. Correction itself
//! never fails once an engine is constructed; errors here cover configuration
//! problems (malformed rule patterns, unreadable rule files) and I/O.
//!
//! # Examples
//!
//! ```
//! use quill::error::{QuillError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuillError::rule("invalid pattern in rule 'teh_rule'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Quill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rule configuration errors (malformed patterns, unknown names)
    #[error("Rule error: {0}")]
    Rule(String),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuillError.
pub type Result<T> = std::result::Result<T, QuillError>;

impl QuillError {
    /// Create a new rule error.
    pub fn rule<S: Into<String>>(msg: S) -> Self {
        QuillError::Rule(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        QuillError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QuillError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuillError::Other(msg.into())
    }
}
