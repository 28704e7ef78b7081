//! Error types for the goi library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`GoiError`] enum.
//!
//! # Examples
//!
//! ```
//! use goi::error::{GoiError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GoiError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for goi operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the message-carrying variants.
#[derive(Error, Debug)]
pub enum GoiError {
    /// I/O errors (reading source files, known-word lists, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction, tokenization failures)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Structural parse errors (malformed subtitle cue syntax)
    #[error("Parse error: {0}")]
    Parse(String),

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

/// Result type alias for operations that may fail with GoiError.
pub type Result<T> = std::result::Result<T, GoiError>;

impl GoiError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GoiError::Analysis(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        GoiError::Parse(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GoiError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GoiError::Other(msg.into())
    }
}
