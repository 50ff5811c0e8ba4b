//! Error types for the Yari library.
//!
//! All errors are represented by the [`YariError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use yari::error::{Result, YariError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(YariError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Yari operations.
///
/// This enum represents all possible errors that can occur in the Yari
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum YariError {
    /// Query-related errors (assembly, invalid queries, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Pattern-related errors (rule compilation, matching)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// History-related errors
    #[error("History error: {0}")]
    History(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with YariError.
pub type Result<T> = std::result::Result<T, YariError>;

impl YariError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        YariError::Query(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        YariError::Pattern(msg.into())
    }

    /// Create a new history error.
    pub fn history<S: Into<String>>(msg: S) -> Self {
        YariError::History(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        YariError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        YariError::Other(msg.into())
    }
}
