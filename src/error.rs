//! Error types for snippet loading.
//!
//! The parser itself never fails; only the loader touches the file system.
//! Any failure to read a single snippet collapses into [`Error::NotFound`]
//! so callers can show one "not found" state regardless of the cause.

use thiserror::Error;

/// Result type for snipdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Snippet is missing, unreadable, or outside the root
    #[error("Snippet not found: {path}")]
    NotFound { path: String },

    /// Listing the snippet root failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output format name
    #[error("unknown format: {0}. Use markdown or json")]
    Format(String),
}
