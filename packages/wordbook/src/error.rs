//! Typed errors for the wordbook library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the wordbook pipeline.
#[derive(Debug, Error)]
pub enum WordbookError {
    /// Word list file does not exist
    #[error("word list not found: {}", .path.display())]
    WordListMissing { path: PathBuf },

    /// Word list file has no usable lines
    #[error("word list is empty: {}", .path.display())]
    WordListEmpty { path: PathBuf },

    /// Model provider unavailable or failed
    #[error("AI service error: {0}")]
    Ai(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// File read/write failed
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for wordbook operations.
pub type Result<T> = std::result::Result<T, WordbookError>;
