//! Error types for content loading.
//!
//! Content fetching is the only fallible boundary of the quiz. Everything
//! downstream (state transitions, fragment selection, composition) is total.

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while fetching or parsing a content document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),

    /// The content document is not valid JSON of the expected shape.
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP request for remote content failed.
    #[error("failed to fetch content: {0}")]
    Http(#[from] reqwest::Error),

    /// The background loader went away without delivering a result.
    #[error("content loader disconnected")]
    Disconnected,
}
