//! Error types for GitHub operations

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-2xx status
    #[error("GitHub API returned {status}: {body}")]
    Status {
        /// Response status
        status: StatusCode,
        /// Response body, for diagnostics
        body: String,
    },

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// File contents could not be decoded
    #[error("Failed to decode file contents: {0}")]
    Decode(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration or checklist error
    #[error(transparent)]
    Core(#[from] maintainerd_core::Error),
}

impl Error {
    /// HTTP status of a rejected request, if that is what failed
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
