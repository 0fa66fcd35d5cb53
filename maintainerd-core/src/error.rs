//! Error types for maintainerd

use thiserror::Error;

/// Result type alias for maintainerd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for maintainerd operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `.maintainerd` document could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The body has no maintainerd separator, so there is no checklist to inspect
    #[error("pull request body does not contain the maintainerd checklist")]
    MissingSentinel,
}
