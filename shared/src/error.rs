//! Error types for the story player Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving the latest story.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport error talking to the story feed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The story feed answered with a non-success status
    #[error("Failed to fetch latest story metadata from {url}: status {status}")]
    Fetch { url: String, status: u16 },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
