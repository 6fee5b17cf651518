//! Test generator error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TestgenError>;

#[derive(Debug, Error)]
pub enum TestgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid source path: {0}")]
    InvalidSource(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completions API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Completions response missing message content")]
    MissingContent,
}
