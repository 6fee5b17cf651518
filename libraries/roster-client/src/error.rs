//! Error types for the Roster consumer library.

use thiserror::Error;

/// Validation failures raised when constructing a resource DTO.
///
/// The messages match what the provider team's tooling greps for, so they
/// name the resource kind explicitly ("User must have a name").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The resource name was empty
    #[error("{resource} must have a name")]
    EmptyName {
        /// Resource kind ("User", "Company", "Employee")
        resource: &'static str,
    },

    /// The resource identity was negative
    #[error("{resource} ID must be a positive integer")]
    NegativeId {
        /// Resource kind ("User", "Company", "Employee")
        resource: &'static str,
        /// The rejected identity
        id: i64,
    },
}

/// Errors that can occur when talking to the Roster provider.
#[derive(Error, Debug)]
pub enum ConsumerError {
    /// A resource in a provider response failed DTO validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid base URL at consumer construction
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("Provider error ({status}): {body}")]
    Provider { status: u16, body: String },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A `created_on` timestamp could not be parsed
    #[error("Invalid created_on timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result type alias for consumer operations.
pub type Result<T> = std::result::Result<T, ConsumerError>;
