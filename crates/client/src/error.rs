//! Client error types.

use thiserror::Error;

/// The one failure the client handles: fetching items did not produce a list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never got a response (connection refused, DNS, timeout).
    #[error("Failed to fetch items: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Failed to fetch items: server responded with {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a JSON array of strings.
    #[error("Failed to fetch items: invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, FetchError>;
