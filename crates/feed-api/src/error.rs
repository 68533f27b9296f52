//! Remote feed error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

/// Errors surfaced by [`RemoteFeedLoader`](crate::RemoteFeedLoader)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoteFeedError {
    /// The request never reached the server or produced no response
    #[error("Could not reach the feed server")]
    Connectivity,

    /// The server answered with a non-200 status or an undecodable body
    #[error("Feed server returned invalid data")]
    InvalidData,
}
