//! Cache-related error types

use thiserror::Error;

/// Errors surfaced by a [`FeedStore`](crate::FeedStore)
///
/// The loader hands these to its caller unchanged.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Deserialization error: {message}")]
    Deserialization { message: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl CacheError {
    /// Create a backend-specific store error
    pub fn store(message: impl Into<String>) -> Self {
        CacheError::Store {
            message: message.into(),
        }
    }
}

/// Re-export commonly used Result type
pub type Result<T> = std::result::Result<T, CacheError>;
