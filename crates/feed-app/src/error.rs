//! Application error types

use feed_cache::CacheError;
use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Sync errors
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote feed failed and the cache could not be read either
    #[error("Remote feed unavailable ({remote}) and cached feed unreadable: {cache}")]
    Unavailable {
        remote: String,
        #[source]
        cache: CacheError,
    },
}
