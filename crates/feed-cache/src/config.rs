//! Cache configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::policy::FeedCachePolicy;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// File backing the feed store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Maximum age of a cached feed in calendar days
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            max_age_days: default_max_age_days(),
        }
    }
}

impl CacheConfig {
    /// Create a new cache config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set store path
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set maximum age in days
    pub fn with_max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = days;
        self
    }

    /// Expiry policy described by this config
    pub fn policy(&self) -> FeedCachePolicy {
        FeedCachePolicy::new(self.max_age_days)
    }
}

// Default value functions for serde
fn default_store_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("feed")
        .join("feed.store")
}

fn default_max_age_days() -> u32 {
    FeedCachePolicy::DEFAULT_MAX_AGE_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.max_age_days, 7);
        assert!(config.store_path.ends_with("feed/feed.store"));
        assert_eq!(config.policy().max_age_days(), FeedCachePolicy::DEFAULT_MAX_AGE_DAYS);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CacheConfig::new()
            .with_store_path("/tmp/feed.store")
            .with_max_age_days(2);

        assert_eq!(config.store_path, PathBuf::from("/tmp/feed.store"));
        assert_eq!(config.policy().max_age_days(), 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{"max_age_days": 3}"#).unwrap();
        assert_eq!(config.max_age_days, 3);
        assert_eq!(config.store_path, default_store_path());
    }
}
