//! Cache use cases: save, load and validate
//!
//! [`LocalFeedLoader`] issues at most one store operation at a time and never retries.
//! Each operation borrows the loader until it finishes, so a caller that drops the
//! operation's future (or the task owning the loader) receives no result at all.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use feed_core::{FeedImage, FeedLoader};
use tracing::{debug, warn};

use crate::{
    clock::Clock,
    config::CacheConfig,
    error::{CacheError, Result},
    model::{CachedFeed, LocalFeedImage, RetrievedFeed},
    policy::FeedCachePolicy,
    storage::FeedStore,
};

/// Saves, loads and validates the cached feed
///
/// `Tz` is the calendar the expiry policy counts days on.
#[derive(Clone)]
pub struct LocalFeedLoader<Tz: TimeZone = Local> {
    store: Arc<dyn FeedStore>,
    clock: Arc<dyn Clock>,
    policy: FeedCachePolicy<Tz>,
}

impl LocalFeedLoader {
    /// Create a loader with the default seven-day policy
    pub fn new(store: Arc<dyn FeedStore>, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            clock: Arc::new(clock),
            policy: FeedCachePolicy::default(),
        }
    }

    /// Create a loader using the policy described by `config`
    pub fn from_config(
        store: Arc<dyn FeedStore>,
        clock: impl Clock + 'static,
        config: &CacheConfig,
    ) -> Self {
        Self::new(store, clock).with_policy(config.policy())
    }
}

impl<Tz: TimeZone> LocalFeedLoader<Tz> {
    /// Set expiry policy
    pub fn with_policy<P: TimeZone>(self, policy: FeedCachePolicy<P>) -> LocalFeedLoader<P> {
        LocalFeedLoader {
            store: self.store,
            clock: self.clock,
            policy,
        }
    }

    /// Get expiry policy
    pub fn policy(&self) -> &FeedCachePolicy<Tz> {
        &self.policy
    }

    /// Replace the cached feed
    ///
    /// Deletes the current snapshot first. A failed deletion is returned as is and the
    /// insert is never attempted; otherwise the result of the insert is returned.
    pub async fn save(&self, feed: &[FeedImage]) -> Result<()> {
        self.store.delete_cached_feed().await?;
        self.cache(feed).await
    }

    async fn cache(&self, feed: &[FeedImage]) -> Result<()> {
        let local: Vec<LocalFeedImage> = feed.iter().map(LocalFeedImage::from).collect();
        let timestamp = self.clock.now();

        debug!("Caching {} feed images at {}", local.len(), timestamp);
        self.store.insert(local, timestamp).await
    }

    /// Load the cached feed
    ///
    /// An empty or expired cache yields an empty feed, not an error. The store is
    /// never modified.
    pub async fn load(&self) -> Result<Vec<FeedImage>> {
        match self.store.retrieve().await? {
            RetrievedFeed::Found(cache) if self.is_fresh(&cache) => {
                Ok(cache.feed.into_iter().map(FeedImage::from).collect())
            }
            RetrievedFeed::Found(cache) => {
                debug!("Cached feed from {} has expired", cache.timestamp);
                Ok(Vec::new())
            }
            RetrievedFeed::Empty => Ok(Vec::new()),
        }
    }

    /// Delete the cached feed when it cannot be read or has expired
    ///
    /// Failures are logged and never surfaced.
    pub async fn validate_cache(&self) {
        match self.store.retrieve().await {
            Err(e) => {
                warn!("Failed to retrieve cached feed, deleting it: {}", e);
                self.delete_invalid_cache().await;
            }
            Ok(RetrievedFeed::Found(cache)) if !self.is_fresh(&cache) => {
                debug!("Deleting expired cached feed from {}", cache.timestamp);
                self.delete_invalid_cache().await;
            }
            Ok(_) => {}
        }
    }

    fn is_fresh(&self, cache: &CachedFeed) -> bool {
        self.policy.is_valid(cache.timestamp, self.clock.now())
    }

    async fn delete_invalid_cache(&self) {
        if let Err(e) = self.store.delete_cached_feed().await {
            warn!("Failed to delete invalid cached feed: {}", e);
        }
    }
}

#[async_trait]
impl<Tz> FeedLoader for LocalFeedLoader<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
{
    type Error = CacheError;

    async fn load(&self) -> std::result::Result<Vec<FeedImage>, Self::Error> {
        LocalFeedLoader::load(self).await
    }
}

impl<Tz: TimeZone + std::fmt::Debug> std::fmt::Debug for LocalFeedLoader<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalFeedLoader")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
