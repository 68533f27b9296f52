//! Remote-first feed sync with cache fallback

use feed_cache::LocalFeedLoader;
use feed_core::{FeedImage, FeedLoader};
use tracing::{debug, info, warn};

use crate::error::SyncError;

/// Where a synced feed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    Remote,
    Cache,
}

/// Feed delivered by [`FeedSync::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedFeed {
    pub source: FeedSource,
    pub feed: Vec<FeedImage>,
}

/// Loads the feed from `remote`, keeping `local` up to date
///
/// A run first drops an invalid cache, then tries the network. A fresh feed is
/// written to the cache; when the network fails the cached feed is served instead.
pub struct FeedSync<R> {
    remote: R,
    local: LocalFeedLoader,
}

impl<R: FeedLoader> FeedSync<R> {
    pub fn new(remote: R, local: LocalFeedLoader) -> Self {
        Self { remote, local }
    }

    pub async fn run(&self) -> Result<SyncedFeed, SyncError> {
        self.local.validate_cache().await;

        match self.remote.load().await {
            Ok(feed) => {
                if let Err(e) = self.local.save(&feed).await {
                    warn!("Failed to cache remote feed: {}", e);
                } else {
                    debug!("Cached {} remote feed images", feed.len());
                }
                Ok(SyncedFeed {
                    source: FeedSource::Remote,
                    feed,
                })
            }
            Err(remote) => {
                info!("Remote feed unavailable, falling back to cache: {}", remote);
                let feed = self
                    .local
                    .load()
                    .await
                    .map_err(|cache| SyncError::Unavailable {
                        remote: remote.to_string(),
                        cache,
                    })?;
                Ok(SyncedFeed {
                    source: FeedSource::Cache,
                    feed,
                })
            }
        }
    }
}
