//! Feed store backends
//!
//! A store holds at most one [`CachedFeed`]. Every backend serializes the operations
//! issued against one instance: writes are barriers against reads, and operations
//! complete in the order they were issued.

use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::{
    model::{CachedFeed, LocalFeedImage, RetrievedFeed},
    CacheError, Result,
};

/// Feed store trait
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Remove the stored snapshot
    ///
    /// Deleting an empty store succeeds.
    async fn delete_cached_feed(&self) -> Result<()>;

    /// Replace the stored snapshot
    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()>;

    /// Read the stored snapshot
    async fn retrieve(&self) -> Result<RetrievedFeed>;
}

/// In-memory feed store
///
/// `tokio::sync::RwLock` is fair, so queued operations are granted in issue order.
#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    cache: RwLock<Option<CachedFeed>>,
}

impl InMemoryFeedStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn delete_cached_feed(&self) -> Result<()> {
        let mut cache = self.cache.write().await;
        *cache = None;
        Ok(())
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()> {
        let mut cache = self.cache.write().await;
        *cache = Some(CachedFeed::new(feed, timestamp));
        Ok(())
    }

    async fn retrieve(&self) -> Result<RetrievedFeed> {
        let cache = self.cache.read().await;
        Ok(cache
            .clone()
            .map_or(RetrievedFeed::Empty, RetrievedFeed::Found))
    }
}

/// On-disk layout of the snapshot
#[derive(Debug, Serialize, Deserialize)]
struct StoredCache {
    feed: Vec<StoredFeedImage>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredFeedImage {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: Url,
}

impl From<LocalFeedImage> for StoredFeedImage {
    fn from(image: LocalFeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description,
            location: image.location,
            url: image.url,
        }
    }
}

impl From<StoredFeedImage> for LocalFeedImage {
    fn from(image: StoredFeedImage) -> Self {
        LocalFeedImage::new(image.id, image.description, image.location, image.url)
    }
}

impl From<StoredCache> for CachedFeed {
    fn from(cache: StoredCache) -> Self {
        CachedFeed::new(
            cache.feed.into_iter().map(LocalFeedImage::from).collect(),
            cache.timestamp,
        )
    }
}

/// JSON file feed store
///
/// The snapshot lives in a single file at the path given on construction. Inserts
/// write a sibling temporary file and rename it into place, so a reader never sees
/// a partially written snapshot.
#[derive(Debug)]
pub struct FileFeedStore {
    store_path: PathBuf,
    lock: RwLock<()>,
}

impl FileFeedStore {
    /// Create a store backed by the file at `store_path`
    pub fn new<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            store_path: store_path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .store_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        file_name.push(".tmp");
        self.store_path.with_file_name(file_name)
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FeedStore for FileFeedStore {
    async fn delete_cached_feed(&self) -> Result<()> {
        let _guard = self.lock.write().await;

        match fs::remove_file(&self.store_path).await {
            Ok(()) => {
                debug!("Deleted cached feed at {}", self.store_path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()> {
        let _guard = self.lock.write().await;

        let count = feed.len();
        let cache = StoredCache {
            feed: feed.into_iter().map(StoredFeedImage::from).collect(),
            timestamp,
        };
        let encoded = serde_json::to_vec(&cache).map_err(|e| CacheError::Serialization {
            message: e.to_string(),
        })?;

        self.ensure_parent_dir().await?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, encoded).await?;
        if let Err(e) = fs::rename(&temp_path, &self.store_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(
            "Cached {} feed images at {}",
            count,
            self.store_path.display()
        );
        Ok(())
    }

    async fn retrieve(&self) -> Result<RetrievedFeed> {
        let _guard = self.lock.read().await;

        let data = match fs::read(&self.store_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RetrievedFeed::Empty),
            Err(e) => return Err(e.into()),
        };

        let cache: StoredCache =
            serde_json::from_slice(&data).map_err(|e| CacheError::Deserialization {
                message: e.to_string(),
            })?;

        Ok(RetrievedFeed::Found(cache.into()))
    }
}
