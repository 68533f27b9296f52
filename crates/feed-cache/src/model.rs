//! Cache-side representation of the feed
//!
//! [`LocalFeedImage`] mirrors [`FeedImage`] field for field but is its own type, so the
//! storage schema can evolve without touching the domain model.

use chrono::{DateTime, Utc};
use feed_core::FeedImage;
use url::Url;
use uuid::Uuid;

/// Persisted representation of a feed image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalFeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl LocalFeedImage {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}

impl From<&FeedImage> for LocalFeedImage {
    fn from(image: &FeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description.clone(),
            location: image.location.clone(),
            url: image.url.clone(),
        }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(local: LocalFeedImage) -> Self {
        FeedImage::new(local.id, local.description, local.location, local.url)
    }
}

/// The single snapshot a store holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    /// Images in the order they were saved
    pub feed: Vec<LocalFeedImage>,
    /// When the snapshot was saved
    pub timestamp: DateTime<Utc>,
}

impl CachedFeed {
    pub fn new(feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Self {
        Self { feed, timestamp }
    }
}

/// Outcome of a successful retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievedFeed {
    /// Nothing has been stored, or the snapshot was deleted
    Empty,
    Found(CachedFeed),
}

impl RetrievedFeed {
    /// Convenience constructor for a found snapshot
    pub fn found(feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Self {
        RetrievedFeed::Found(CachedFeed::new(feed, timestamp))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RetrievedFeed::Empty)
    }

    /// Take the snapshot, if any
    pub fn into_cached(self) -> Option<CachedFeed> {
        match self {
            RetrievedFeed::Empty => None,
            RetrievedFeed::Found(cache) => Some(cache),
        }
    }
}
