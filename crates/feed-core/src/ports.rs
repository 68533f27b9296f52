//! Port interfaces for feed sources
//!
//! Implemented by the remote loader (HTTP) and the local loader (cache).

use async_trait::async_trait;

use crate::entities::FeedImage;

/// Anything that can deliver the current feed
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Error surfaced when the feed cannot be delivered
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the feed, preserving the source order
    async fn load(&self) -> Result<Vec<FeedImage>, Self::Error>;
}
