//! Remote feed loader

use std::sync::Arc;

use async_trait::async_trait;
use feed_core::{FeedImage, FeedLoader};
use tracing::{debug, warn};
use url::Url;

use crate::{client::HttpClientTrait, error::RemoteFeedError, mapper::FeedItemsMapper};

/// Loads the feed from a fixed URL
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClientTrait>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClientTrait>) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request the feed
    ///
    /// A client failure is a connectivity error; anything but a 200 with a decodable
    /// body is invalid data.
    pub async fn load(&self) -> Result<Vec<FeedImage>, RemoteFeedError> {
        let response = self.client.get(&self.url).await.map_err(|e| {
            warn!("Failed to fetch feed from {}: {}", self.url, e);
            RemoteFeedError::Connectivity
        })?;

        let items = FeedItemsMapper::map(&response.body, response.status).map_err(|e| {
            warn!("Feed from {} rejected ({}): {}", self.url, response.status, e);
            e
        })?;

        debug!("Loaded {} feed items from {}", items.len(), self.url);
        Ok(items.into_iter().map(FeedImage::from).collect())
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    type Error = RemoteFeedError;

    async fn load(&self) -> Result<Vec<FeedImage>, Self::Error> {
        RemoteFeedLoader::load(self).await
    }
}

impl std::fmt::Debug for RemoteFeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
