//! JSON payload mapping

use feed_core::FeedImage;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::RemoteFeedError;

/// A feed item as the API sends it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Url,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage::new(item.id, item.description, item.location, item.image)
    }
}

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Maps an HTTP response into remote feed items
#[derive(Debug)]
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Only `200 OK` responses carry a feed
    pub const OK_STATUS: StatusCode = StatusCode::OK;

    pub fn map(body: &[u8], status: StatusCode) -> Result<Vec<RemoteFeedItem>, RemoteFeedError> {
        if status != Self::OK_STATUS {
            return Err(RemoteFeedError::InvalidData);
        }

        serde_json::from_slice::<Root>(body)
            .map(|root| root.items)
            .map_err(|_| RemoteFeedError::InvalidData)
    }
}
