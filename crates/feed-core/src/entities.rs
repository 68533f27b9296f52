//! Core domain entities

use url::Url;
use uuid::Uuid;

/// A single image in the feed
///
/// Equality is structural: two images are equal when every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedImage {
    /// Create a new feed image
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

    /// Create an image with only the required fields
    pub fn with_url(id: Uuid, url: Url) -> Self {
        Self::new(id, None, None, url)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
