//! Remote feed loading
//!
//! Fetches the feed over HTTP and maps the JSON payload into domain images.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpClientTrait`
//! - **Configurable**: Timeouts, proxy, user-agent, redirects
//! - **Strict mapping**: only a 200 response with a decodable body yields images
//! - **Testing support**: Easy mocking with wiremock

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod mapper;

pub use client::{HttpClient, HttpClientTrait, HttpResponse};
pub use config::HttpConfig;
pub use error::{HttpError, RemoteFeedError, Result};
pub use loader::RemoteFeedLoader;
pub use mapper::{FeedItemsMapper, RemoteFeedItem};

/// Re-export commonly used types
pub use reqwest::StatusCode;
pub use url::Url;
