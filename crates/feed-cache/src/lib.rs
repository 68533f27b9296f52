//! # Feed Cache
//!
//! Local caching of the image feed with a time-based expiration policy.
//!
//! ## Features
//!
//! - **Single-slot store**: [`FeedStore`] holds at most one snapshot, replaced wholesale on insert
//! - **Expiry policy**: [`FeedCachePolicy`] accepts snapshots younger than seven calendar days
//! - **Use cases**: [`LocalFeedLoader`] saves (delete then insert), loads and validates the cache
//! - **Backends**: in-memory and JSON file stores, both serializing their own operations

pub mod clock;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod policy;
pub mod storage;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use clock::{Clock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use loader::LocalFeedLoader;
pub use model::{CachedFeed, LocalFeedImage, RetrievedFeed};
pub use policy::FeedCachePolicy;
pub use storage::{FeedStore, FileFeedStore, InMemoryFeedStore};
