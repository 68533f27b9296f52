//! # Feed Core
//!
//! Domain model shared by every feed crate: the [`FeedImage`] value and the
//! [`FeedLoader`] port implemented by the remote and local loaders.

pub mod entities;
pub mod ports;

pub use entities::FeedImage;
pub use ports::FeedLoader;
