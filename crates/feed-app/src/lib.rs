//! # Feed App
//!
//! Wires the remote and local feed loaders together.
//!
//! - [`ConfigManager`] loads an [`AppConfig`] from a TOML file and `FEED_*` environment variables
//! - [`init_logging`] installs the tracing subscriber
//! - [`FeedSync`] refreshes the cache from the network and falls back to it when offline

pub mod config;
pub mod error;
pub mod logging;
pub mod sync;

pub use config::{AppConfig, ConfigManager};
pub use error::{ConfigError, Result, SyncError};
pub use logging::{init_logging, parse_level};
pub use sync::{FeedSource, FeedSync, SyncedFeed};
