use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use feed_api::{HttpClient, RemoteFeedLoader};
use feed_app::{init_logging, ConfigManager, FeedSource, FeedSync};
use feed_cache::{FileFeedStore, LocalFeedLoader, SystemClock};
use tracing::info;

#[derive(Parser)]
#[command(name = "feed-sync")]
#[command(about = "Fetch the image feed and keep the local cache fresh")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include targets and source locations in log output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let config = manager.load_config().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            manager.config_path().display()
        )
    })?;

    init_logging(&config.log_level, cli.verbose);

    let client = HttpClient::new(config.http.clone()).context("Failed to build HTTP client")?;
    let remote = RemoteFeedLoader::new(config.feed_url.clone(), Arc::new(client));
    let store = FileFeedStore::new(&config.cache.store_path);
    let local = LocalFeedLoader::from_config(Arc::new(store), SystemClock, &config.cache);

    let synced = FeedSync::new(remote, local)
        .run()
        .await
        .context("Failed to load feed")?;

    let source = match synced.source {
        FeedSource::Remote => "network",
        FeedSource::Cache => "cache",
    };
    info!("Loaded {} images from {}", synced.feed.len(), source);

    for image in &synced.feed {
        println!(
            "{}\t{}\t{}\t{}",
            image.id,
            image.url,
            image.description.as_deref().unwrap_or("-"),
            image.location.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
