//! Application configuration

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use feed_api::HttpConfig;
use feed_cache::CacheConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, Result};

const DEFAULT_FEED_URL: &str = "https://essentialdeveloper.com/feed-case-study/test-api/feed";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feed endpoint
    #[serde(default = "default_feed_url")]
    pub feed_url: Url,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            log_level: default_log_level(),
            cache: CacheConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

fn default_feed_url() -> Url {
    Url::parse(DEFAULT_FEED_URL).expect("default feed URL is valid")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration manager
///
/// Sources, lowest precedence first: built-in defaults, the TOML file (optional),
/// then `FEED_*` environment variables with `__` separating nested keys
/// (`FEED_CACHE__MAX_AGE_DAYS=3`).
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the default config file
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "FEED".to_string(),
        }
    }

    /// Set environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("feed")
            .join("config.toml")
    }

    /// Load and validate the configuration
    pub fn load_config(&self) -> Result<AppConfig> {
        let config = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    /// Write the configuration as TOML, creating parent directories
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    pub fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if !matches!(config.feed_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "Feed URL must use http or https: {}",
                config.feed_url
            )));
        }
        if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                config.log_level
            )));
        }
        if config.cache.max_age_days == 0 {
            return Err(ConfigError::Validation(
                "Cache max age must be at least one day".to_string(),
            ));
        }
        if config.http.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
