//! HTTP client implementation

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Status and body of a completed request
///
/// Any status is a successful response at this layer; interpreting it is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Mockable HTTP client trait
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Execute a GET request
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// Production HTTP client
#[derive(Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        // Configure proxy if provided
        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        // A zero idle timeout means connections are not kept for reuse
        if config.pool_idle_timeout.is_zero() {
            builder = builder.pool_max_idle_per_host(0);
        } else {
            builder = builder.pool_idle_timeout(config.pool_idle_timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        debug!("HTTP GET: {}", url);

        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::InvalidUrl(url.to_string()));
        }

        let response = self
            .inner
            .get(url.clone())
            .send()
            .await
            .map_err(HttpError::RequestFailed)?;
        let status = response.status();
        let body = response.bytes().await.map_err(HttpError::RequestFailed)?;

        debug!("HTTP GET {} completed with {}", url, status);
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
