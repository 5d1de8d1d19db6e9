//! HTTP fetch pipeline for season pages.
//!
//! ### Retry
//! - A fixed number of attempts per page (default: 3)
//! - HTTP 429 backs off for a longer random interval (default: 5-10s)
//! - Other statuses and transport errors back off for a shorter one (default: 1-3s)
//! - Exhausting the attempts yields `Error::FetchFailed`, which callers treat
//!   as "no data for this page" rather than aborting the run.

pub mod retry;
pub mod url;

use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

pub use retry::RetryPolicy;
pub use url::{UrlError, season_label, season_url};

use bundesliga_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: a desktop browser string)
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,

    /// Attempts and backoff between them
    pub retry: RetryPolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        let [retry_min, retry_max] = config.retry_delay_ms;
        let [limit_min, limit_max] = config.rate_limit_delay_ms;
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            retry: RetryPolicy {
                max_attempts: config.max_retries,
                retry_delay_ms: retry_min..=retry_max,
                rate_limit_delay_ms: limit_min..=limit_max,
            },
        }
    }
}

/// HTTP client that fetches page bodies with retry.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Fetch a URL once, returning the body of a 200 response.
    pub async fn fetch(&self, url: &str) -> Result<String, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::FetchTimeout(format!("{} after {:?}", url, self.config.timeout))
                } else {
                    Error::HttpError(format!("network error: {}", e))
                }
            })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited(format!("status {}", status.as_u16())));
        }

        if status != StatusCode::OK {
            return Err(Error::HttpError(format!("status {}", status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))?;

        tracing::debug!("fetched {} in {}ms ({} bytes)", url, start.elapsed().as_millis(), body.len());

        Ok(body)
    }

    /// Fetch a URL, retrying with randomized backoff until the attempts run out.
    pub async fn fetch_with_retry(&self, url: &str) -> Result<String, Error> {
        let policy = &self.config.retry;
        let mut attempt = 0;

        loop {
            attempt += 1;
            tracing::debug!("attempt {}/{} for {}", attempt, policy.max_attempts, url);

            let err = match self.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if !policy.should_retry(attempt, &err) {
                tracing::warn!(attempts = attempt, "giving up on {}: {}", url, err);
                return Err(Error::FetchFailed { url: url.to_string(), attempts: attempt });
            }

            let delay = policy.delay_for(&err, &mut rand::thread_rng());
            tracing::warn!("{}; retrying {} in {:.1}s", err, url, delay.as_secs_f64());
            tokio::time::sleep(delay).await;
        }
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
