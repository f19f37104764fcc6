//! HTTP fetcher implementation
//!
//! This module provides the fetch collaborator the crawl engine depends on:
//! an abstract "give me the page at this URL" capability, plus the reqwest
//! implementation used in production. No retries and no redirect handling
//! beyond what the transport does natively.

use crate::config::CrawlerConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors a single page fetch can produce
///
/// These are always local to one crawl task: a failed fetch drops that branch
/// of the crawl and never aborts the session.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request for {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Fetch collaborator consumed by the crawl scheduler
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `url` and returns its body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Builds the process-wide HTTP client used for page fetches
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> CrawlerConfig {
        CrawlerConfig {
            worker_count: 4,
            max_depth: 10,
            request_timeout_secs: 30,
            user_agent: "topwords-test/1.0".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_an_http_error() {
        let client = build_http_client(&create_test_config()).unwrap();
        let fetcher = HttpFetcher::new(client);

        let result = fetcher.fetch("//example.com/protocol-relative").await;
        assert!(matches!(result, Err(FetchError::Http { .. })));
    }

    // Success and status-code paths are exercised against a mock server in
    // the integration tests.
}
