use serde::Deserialize;

/// Main configuration structure for topwords
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server listens on (e.g. "127.0.0.1:8080")
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of worker tasks in the shared crawl pool
    #[serde(rename = "worker-count")]
    pub worker_count: u32,

    /// Maximum crawl depth a request may ask for
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Per-request timeout for page fetches (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User agent sent with every page fetch
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Word ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// How many of the most frequent words a response contains
    #[serde(rename = "top-count", default = "default_top_count")]
    pub top_count: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("topwords/{}", env!("CARGO_PKG_VERSION"))
}

fn default_top_count() -> usize {
    15
}
