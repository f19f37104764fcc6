//! Topwords: a concurrent crawl-and-count web service
//!
//! This crate implements an HTTP service that crawls a web site from a seed
//! URL, follows same-site links to a bounded depth, and reports the most
//! frequent words found across the visited pages.

pub mod config;
pub mod crawler;
pub mod server;
pub mod session;
pub mod url;
pub mod words;

use thiserror::Error;

/// Main error type for topwords operations
#[derive(Debug, Error)]
pub enum TopWordsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for topwords operations
pub type Result<T> = std::result::Result<T, TopWordsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlScheduler, TopWordsService};
pub use session::{Session, SessionId, SessionRegistry};
pub use words::{tokenize, top_k};
