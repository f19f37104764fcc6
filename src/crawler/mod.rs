//! Crawler module for topwords
//!
//! This module contains the crawl engine and its collaborators:
//! - The fetch collaborator (reqwest-backed)
//! - The parse collaborator (scraper-backed)
//! - The scheduler and its shared worker pool
//! - The session orchestrator used by the HTTP layer

mod fetcher;
mod orchestrator;
mod parser;
mod scheduler;

pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageFetcher};
pub use orchestrator::TopWordsService;
pub use parser::{HtmlParser, PageParser, ParsedPage};
pub use scheduler::{CrawlScheduler, CrawlTask};
