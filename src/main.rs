//! Topwords main entry point
//!
//! This is the server binary: it loads the TOML configuration, wires the
//! crawl engine together, and serves the `/top-words` endpoint.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use topwords::config::load_config_with_hash;
use topwords::crawler::{build_http_client, CrawlScheduler, HtmlParser, HttpFetcher, TopWordsService};
use topwords::server::{serve, AppState};
use topwords::session::SessionRegistry;
use tracing_subscriber::EnvFilter;

/// Topwords: a concurrent crawl-and-count web service
///
/// Topwords answers one kind of request: crawl a site from a seed URL to a
/// bounded depth and report the most frequent words on the visited pages.
#[derive(Parser, Debug)]
#[command(name = "topwords")]
#[command(version = "1.0.0")]
#[command(about = "Serves the most frequent words of a crawled site", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) =
        load_config_with_hash(&cli.config).context("failed to load configuration")?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);
    let config = Arc::new(config);

    // Wire the crawl engine: one shared client, registry, and worker pool
    let client =
        build_http_client(&config.crawler).context("failed to build HTTP client")?;
    let registry = Arc::new(SessionRegistry::new());
    let scheduler = CrawlScheduler::new(
        config.crawler.worker_count,
        Arc::clone(&registry),
        Arc::new(HttpFetcher::new(client)),
        Arc::new(HtmlParser),
    );
    let service = Arc::new(TopWordsService::new(registry, scheduler));

    let state = AppState {
        config: Arc::clone(&config),
        service,
    };

    serve(config, state).await.context("server error")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("topwords=info,warn"),
            1 => EnvFilter::new("topwords=debug,info"),
            2 => EnvFilter::new("topwords=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
