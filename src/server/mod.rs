//! HTTP surface for topwords
//!
//! One route: `GET /top-words`. The handler validates its parameters, then
//! blocks on the orchestrator until the crawl drains and responds with the
//! ranked counts. Everything behind the route lives in the crawler and
//! session modules.

mod errors;
mod handlers;

pub use errors::ApiError;
pub use handlers::{top_words, TopWordsParams, TopWordsResponse};

use crate::config::Config;
use crate::crawler::TopWordsService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<TopWordsService>,
}

/// Builds the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/top-words", get(handlers::top_words))
        .with_state(state)
}

/// Binds the configured address and serves requests until shutdown
pub async fn serve(config: Arc<Config>, state: AppState) -> crate::Result<()> {
    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Listening on {}", config.server.bind_address);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
