//! Session orchestrator: the facade the HTTP layer talks to
//!
//! One call runs one whole crawl: create the session, start the expansion,
//! block until every in-flight task has drained, rank the aggregated counts,
//! and retire the session.

use crate::crawler::scheduler::CrawlScheduler;
use crate::session::SessionRegistry;
use crate::url::normalize_seed;
use crate::words::top_k;
use std::sync::Arc;

/// Runs complete crawl sessions end to end
pub struct TopWordsService {
    registry: Arc<SessionRegistry>,
    scheduler: CrawlScheduler,
}

impl TopWordsService {
    pub fn new(registry: Arc<SessionRegistry>, scheduler: CrawlScheduler) -> Self {
        Self {
            registry,
            scheduler,
        }
    }

    /// Crawls `seed_url` to `max_depth` and returns the ranked top words
    ///
    /// Blocks until the whole bounded crawl is quiescent. Per-task fetch and
    /// parse failures are absorbed inside the crawl; the result reflects
    /// every page that could be visited. There is no timeout: a crawl that
    /// never converges leaves the caller waiting.
    ///
    /// # Arguments
    ///
    /// * `seed_url` - Validated seed URL (trailing slash is trimmed here)
    /// * `max_depth` - Positive depth bound; 1 means the seed page only
    /// * `top_count` - Maximum number of ranked words to return
    pub async fn run(
        &self,
        seed_url: &str,
        max_depth: u32,
        top_count: usize,
    ) -> Vec<(String, u64)> {
        let seed = normalize_seed(seed_url);
        let session = self.registry.create(&seed, max_depth);
        tracing::info!(
            "Session [{}]: crawling {} to depth {}",
            session.id(),
            seed,
            max_depth
        );

        self.scheduler.start(&session);
        session.pending().wait().await;

        let table = session.snapshot_words();
        tracing::info!(
            "Session [{}]: finished, {} pages seen, {} distinct words",
            session.id(),
            session.visited_count(),
            table.len()
        );
        let ranked = top_k(table, top_count);

        // Retire the session off the request path. Zero pending work has
        // been observed and the table copied out, so no task can still need
        // the registry entry.
        let registry = Arc::clone(&self.registry);
        let id = session.id().clone();
        tokio::spawn(async move {
            registry.destroy(&id);
        });

        ranked
    }
}
