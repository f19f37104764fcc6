//! Crawl scheduler and worker pool
//!
//! The scheduler is the breadth-expansion engine: every accepted link becomes
//! a [`CrawlTask`] message on an unbounded queue consumed by a fixed-size pool
//! of workers shared by all sessions. Expansion is message passing, not
//! call-stack recursion, so wide or deep sites cannot grow the stack.
//!
//! The queue itself is unbounded: a burst of deep, wide crawls can grow
//! memory without bound. That is a documented resource-exhaustion risk of
//! this design, not something the scheduler guards against.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::PageParser;
use crate::session::{Session, SessionId, SessionRegistry};
use crate::url::resolve_href;
use crate::words;
use std::sync::Arc;
use tokio::sync::mpsc;

/// An ephemeral unit of crawl work
///
/// Depth starts at 1 for the seed link and increases by one per hop.
#[derive(Debug)]
pub struct CrawlTask {
    pub session_id: SessionId,
    pub link: String,
    pub depth: u32,
}

/// Fans fetch/parse work out over a fixed-size worker pool
///
/// One scheduler serves the whole process; sessions share its workers but
/// nothing else.
pub struct CrawlScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    registry: Arc<SessionRegistry>,
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<dyn PageParser>,
    queue: mpsc::UnboundedSender<CrawlTask>,
}

impl CrawlScheduler {
    /// Creates the scheduler and spawns its worker pool
    ///
    /// # Arguments
    ///
    /// * `worker_count` - Number of worker tasks to spawn
    /// * `registry` - Session registry shared with the orchestrator
    /// * `fetcher` - Fetch collaborator
    /// * `parser` - Parse collaborator
    pub fn new(
        worker_count: u32,
        registry: Arc<SessionRegistry>,
        fetcher: Arc<dyn PageFetcher>,
        parser: Arc<dyn PageParser>,
    ) -> Self {
        let (queue, receiver) = mpsc::unbounded_channel();
        let inner = Arc::new(SchedulerInner {
            registry,
            fetcher,
            parser,
            queue,
        });

        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        for worker in 0..worker_count {
            let inner = Arc::clone(&inner);
            let receiver = Arc::clone(&receiver);
            tokio::spawn(run_worker(worker, inner, receiver));
        }

        Self { inner }
    }

    /// Schedules the seed link of a freshly created session at depth 1
    pub fn start(&self, session: &Session) {
        self.inner
            .schedule(session, session.seed_url().to_string(), 1);
    }
}

async fn run_worker(
    worker: u32,
    inner: Arc<SchedulerInner>,
    receiver: Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<CrawlTask>>>,
) {
    tracing::debug!("Crawl worker {} started", worker);
    loop {
        // Hold the receiver lock only while dequeuing, so the other workers
        // can pick up tasks while this one processes.
        let task = { receiver.lock().await.recv().await };
        match task {
            Some(task) => inner.process(task).await,
            None => break,
        }
    }
    tracing::debug!("Crawl worker {} stopped", worker);
}

impl SchedulerInner {
    /// Admits one discovered link for the session, or drops it
    ///
    /// The visited insert happens before the depth check, so first-seen wins:
    /// a link first discovered beyond the depth bound is marked seen and
    /// never reprocessed, and a link seen at a shallow depth is never
    /// rescheduled from a deeper page. The pending counter is incremented
    /// only for links that are actually enqueued.
    fn schedule(&self, session: &Session, link: String, depth: u32) {
        if !session.mark_visited(&link) || depth > session.max_depth() {
            return;
        }

        tracing::debug!(">> Depth: [{}]  link: [{}]", depth, link);
        session.pending().increment();

        let task = CrawlTask {
            session_id: session.id().clone(),
            link,
            depth,
        };
        if self.queue.send(task).is_err() {
            // Pool is gone (process shutdown); the task will never run, so
            // give its pending slot back rather than wedging the waiter.
            session.pending().decrement();
        }
    }

    /// Executes one crawl task: fetch, expand, aggregate, signal completion
    async fn process(&self, task: CrawlTask) {
        let Some(session) = self.registry.get(&task.session_id) else {
            // A session is only destroyed after its pending count was
            // observed at zero, so a queued task should always find it.
            tracing::warn!("Dropping task for unknown session [{}]", task.session_id);
            return;
        };

        let body = match self.fetcher.fetch(&task.link).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Fetch failed for [{}]: {}", task.link, e);
                session.pending().decrement();
                return;
            }
        };

        let parsed = self.parser.parse(&body);

        for href in &parsed.hrefs {
            if let Some(link) = resolve_href(href, session.base_prefix()) {
                self.schedule(&session, link, task.depth + 1);
            }
        }

        words::add_text(&session, &parsed.text);

        // Final action of the task: this task's own aggregation is complete.
        session.pending().decrement();
    }
}
