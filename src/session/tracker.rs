//! Completion tracking for in-flight crawl work
//!
//! Every scheduled crawl task increments the session's pending counter before
//! it is handed to the worker pool and decrements it exactly once on every
//! exit path. The caller that issued the request blocks on [`PendingCounter::wait`]
//! until the counter drains to zero.

use std::pin::pin;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Notify;

/// Counter of outstanding asynchronous units of work for one session
///
/// The wait side re-checks the counter around waker registration, so a
/// decrement that races the call to `wait` cannot be lost: if the counter
/// reaches zero before or during the call, `wait` still returns promptly.
#[derive(Debug, Default)]
pub struct PendingCounter {
    count: AtomicI64,
    zero: Notify,
}

impl PendingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one newly scheduled unit of work
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Records one finished unit of work, waking waiters on the last one
    pub fn decrement(&self) {
        let previous = self.count.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "pending counter went negative");
        if previous == 1 {
            self.zero.notify_waiters();
        }
    }

    /// Current number of outstanding units of work
    pub fn value(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Blocks the calling task until the counter reaches zero
    ///
    /// Returns immediately if the counter is already zero.
    pub async fn wait(&self) {
        let mut notified = pin!(self.zero.notified());
        loop {
            if self.value() == 0 {
                return;
            }
            // Register as a waiter, then re-check before sleeping so the
            // final decrement cannot slip between the check and the wait.
            notified.as_mut().enable();
            if self.value() == 0 {
                return;
            }
            notified.as_mut().await;
            notified.set(self.zero.notified());
        }
    }
}
