//! Per-crawl session state and its registry
//!
//! A session owns all mutable state for one crawl request: the visited set,
//! the pending-work counter, and the word-frequency table. The registry maps
//! opaque session ids to sessions; every structure is visible under its id
//! before the first task can be scheduled, and a session is removed only
//! after the orchestrator has read its final frequency table.

use crate::session::tracker::PendingCounter;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Opaque identifier for one crawl session
///
/// Built from the seed URL, the requested depth, and a random tiebreaker, so
/// two concurrent requests for the same seed and depth stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    const RANDOM_MAX: u32 = 1_000_000;

    fn generate(seed_url: &str, max_depth: u32) -> Self {
        let tiebreaker = rand::random::<u32>() % Self::RANDOM_MAX;
        Self(format!("{}#{}#{}", seed_url, max_depth, tiebreaker))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One bounded crawl request and its isolated mutable state
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    seed_url: String,
    base_prefix: String,
    max_depth: u32,
    visited: Mutex<HashSet<String>>,
    pending: PendingCounter,
    words: Mutex<HashMap<String, u64>>,
}

impl Session {
    fn new(id: SessionId, seed_url: &str, max_depth: u32) -> Self {
        Self {
            id,
            seed_url: seed_url.to_string(),
            // The seed arrives with its trailing slash already trimmed, so it
            // doubles as the same-site prefix.
            base_prefix: seed_url.to_string(),
            max_depth,
            visited: Mutex::new(HashSet::new()),
            pending: PendingCounter::new(),
            words: Mutex::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    pub fn base_prefix(&self) -> &str {
        &self.base_prefix
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The session's completion tracker
    pub fn pending(&self) -> &PendingCounter {
        &self.pending
    }

    /// Atomically tests and inserts a link into the visited set
    ///
    /// Returns true exactly once per distinct link for the session lifetime;
    /// every later call with the same link returns false.
    pub fn mark_visited(&self, link: &str) -> bool {
        self.visited.lock().unwrap().insert(link.to_string())
    }

    /// Number of distinct links marked visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Increments the counters for a page's tokens in one critical section
    pub fn record_words<'a>(&self, tokens: impl Iterator<Item = &'a str>) {
        let mut words = self.words.lock().unwrap();
        for token in tokens {
            *words.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    /// Copies out the frequency table
    pub fn snapshot_words(&self) -> HashMap<String, u64> {
        self.words.lock().unwrap().clone()
    }
}

/// Registry owning every live session, keyed by session id
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Arc<Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for the given (already normalized) seed URL
    ///
    /// All per-session structures are allocated and visible under the new id
    /// before this returns, so no task can observe a partially built session.
    pub fn create(&self, seed_url: &str, max_depth: u32) -> Arc<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        loop {
            let id = SessionId::generate(seed_url, max_depth);
            if let Entry::Vacant(entry) = sessions.entry(id.clone()) {
                let session = Arc::new(Session::new(id, seed_url, max_depth));
                entry.insert(Arc::clone(&session));
                return session;
            }
        }
    }

    /// Looks up a live session
    pub fn get(&self, id: &SessionId) -> Option<Arc<Session>> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    /// Removes a session from the registry
    ///
    /// Only called from the orchestrator's post-wait path, after zero pending
    /// work was observed and the frequency table copied out. Tasks still
    /// holding an `Arc<Session>` keep it alive until they drop it.
    pub fn destroy(&self, id: &SessionId) -> bool {
        self.sessions.lock().unwrap().remove(id).is_some()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_makes_session_visible() {
        let registry = SessionRegistry::new();
        let session = registry.create("http://example.com", 3);

        assert_eq!(session.seed_url(), "http://example.com");
        assert_eq!(session.base_prefix(), "http://example.com");
        assert_eq!(session.max_depth(), 3);
        assert_eq!(session.pending().value(), 0);
        assert!(registry.get(session.id()).is_some());
    }

    #[test]
    fn test_concurrent_requests_get_distinct_sessions() {
        let registry = SessionRegistry::new();
        let first = registry.create("http://example.com", 2);
        let second = registry.create("http://example.com", 2);

        assert_ne!(first.id(), second.id());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_destroy_removes_session() {
        let registry = SessionRegistry::new();
        let session = registry.create("http://example.com", 2);

        assert!(registry.destroy(session.id()));
        assert!(registry.get(session.id()).is_none());
        assert!(registry.is_empty());

        // Second destroy is a no-op
        assert!(!registry.destroy(session.id()));
    }

    #[test]
    fn test_destroyed_session_survives_for_holders() {
        let registry = SessionRegistry::new();
        let session = registry.create("http://example.com", 2);
        registry.destroy(session.id());

        // A task still holding the Arc can finish its bookkeeping safely
        session.record_words(["late"].into_iter());
        assert_eq!(session.snapshot_words().get("late"), Some(&1));
    }

    #[test]
    fn test_mark_visited_is_first_seen_wins() {
        let registry = SessionRegistry::new();
        let session = registry.create("http://example.com", 2);

        assert!(session.mark_visited("http://example.com/a"));
        assert!(!session.mark_visited("http://example.com/a"));
        assert!(session.mark_visited("http://example.com/b"));
        assert_eq!(session.visited_count(), 2);
    }

    #[test]
    fn test_visited_sets_are_per_session() {
        let registry = SessionRegistry::new();
        let first = registry.create("http://example.com", 2);
        let second = registry.create("http://example.com", 2);

        assert!(first.mark_visited("http://example.com/a"));
        assert!(second.mark_visited("http://example.com/a"));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let registry = SessionRegistry::new();
        let session = registry.create("http://example.com", 2);

        session.record_words(["one"].into_iter());
        let snapshot = session.snapshot_words();
        session.record_words(["one"].into_iter());

        assert_eq!(snapshot.get("one"), Some(&1));
        assert_eq!(session.snapshot_words().get("one"), Some(&2));
    }
}
