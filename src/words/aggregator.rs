use crate::session::Session;
use crate::words::tokenize;

/// Accumulates a page's words into the session's frequency table
///
/// Tokenizes `text` and increments every token's counter inside a single
/// critical section, so concurrently finishing pages never lose increments.
pub fn add_text(session: &Session, text: &str) {
    session.record_words(tokenize(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionRegistry;
    use std::sync::Arc;

    fn test_session() -> Arc<Session> {
        SessionRegistry::new().create("http://example.com", 2)
    }

    #[test]
    fn test_counts_accumulate_across_pages() {
        let session = test_session();

        add_text(&session, "apple banana apple");
        add_text(&session, "banana cherry");

        let table = session.snapshot_words();
        assert_eq!(table.get("apple"), Some(&2));
        assert_eq!(table.get("banana"), Some(&2));
        assert_eq!(table.get("cherry"), Some(&1));
    }

    #[test]
    fn test_empty_text_adds_nothing() {
        let session = test_session();
        add_text(&session, "  .,! ");
        assert!(session.snapshot_words().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_aggregation_loses_no_increments() {
        let session = test_session();
        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let session = Arc::clone(&session);
                tokio::spawn(async move {
                    for _ in 0..50 {
                        add_text(&session, "shared word");
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let table = session.snapshot_words();
        assert_eq!(table.get("shared"), Some(&(64 * 50)));
        assert_eq!(table.get("word"), Some(&(64 * 50)));
    }
}
