//! Session lifecycle module for topwords
//!
//! One session represents one bounded crawl request and owns all of its
//! mutable state: the visited set, the pending-work counter, and the
//! word-frequency table. Sessions are strictly partitioned; nothing is shared
//! across session ids.

mod registry;
mod tracker;

// Re-export main types
pub use registry::{Session, SessionId, SessionRegistry};
pub use tracker::PendingCounter;
