//! URL handling module for topwords
//!
//! This module decides which discovered links belong to the crawled site and
//! rewrites them into absolute, comparable form.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_seed, resolve_href};
