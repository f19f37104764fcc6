//! Word processing module for topwords
//!
//! This module turns page text into word counts: tokenization with a
//! locale-aware letter class, concurrent-safe per-session aggregation, and
//! the deterministic top-K reduction served to clients.

mod aggregator;
mod tokenizer;
mod top_k;

// Re-export main functions
pub use aggregator::add_text;
pub use tokenizer::{is_word_letter, tokenize};
pub use top_k::top_k;
