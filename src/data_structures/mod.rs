//! Data structures for the Lanai Trie crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for fallible operations
//! - Generic over stored values, no dynamic dispatch

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, SearchHit};
