//! Test modules for the Lanai Trie crate.
//!
//! Component tests live next to their component; this module holds the
//! crate-level tests and the shared fixtures and proptest strategies.


pub use test_utils::{key_strategy, keyword_strategy, TestFixture};
