//! Lanai Trie Library
//!
//! An in-memory character trie with exact key lookup and infix (substring)
//! search, plus the configuration and error plumbing used by the `lanai_trie`
//! command line tool.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`]: the trie itself
//! - [`config`]: file and environment configuration loading
//! - [`error`]: crate-level error aggregation
//!
//! The trie is single-threaded and synchronous; it performs no I/O.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
