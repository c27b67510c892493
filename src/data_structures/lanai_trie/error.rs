// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Trie.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// An empty key was passed to a strict insertion.
    #[error("Empty key not allowed")]
    EmptyKey,
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = std::result::Result<T, LanaiTrieError>;
