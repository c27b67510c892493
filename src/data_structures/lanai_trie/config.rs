// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// Configuration for the Lanai Trie.
///
/// Fixed when the trie is constructed; a trie never changes its casing mode
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Fold every key and keyword character to lowercase before indexing
    ignore_casing: bool,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - ignore_casing: true
    pub fn new() -> Self {
        Self { ignore_casing: true }
    }

    /// Set whether lookups and searches ignore character casing.
    pub fn with_ignore_casing(mut self, ignore_casing: bool) -> Self {
        self.ignore_casing = ignore_casing;
        self
    }

    /// Get whether character casing is ignored
    pub fn ignore_casing(&self) -> bool {
        self.ignore_casing
    }

    /// Maps a key or keyword character to the character used to select a child edge.
    ///
    /// Only single-character lowercase mappings are applied; characters whose
    /// lowercase form expands to several characters are kept as they are.
    pub fn indexing_char(&self, c: char) -> char {
        if !self.ignore_casing {
            return c;
        }

        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => folded,
            _ => c,
        }
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
