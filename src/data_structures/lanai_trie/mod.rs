// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie: a character trie with exact lookup and infix search.
//!
//! Keys are stored one character per edge, exactly as in a prefix trie.
//! On top of the usual exact-match lookup the trie answers substring
//! queries: [`LanaiTrie::search`] returns every stored key that contains
//! the keyword anywhere, not only at its start, without building a separate
//! suffix index.
//!
//! # Features
//!
//! - Case-insensitive matching by default, configurable at construction.
//! - Original key casing is preserved and returned with search hits.
//! - Arena-backed nodes addressed by index; no reference cycles.
//! - Generic over the stored value type.
//!
//! # Example
//!
//! ```
//! use lanai_trie_lib::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig};
//!
//! let mut trie = LanaiTrie::new();
//! trie.add("Hello World", 1);
//! trie.add("World Best", 2);
//! trie.add("Beer", 3);
//!
//! assert_eq!(trie.get("hello world"), Some(&1));
//!
//! let values: Vec<i32> = trie.search("be").into_iter().map(|hit| *hit.value).collect();
//! assert_eq!(values, vec![2, 3]);
//!
//! // Case-sensitive tries only match the stored casing
//! let mut strict = LanaiTrie::with_config(LanaiTrieConfig::new().with_ignore_casing(false));
//! strict.add("Beer", 3);
//! assert!(strict.search("be").is_empty());
//! assert_eq!(strict.search("Be").len(), 1);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal locking. `add` takes `&mut self` and the
//! queries take `&self`, so sharing across threads needs an outer lock
//! such as `RwLock<LanaiTrie<V>>`.

mod config;
mod error;
mod node;
mod search;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use config::LanaiTrieConfig;
pub use error::{LanaiTrieError, LanaiTrieResult};
use node::{NodeArena, NodeId};

/// A stored key and its value, as returned by [`LanaiTrie::search`].
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a, V> {
    /// The key exactly as it was inserted
    pub key: &'a str,

    /// The value stored under the key
    pub value: &'a V,
}

// Only references inside, so copyable whatever `V` is.
impl<V> Clone for SearchHit<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SearchHit<'_, V> {}

/// Lanai Trie maps string keys to values and finds keys by substring.
///
/// Key features:
/// * Exact lookup in O(key length)
/// * Infix search returning the original key with each value
/// * Case-insensitive keys (configurable)
/// * Re-inserting a key overwrites its value
#[derive(Debug, Clone)]
pub struct LanaiTrie<V> {
    /// Node storage; index 0 is the root
    arena: NodeArena<V>,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Number of terminal nodes
    len: usize,
}

impl<V> LanaiTrie<V> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie. It cannot be changed later.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            config,
            len: 0,
        }
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Missing nodes along the key's path are created. The node reached by
    /// the last character stores the key as given together with the value.
    /// An empty key inserts nothing.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// The value previously stored under an equivalent key, if any. The
    /// stored key is replaced by the new spelling as well.
    pub fn add<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: Into<String>,
    {
        let key = key.into();
        if key.is_empty() {
            tracing::trace!("ignoring empty key");
            return None;
        }

        let mut node = NodeId::ROOT;
        for c in key.chars() {
            node = self.arena.child_or_insert(node, self.config.indexing_char(c));
        }

        let previous = self.arena.node_mut(node).entry.replace((key, value));
        if previous.is_none() {
            self.len += 1;
        }
        tracing::trace!(replaced = previous.is_some(), keys = self.len, "key added");

        previous.map(|(_, value)| value)
    }

    /// Inserts a key-value pair, rejecting empty keys.
    ///
    /// # Returns
    ///
    /// * `Ok(Option<V>)` - The value previously stored under the key, if any.
    /// * `Err(LanaiTrieError::EmptyKey)` - If `key` is empty.
    pub fn try_add<K>(&mut self, key: K, value: V) -> LanaiTrieResult<Option<V>>
    where
        K: Into<String>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }
        Ok(self.add(key, value))
    }

    /// Retrieves the value stored under a key.
    ///
    /// # Returns
    ///
    /// The value, or `None` if no such key was inserted. The empty key is
    /// never stored, so it always yields `None`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let node = self.find_node(key)?;
        self.arena.node(node).entry.as_ref().map(|(_, value)| value)
    }

    /// Checks if a key exists in the trie.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Finds every stored key that contains `keyword` as a contiguous substring.
    ///
    /// Matching follows the trie's casing mode. An empty keyword matches
    /// every key. Each stored key appears at most once; hits are ordered by
    /// when the key's terminal node was first created.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The substring to look for.
    pub fn search(&self, keyword: &str) -> Vec<SearchHit<'_, V>> {
        let pattern: Vec<char> = keyword
            .chars()
            .map(|c| self.config.indexing_char(c))
            .collect();

        let hits: Vec<SearchHit<'_, V>> = search::find_infix(&self.arena, &pattern)
            .into_iter()
            .filter_map(|id| self.hit(id))
            .collect();

        tracing::debug!(keyword, hits = hits.len(), "infix search finished");
        hits
    }

    /// Returns an iterator over every stored key and value, in the same order
    /// as [`LanaiTrie::search`] reports them.
    pub fn iter(&self) -> impl Iterator<Item = SearchHit<'_, V>> {
        self.arena
            .entries()
            .map(|(key, value)| SearchHit { key, value })
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the indexing characters of `key` without creating nodes.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        for c in key.chars() {
            node = self.arena.child(node, self.config.indexing_char(c))?;
        }
        tracing::trace!(key, "key path found");
        Some(node)
    }

    fn hit(&self, id: NodeId) -> Option<SearchHit<'_, V>> {
        self.arena
            .node(id)
            .entry
            .as_ref()
            .map(|(key, value)| SearchHit { key, value })
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for LanaiTrie<V>
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LanaiTrie<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
