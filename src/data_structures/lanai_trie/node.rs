// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node arena for the Lanai Trie.
//!
//! Nodes are stored in a flat vector and address each other by [`NodeId`],
//! so the trie owns every node through a single path and no node holds a
//! reference to another.

use std::collections::HashMap;

/// Index of a node inside the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root node, created together with the trie.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node in the Lanai Trie.
///
/// Each node represents one indexing character on a key path. Terminal
/// nodes carry the original key that ended here together with its value.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<V> {
    /// Map of indexing characters to child nodes
    pub(crate) children: HashMap<char, NodeId>,

    /// Original key and value, present only on terminal nodes
    pub(crate) entry: Option<(String, V)>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }

    /// Whether some inserted key ends at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only storage for trie nodes.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<V> {
    nodes: Vec<TrieNode<V>>,
}

impl<V> NodeArena<V> {
    /// Creates an arena holding only the root node.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode<V> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<V> {
        &mut self.nodes[id.index()]
    }

    /// Returns the child of `parent` reached through `c`.
    pub(crate) fn child(&self, parent: NodeId, c: char) -> Option<NodeId> {
        self.node(parent).children.get(&c).copied()
    }

    /// Returns the child of `parent` reached through `c`, creating it if missing.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(existing) = self.child(parent, c) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new());
        self.node_mut(parent).children.insert(c, id);
        id
    }

    /// Number of nodes, root included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Terminal nodes in creation order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &(String, V)> {
        self.nodes.iter().filter_map(|node| node.entry.as_ref())
    }
}
