// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Infix search over the prefix trie.
//!
//! A plain trie only answers prefix queries. Substring queries are answered
//! by a backtracking walk that may start matching the keyword at any node:
//!
//! - A traversal state is a node plus the number of keyword characters
//!   already matched on the path leading to it.
//! - A state with characters left follows the edge for the next keyword
//!   character, if there is one.
//! - A state that has not matched anything yet also starts a fresh attempt
//!   at each of its children, including the one it just followed. Matching
//!   can therefore begin at any depth, and a partial match that dead-ends
//!   is recovered from by the fresh attempt one level deeper.
//! - Once the whole keyword has been matched, every terminal node below the
//!   current node is a hit, whatever characters follow.
//!
//! Partially matched states never spawn fresh attempts, so each node is the
//! start of exactly one attempt and the walk costs at most
//! `nodes * keyword length` edge lookups.

use super::node::{NodeArena, NodeId};

/// One pending traversal state.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    matched: usize,
}

/// Terminal nodes whose key contains `pattern`, in creation order.
///
/// `pattern` must already be mapped to indexing characters.
pub(crate) fn find_infix<V>(arena: &NodeArena<V>, pattern: &[char]) -> Vec<NodeId> {
    let mut collector = Collector::new(arena);

    if pattern.is_empty() {
        collector.collect_subtree(NodeId::ROOT);
        return collector.finish();
    }

    let mut stack = vec![Frame {
        node: NodeId::ROOT,
        matched: 0,
    }];

    while let Some(Frame { node, matched }) = stack.pop() {
        // Everything below has been reported already.
        if collector.is_covered(node) {
            continue;
        }

        if matched == pattern.len() {
            collector.collect_subtree(node);
            continue;
        }

        if let Some(child) = arena.child(node, pattern[matched]) {
            stack.push(Frame {
                node: child,
                matched: matched + 1,
            });
        }

        if matched == 0 {
            stack.extend(
                arena
                    .node(node)
                    .children
                    .values()
                    .map(|&child| Frame { node: child, matched: 0 }),
            );
        }
    }

    collector.finish()
}

/// Gathers terminal nodes from fully matched subtrees, each node once.
struct Collector<'a, V> {
    arena: &'a NodeArena<V>,
    covered: Vec<bool>,
    hits: Vec<NodeId>,
}

impl<'a, V> Collector<'a, V> {
    fn new(arena: &'a NodeArena<V>) -> Self {
        Self {
            arena,
            covered: vec![false; arena.len()],
            hits: Vec::new(),
        }
    }

    fn is_covered(&self, node: NodeId) -> bool {
        self.covered[node.index()]
    }

    /// Reports every terminal node below `root`, skipping subtrees seen before.
    fn collect_subtree(&mut self, root: NodeId) {
        let mut pending = vec![root];

        while let Some(id) = pending.pop() {
            if self.covered[id.index()] {
                continue;
            }
            self.covered[id.index()] = true;

            let node = self.arena.node(id);
            if node.is_terminal() {
                self.hits.push(id);
            }
            pending.extend(node.children.values().copied());
        }
    }

    fn finish(mut self) -> Vec<NodeId> {
        self.hits.sort_unstable();
        self.hits
    }
}
