//! The owning graph container.
//!
//! This module provides [`Graph`], an in-memory container that owns a
//! deduplicated set of nodes and a set of validated directed edges.
//!
//! # Storage layout
//!
//! Nodes and edges live in append-only arenas, so handles are plain indices
//! and iteration follows insertion order:
//!
//! - nodes: arena + label index (`label -> NodeId`) backing deduplication
//! - edges: arena + ordered-pair index (`(source, target) -> EdgeId`)
//! - adjacency: per-node outgoing/incoming edge lists ([`crate::index`])
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//!
//! let (edge, inserted) = graph.add_edge(&"a", &"b").unwrap();
//! assert!(inserted);
//! assert_eq!(graph.edge(edge).map(|e| e.weight), Some(1.0));
//! ```

mod edge;
mod error;
mod node;

#[cfg(test)]
mod proptest_tests;

pub use error::{GraphError, GraphResult};

use std::collections::HashMap;

use netalgo_core::{Edge, EdgeId, Node, NodeId};

use crate::index::AdjacencyIndex;

/// An owning, deduplicating in-memory graph.
///
/// `Graph` owns its node and edge storage. Nodes are deduplicated by label
/// (see [`Node`] equality); edges are directed, weighted, validated against
/// the node set, and deduplicated per ordered `(source, target)` pair.
/// Handles returned from insertion are stable for the life of the graph —
/// there is no removal, and later insertions never invalidate them.
///
/// # Concurrency
///
/// The container does no internal locking. Mutation requires `&mut self`,
/// so the single-writer discipline is enforced by the type system; a graph
/// behind a shared reference can be queried from any number of threads at
/// once (`Graph<T>` is `Send + Sync` when `T` is).
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Node arena, in insertion order.
    nodes: Vec<Node<T>>,
    /// Label lookup backing node deduplication.
    node_index: HashMap<T, NodeId>,
    /// Edge arena, in insertion order.
    edges: Vec<Edge>,
    /// Ordered-pair lookup backing edge deduplication.
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
    /// Adjacency lists, maintained on edge insertion.
    adjacency: AdjacencyIndex,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    /// Create a new empty graph with pre-allocated capacity.
    ///
    /// Useful when the approximate size is known in advance; avoids
    /// reallocation during bulk construction.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            edge_index: HashMap::with_capacity(edges),
            adjacency: AdjacencyIndex::with_capacity(nodes),
        }
    }

    /// Number of distinct nodes currently stored.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges currently stored.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
