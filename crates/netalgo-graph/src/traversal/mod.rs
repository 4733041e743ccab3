//! Graph traversal algorithms.
//!
//! This module provides traversal over the container's query surface:
//!
//! - [`BfsTraversal`] - breadth-first, level by level
//! - [`DfsTraversal`] - depth-first with backtracking
//! - [`ShortestPath`] - unweighted shortest path (BFS)
//! - [`Dijkstra`] - weight-aware shortest path
//! - [`TraversalIterator`] - lazy BFS iterator for large result sets
//!
//! All traversals take the graph by shared reference, visit each node at
//! most once, and are deterministic thanks to the container's stable
//! insertion-ordered adjacency lists.
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//! use netalgo_graph::traversal::{BfsTraversal, Direction};
//!
//! let mut graph = Graph::new();
//! let (a, _) = graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//! graph.add_edge(&"a", &"b").unwrap();
//!
//! let results = BfsTraversal::new(a, Direction::Outgoing).execute(&graph);
//! assert_eq!(results.len(), 2);
//! ```

mod bfs;
mod dfs;
mod iterator;
mod shortest_path;

pub use bfs::{BfsResult, BfsTraversal};
pub use dfs::{DfsResult, DfsTraversal};
pub use iterator::{TraversalConfig, TraversalIterator, TraversalNode};
pub use shortest_path::{Dijkstra, PathResult, ShortestPath};

use std::collections::HashSet;

use netalgo_core::{EdgeId, NodeId};

use crate::graph::Graph;

/// Which edges to follow when traversing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges from source to target.
    Outgoing,
    /// Follow edges from target to source.
    Incoming,
    /// Follow edges in both directions (treat the graph as undirected).
    Both,
}

impl Direction {
    /// Whether this direction follows outgoing edges.
    #[inline]
    #[must_use]
    pub const fn includes_outgoing(self) -> bool {
        matches!(self, Self::Outgoing | Self::Both)
    }

    /// Whether this direction follows incoming edges.
    #[inline]
    #[must_use]
    pub const fn includes_incoming(self) -> bool {
        matches!(self, Self::Incoming | Self::Both)
    }
}

/// Filter applied while traversing.
#[derive(Debug, Clone, Default)]
pub struct TraversalFilter {
    /// Nodes excluded from results and from expansion.
    pub excluded: HashSet<NodeId>,
    /// Maximum number of results to produce.
    pub limit: Option<usize>,
}

impl TraversalFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude specific nodes from traversal.
    #[must_use]
    pub fn exclude_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.excluded.extend(nodes);
        self
    }

    /// Set a result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a node passes the filter.
    #[inline]
    #[must_use]
    pub fn should_include_node(&self, node: NodeId) -> bool {
        !self.excluded.contains(&node)
    }

    /// Whether the result count has reached the limit.
    #[inline]
    #[must_use]
    pub fn is_at_limit(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}

/// Collect the neighbors of a node for the given direction.
///
/// For outgoing edges the neighbor is the edge's target; for incoming
/// edges it is the source. `Direction::Both` yields outgoing neighbors
/// first, each paired with the edge that reached it.
pub(crate) fn neighbors<T>(
    graph: &Graph<T>,
    node: NodeId,
    direction: Direction,
) -> Vec<(NodeId, EdgeId)> {
    let mut found = Vec::new();

    if direction.includes_outgoing() {
        for &edge_id in graph.outgoing(node) {
            if let Some(edge) = graph.edge(edge_id) {
                found.push((edge.target, edge_id));
            }
        }
    }

    if direction.includes_incoming() {
        for &edge_id in graph.incoming(node) {
            if let Some(edge) = graph.edge(edge_id) {
                found.push((edge.source, edge_id));
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flags() {
        assert!(Direction::Outgoing.includes_outgoing());
        assert!(!Direction::Outgoing.includes_incoming());
        assert!(Direction::Incoming.includes_incoming());
        assert!(!Direction::Incoming.includes_outgoing());
        assert!(Direction::Both.includes_outgoing());
        assert!(Direction::Both.includes_incoming());
    }

    #[test]
    fn filter_defaults_are_permissive() {
        let filter = TraversalFilter::new();
        assert!(filter.should_include_node(NodeId::new(0)));
        assert!(!filter.is_at_limit(usize::MAX));
    }

    #[test]
    fn filter_excludes_and_limits() {
        let filter = TraversalFilter::new().exclude_nodes([NodeId::new(1)]).with_limit(2);
        assert!(!filter.should_include_node(NodeId::new(1)));
        assert!(filter.should_include_node(NodeId::new(2)));
        assert!(!filter.is_at_limit(1));
        assert!(filter.is_at_limit(2));
    }
}
