//! Depth-first search (DFS) graph traversal.
//!
//! This module provides a DFS traversal that explores as far as possible
//! along each branch before backtracking. It supports:
//!
//! - Configurable maximum depth
//! - Direction control (outgoing, incoming, both)
//! - Node exclusion and result limits
//! - Path tracking for each visited node
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//! use netalgo_graph::traversal::{DfsTraversal, Direction};
//!
//! let mut graph = Graph::new();
//! let (a, _) = graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//! graph.add_edge(&"a", &"b").unwrap();
//!
//! let results = DfsTraversal::new(a, Direction::Outgoing).with_max_depth(10).execute(&graph);
//! assert_eq!(results.len(), 2);
//! ```

use std::collections::HashSet;

use netalgo_core::NodeId;

use super::{neighbors, Direction, TraversalFilter};
use crate::graph::Graph;

/// Result of a DFS traversal for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsResult {
    /// The visited node.
    pub node: NodeId,
    /// The depth at which this node was discovered.
    pub depth: usize,
    /// The path from start node to this node (node handles).
    /// Empty if path tracking is disabled.
    pub path: Vec<NodeId>,
}

impl DfsResult {
    /// Create a new DFS result.
    #[inline]
    #[must_use]
    pub fn new(node: NodeId, depth: usize, path: Vec<NodeId>) -> Self {
        Self { node, depth, path }
    }

    /// Create a DFS result without path tracking.
    #[inline]
    #[must_use]
    pub fn without_path(node: NodeId, depth: usize) -> Self {
        Self { node, depth, path: Vec::new() }
    }
}

/// DFS traversal configuration and executor.
///
/// Performs a depth-first search starting from a given node, exploring as
/// far as possible along each branch before backtracking.
pub struct DfsTraversal {
    /// Starting node for traversal.
    start: NodeId,
    /// Direction to traverse.
    direction: Direction,
    /// Maximum depth to traverse.
    max_depth: Option<usize>,
    /// Filter for traversal.
    filter: TraversalFilter,
    /// Whether to track paths to each node.
    track_paths: bool,
}

impl DfsTraversal {
    /// Create a new DFS traversal starting from the given node.
    #[must_use]
    pub fn new(start: NodeId, direction: Direction) -> Self {
        Self {
            start,
            direction,
            max_depth: None,
            filter: TraversalFilter::new(),
            track_paths: false,
        }
    }

    /// Set the maximum depth to traverse.
    ///
    /// Nodes beyond this depth will not be visited.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Exclude specific nodes from traversal.
    #[must_use]
    pub fn exclude_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.filter = self.filter.exclude_nodes(nodes);
        self
    }

    /// Set a result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.filter = self.filter.with_limit(limit);
        self
    }

    /// Enable path tracking for each visited node.
    ///
    /// When enabled, each result will include the full path from
    /// the start node to that node.
    #[must_use]
    pub const fn with_path_tracking(mut self) -> Self {
        self.track_paths = true;
        self
    }

    /// Execute the DFS traversal.
    ///
    /// Returns all visited nodes with their depth and optionally paths.
    /// Returns an empty result set if the start handle is unknown to the
    /// graph.
    #[must_use]
    pub fn execute<T>(self, graph: &Graph<T>) -> Vec<DfsResult> {
        const INITIAL_CAPACITY: usize = 256;

        if graph.node(self.start).is_none() {
            return Vec::new();
        }

        let mut visited: HashSet<NodeId> = HashSet::with_capacity(INITIAL_CAPACITY);
        let mut results: Vec<DfsResult> = Vec::with_capacity(INITIAL_CAPACITY);

        // Stack entries: (node, depth, path_to_node)
        let mut stack: Vec<(NodeId, usize, Vec<NodeId>)> = Vec::with_capacity(INITIAL_CAPACITY);

        let initial_path = if self.track_paths { vec![self.start] } else { Vec::new() };
        stack.push((self.start, 0, initial_path));

        while let Some((current, depth, current_path)) = stack.pop() {
            // Check if we've hit the result limit
            if self.filter.is_at_limit(results.len()) {
                break;
            }

            // Skip if already visited (a node can be stacked twice before
            // its first visit)
            if visited.contains(&current) {
                continue;
            }

            visited.insert(current);
            results.push(DfsResult::new(current, depth, current_path.clone()));

            // Check if we should continue expanding
            let should_expand = self.max_depth.map_or(true, |max| depth < max);
            if !should_expand {
                continue;
            }

            // Push neighbors in reverse so they are visited in adjacency order
            for (neighbor, _edge_id) in neighbors(graph, current, self.direction).into_iter().rev()
            {
                if visited.contains(&neighbor) {
                    continue;
                }

                // Check node filter
                if !self.filter.should_include_node(neighbor) {
                    continue;
                }

                // Build path to neighbor
                let neighbor_path = if self.track_paths {
                    let mut path = current_path.clone();
                    path.push(neighbor);
                    path
                } else {
                    Vec::new()
                };

                stack.push((neighbor, depth + 1, neighbor_path));
            }
        }

        results
    }
}
