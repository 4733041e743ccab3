//! Breadth-first search (BFS) graph traversal.
//!
//! This module provides a BFS traversal that visits nodes level by level,
//! starting from a given node. It supports:
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
//! use netalgo_graph::traversal::{BfsTraversal, Direction};
//!
//! let mut graph = Graph::new();
//! let (a, _) = graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//! graph.add_edge(&"a", &"b").unwrap();
//!
//! // Find all nodes within 3 hops
//! let results = BfsTraversal::new(a, Direction::Outgoing).with_max_depth(3).execute(&graph);
//!
//! for result in &results {
//!     println!("node {} at depth {}", result.node.as_u64(), result.depth);
//! }
//! ```

use std::collections::{HashSet, VecDeque};

use netalgo_core::NodeId;

use super::{neighbors, Direction, TraversalFilter};
use crate::graph::Graph;

/// Result of a BFS traversal for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// The visited node.
    pub node: NodeId,
    /// The depth at which this node was discovered.
    pub depth: usize,
    /// The path from start node to this node (node handles).
    /// Empty if path tracking is disabled.
    pub path: Vec<NodeId>,
}

impl BfsResult {
    /// Create a new BFS result.
    #[inline]
    #[must_use]
    pub fn new(node: NodeId, depth: usize, path: Vec<NodeId>) -> Self {
        Self { node, depth, path }
    }

    /// Create a BFS result without path tracking.
    #[inline]
    #[must_use]
    pub fn without_path(node: NodeId, depth: usize) -> Self {
        Self { node, depth, path: Vec::new() }
    }
}

/// BFS traversal configuration and executor.
///
/// Performs a breadth-first search starting from a given node, visiting
/// all reachable nodes level by level. The start node is part of the
/// result set at depth 0.
pub struct BfsTraversal {
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

impl BfsTraversal {
    /// Create a new BFS traversal starting from the given node.
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

    /// Execute the BFS traversal.
    ///
    /// Returns all visited nodes with their depth and optionally paths.
    /// Returns an empty result set if the start handle is unknown to the
    /// graph.
    #[must_use]
    pub fn execute<T>(self, graph: &Graph<T>) -> Vec<BfsResult> {
        const INITIAL_CAPACITY: usize = 256;

        if graph.node(self.start).is_none() {
            return Vec::new();
        }

        let mut visited: HashSet<NodeId> = HashSet::with_capacity(INITIAL_CAPACITY);
        let mut results: Vec<BfsResult> = Vec::with_capacity(INITIAL_CAPACITY);

        // Queue entries: (node, depth, path_to_node)
        let mut queue: VecDeque<(NodeId, usize, Vec<NodeId>)> =
            VecDeque::with_capacity(INITIAL_CAPACITY);

        // Start with the initial node
        visited.insert(self.start);
        let initial_path = if self.track_paths { vec![self.start] } else { Vec::new() };
        queue.push_back((self.start, 0, initial_path.clone()));

        // Add start node to results at depth 0
        results.push(BfsResult::new(self.start, 0, initial_path));

        while let Some((current, depth, current_path)) = queue.pop_front() {
            // Check if we've hit the result limit
            if self.filter.is_at_limit(results.len()) {
                break;
            }

            // Check if we should continue expanding
            let should_expand = self.max_depth.map_or(true, |max| depth < max);
            if !should_expand {
                continue;
            }

            for (neighbor, _edge_id) in neighbors(graph, current, self.direction) {
                // Check limit before adding more results
                if self.filter.is_at_limit(results.len()) {
                    break;
                }

                if visited.contains(&neighbor) {
                    continue;
                }

                // Check node filter
                if !self.filter.should_include_node(neighbor) {
                    continue;
                }

                visited.insert(neighbor);
                let next_depth = depth + 1;

                // Build path to neighbor
                let neighbor_path = if self.track_paths {
                    let mut path = current_path.clone();
                    path.push(neighbor);
                    path
                } else {
                    Vec::new()
                };

                results.push(BfsResult::new(neighbor, next_depth, neighbor_path.clone()));

                // Queue for further expansion
                queue.push_back((neighbor, next_depth, neighbor_path));
            }
        }

        results
    }
}
