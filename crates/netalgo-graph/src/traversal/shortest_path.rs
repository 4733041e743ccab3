//! Shortest path finding algorithms.
//!
//! This module provides two shortest path finders over the container:
//!
//! - [`ShortestPath`] - unweighted (hop count) shortest path via BFS
//! - [`Dijkstra`] - weight-aware shortest path for non-negative weights

// Allow expect - the invariant is guaranteed by the data structure
#![allow(clippy::expect_used)]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use netalgo_core::{EdgeId, NodeId};

use super::{neighbors, Direction, TraversalFilter};
use crate::graph::{Graph, GraphError, GraphResult};

/// A path through the graph.
///
/// Represents a sequence of nodes and edges from a source to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The nodes in the path, from source to target.
    pub nodes: Vec<NodeId>,
    /// The edges connecting the nodes.
    /// Length is `nodes.len() - 1`.
    pub edges: Vec<EdgeId>,
    /// The total length of the path (number of edges).
    pub length: usize,
}

impl PathResult {
    /// Create a new path result.
    fn new(nodes: Vec<NodeId>, edges: Vec<EdgeId>) -> Self {
        let length = edges.len();
        Self { nodes, edges, length }
    }

    /// Create a path for a single node (source == target).
    fn single_node(node: NodeId) -> Self {
        Self { nodes: vec![node], edges: Vec::new(), length: 0 }
    }

    /// Get the source node.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// Get the target node.
    #[must_use]
    pub fn target(&self) -> NodeId {
        *self.nodes.last().expect("path has at least one node")
    }

    /// Check if the path is empty (source == target).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Reconstruct the path from source to target using a parent map.
fn reconstruct_path(
    source: NodeId,
    target: NodeId,
    parent: &HashMap<NodeId, (NodeId, EdgeId)>,
) -> PathResult {
    let mut nodes = vec![target];
    let mut edges = Vec::new();

    let mut current = target;
    while current != source {
        let Some(&(prev, edge)) = parent.get(&current) else {
            break;
        };
        nodes.push(prev);
        edges.push(edge);
        current = prev;
    }

    nodes.reverse();
    edges.reverse();
    PathResult::new(nodes, edges)
}

/// BFS-based shortest path finder.
///
/// Finds the shortest unweighted path between two nodes using
/// breadth-first search: every edge counts as one hop, regardless of its
/// stored weight. Use [`Dijkstra`] when weights matter.
///
/// # Example
///
/// ```
/// use netalgo_core::Node;
/// use netalgo_graph::Graph;
/// use netalgo_graph::traversal::{Direction, ShortestPath};
///
/// let mut graph = Graph::new();
/// let (a, _) = graph.add_node(Node::new("a"));
/// let (b, _) = graph.add_node(Node::new("b"));
/// graph.add_edge(&"a", &"b").unwrap();
///
/// let path = ShortestPath::new(a, b, Direction::Outgoing).find(&graph);
/// assert_eq!(path.map(|p| p.length), Some(1));
/// ```
pub struct ShortestPath {
    /// Source node.
    source: NodeId,
    /// Target node.
    target: NodeId,
    /// Traversal direction.
    direction: Direction,
    /// Maximum path length to search.
    max_depth: Option<usize>,
    /// Filter for traversal.
    filter: TraversalFilter,
}

impl ShortestPath {
    /// Create a new shortest path finder.
    ///
    /// # Arguments
    ///
    /// * `source` - The starting node
    /// * `target` - The destination node
    /// * `direction` - Which direction to traverse edges
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, direction: Direction) -> Self {
        Self { source, target, direction, max_depth: None, filter: TraversalFilter::new() }
    }

    /// Set the maximum path length to search.
    ///
    /// If no path of this length or shorter is found, returns None.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Exclude specific nodes from the path.
    #[must_use]
    pub fn exclude_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.filter = self.filter.exclude_nodes(nodes);
        self
    }

    /// Find the shortest path.
    ///
    /// # Returns
    ///
    /// - `Some(PathResult)` if a path exists
    /// - `None` if no path exists within the constraints, or if either
    ///   endpoint handle is unknown to the graph
    #[must_use]
    pub fn find<T>(self, graph: &Graph<T>) -> Option<PathResult> {
        if graph.node(self.source).is_none() || graph.node(self.target).is_none() {
            return None;
        }

        // Handle same source and target
        if self.source == self.target {
            return Some(PathResult::single_node(self.source));
        }

        // BFS from source
        let mut visited: HashSet<NodeId> = HashSet::new();
        // Maps each node to (previous_node, edge_used)
        let mut parent: HashMap<NodeId, (NodeId, EdgeId)> = HashMap::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

        visited.insert(self.source);
        queue.push_back((self.source, 0));

        while let Some((current, depth)) = queue.pop_front() {
            // Check depth limit
            if let Some(max) = self.max_depth {
                if depth >= max {
                    continue;
                }
            }

            for (neighbor, edge_id) in neighbors(graph, current, self.direction) {
                if visited.contains(&neighbor) {
                    continue;
                }

                // Check node filter
                if neighbor != self.target && !self.filter.should_include_node(neighbor) {
                    continue;
                }

                visited.insert(neighbor);
                parent.insert(neighbor, (current, edge_id));

                // Found target
                if neighbor == self.target {
                    return Some(reconstruct_path(self.source, self.target, &parent));
                }

                queue.push_back((neighbor, depth + 1));
            }
        }

        None
    }
}

/// Heap entry for Dijkstra's algorithm.
///
/// Ordered by distance via `f64::total_cmp`; wrapped in [`Reverse`] on the
/// heap so the smallest tentative distance pops first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    dist: f64,
    node: NodeId,
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.total_cmp(&other.dist).then_with(|| self.node.cmp(&other.node))
    }
}

/// Weight-aware shortest path finder (Dijkstra's algorithm).
///
/// Finds the path minimizing the sum of edge weights. All traversed edges
/// must have non-negative weights.
///
/// # Example
///
/// ```
/// use netalgo_core::Node;
/// use netalgo_graph::Graph;
/// use netalgo_graph::traversal::{Dijkstra, Direction};
///
/// let mut graph = Graph::new();
/// let (a, _) = graph.add_node(Node::new("a"));
/// graph.add_node(Node::new("b"));
/// let (c, _) = graph.add_node(Node::new("c"));
///
/// // Direct hop costs 10; the detour through b costs 2
/// graph.add_edge_weighted(&"a", &"c", 10.0).unwrap();
/// graph.add_edge_weighted(&"a", &"b", 1.0).unwrap();
/// graph.add_edge_weighted(&"b", &"c", 1.0).unwrap();
///
/// let path = Dijkstra::new(a, c, Direction::Outgoing).find(&graph).unwrap();
/// assert_eq!(path.map(|p| p.length), Some(2));
/// ```
pub struct Dijkstra {
    /// Source node.
    source: NodeId,
    /// Target node.
    target: NodeId,
    /// Traversal direction.
    direction: Direction,
    /// Filter for traversal.
    filter: TraversalFilter,
}

impl Dijkstra {
    /// Create a new weighted shortest path finder.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, direction: Direction) -> Self {
        Self { source, target, direction, filter: TraversalFilter::new() }
    }

    /// Exclude specific nodes from the path.
    #[must_use]
    pub fn exclude_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.filter = self.filter.exclude_nodes(nodes);
        self
    }

    /// Find the minimum-weight path.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PathResult))` if a path exists
    /// - `Ok(None)` if no path exists, or if either endpoint handle is
    ///   unknown to the graph
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] if a traversed edge carries
    /// a negative weight, which Dijkstra's algorithm cannot handle.
    pub fn find<T>(self, graph: &Graph<T>) -> GraphResult<Option<PathResult>> {
        if graph.node(self.source).is_none() || graph.node(self.target).is_none() {
            return Ok(None);
        }

        if self.source == self.target {
            return Ok(Some(PathResult::single_node(self.source)));
        }

        let mut dist: HashMap<NodeId, f64> = HashMap::new();
        let mut parent: HashMap<NodeId, (NodeId, EdgeId)> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<State>> = BinaryHeap::new();

        dist.insert(self.source, 0.0);
        heap.push(Reverse(State { dist: 0.0, node: self.source }));

        while let Some(Reverse(State { dist: current_dist, node: current })) = heap.pop() {
            if !settled.insert(current) {
                continue;
            }

            if current == self.target {
                return Ok(Some(reconstruct_path(self.source, self.target, &parent)));
            }

            for (neighbor, edge_id) in neighbors(graph, current, self.direction) {
                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                if edge.weight < 0.0 {
                    return Err(GraphError::NegativeWeight { edge: edge_id, weight: edge.weight });
                }

                if settled.contains(&neighbor) {
                    continue;
                }
                if neighbor != self.target && !self.filter.should_include_node(neighbor) {
                    continue;
                }

                let candidate = current_dist + edge.weight;
                let improved = dist.get(&neighbor).map_or(true, |&known| candidate < known);
                if improved {
                    dist.insert(neighbor, candidate);
                    parent.insert(neighbor, (current, edge_id));
                    heap.push(Reverse(State { dist: candidate, node: neighbor }));
                }
            }
        }

        Ok(None)
    }
}
