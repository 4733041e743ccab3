//! Connected Components algorithms.
//!
//! This module implements algorithms for finding connected components:
//!
//! - **Weakly Connected Components (WCC)**: Treats the graph as undirected
//!   and finds sets of nodes that are reachable from each other ignoring
//!   edge direction. Uses a Union-Find data structure for O(V + E) time.
//!
//! - **Strongly Connected Components (SCC)**: For directed graphs, finds
//!   sets of nodes where every node is reachable from every other node
//!   following edge directions. Uses an iterative Tarjan's algorithm for
//!   O(V + E) time.
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//! use netalgo_graph::analytics::{ConnectedComponents, ConnectedComponentsConfig};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//! graph.add_node(Node::new("c"));
//! graph.add_edge(&"a", &"b").unwrap();
//!
//! let config = ConnectedComponentsConfig::default();
//! let wcc = ConnectedComponents::weakly_connected(&graph, &config).unwrap();
//! assert_eq!(wcc.num_components, 2);
//! ```

use std::collections::HashMap;

use netalgo_core::NodeId;

use super::{ensure_graph_size, DEFAULT_MAX_GRAPH_NODES};
use crate::graph::{Graph, GraphResult};

/// Configuration for Connected Components algorithms.
#[derive(Debug, Clone)]
pub struct ConnectedComponentsConfig {
    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 10,000,000 (10M nodes)
    pub max_graph_nodes: Option<usize>,
}

impl Default for ConnectedComponentsConfig {
    fn default() -> Self {
        Self { max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES) }
    }
}

impl ConnectedComponentsConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of nodes allowed.
    ///
    /// Set to `None` to disable the check (use with caution).
    #[must_use]
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }
}

/// Result of a connected components computation.
///
/// Contains the component assignment for each node, along with metadata
/// about the computation.
#[derive(Debug, Clone)]
pub struct ComponentResult {
    /// Component assignments: node -> component ID.
    /// Component IDs are contiguous integers starting from 0.
    pub assignments: HashMap<NodeId, usize>,

    /// Number of distinct components found.
    pub num_components: usize,
}

impl ComponentResult {
    /// Get the component ID for a specific node.
    #[must_use]
    pub fn component(&self, node: NodeId) -> Option<usize> {
        self.assignments.get(&node).copied()
    }

    /// Get all nodes in a specific component.
    #[must_use]
    pub fn nodes_in_component(&self, component_id: usize) -> Vec<NodeId> {
        self.assignments.iter().filter(|(_, &c)| c == component_id).map(|(&node, _)| node).collect()
    }

    /// Get component sizes.
    #[must_use]
    pub fn component_sizes(&self) -> HashMap<usize, usize> {
        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for &component in self.assignments.values() {
            *sizes.entry(component).or_insert(0) += 1;
        }
        sizes
    }

    /// Get components sorted by size (descending).
    #[must_use]
    pub fn components_by_size(&self) -> Vec<(usize, usize)> {
        let mut sizes: Vec<_> = self.component_sizes().into_iter().collect();
        sizes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sizes
    }

    /// Get the largest component.
    #[must_use]
    pub fn largest_component(&self) -> Option<(usize, usize)> {
        self.components_by_size().into_iter().next()
    }

    /// Check if two nodes are in the same component.
    #[must_use]
    pub fn same_component(&self, node1: NodeId, node2: NodeId) -> bool {
        match (self.component(node1), self.component(node2)) {
            (Some(c1), Some(c2)) => c1 == c2,
            _ => false,
        }
    }

    /// Get the number of nodes in a specific component.
    #[must_use]
    pub fn component_size(&self, component_id: usize) -> usize {
        self.component_sizes().get(&component_id).copied().unwrap_or(0)
    }
}

/// Union-Find data structure with path compression and union by rank.
///
/// Near-constant time union and find, ideal for computing weakly
/// connected components.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Create a new Union-Find structure with n elements.
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    /// Find the root of the set containing x, with path compression.
    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Compress the walked path
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing a and b, by rank.
    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
    }
}

/// Connected Components executor.
pub struct ConnectedComponents;

impl ConnectedComponents {
    /// Find weakly connected components (treats the graph as undirected).
    ///
    /// Component IDs are contiguous from 0, assigned in node insertion
    /// order of each component's first member.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::GraphTooLarge`] if the graph exceeds
    /// the configured node limit.
    pub fn weakly_connected<T>(
        graph: &Graph<T>,
        config: &ConnectedComponentsConfig,
    ) -> GraphResult<ComponentResult> {
        let n = graph.node_count();
        ensure_graph_size(n, config.max_graph_nodes)?;

        // Handles are dense arena indices, so union-find runs on 0..n
        let mut union_find = UnionFind::new(n);
        for edge in graph.edges() {
            union_find.union(edge.source.as_u64() as usize, edge.target.as_u64() as usize);
        }

        // Relabel roots to contiguous component IDs in first-seen order
        let mut root_to_component: HashMap<usize, usize> = HashMap::new();
        let mut assignments = HashMap::with_capacity(n);
        for index in 0..n {
            let root = union_find.find(index);
            let next_id = root_to_component.len();
            let component = *root_to_component.entry(root).or_insert(next_id);
            assignments.insert(NodeId::new(index as u64), component);
        }

        let num_components = root_to_component.len();
        Ok(ComponentResult { assignments, num_components })
    }

    /// Find strongly connected components (respects edge direction).
    ///
    /// Uses an iterative Tarjan's algorithm, so deep graphs cannot
    /// overflow the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::GraphTooLarge`] if the graph exceeds
    /// the configured node limit.
    pub fn strongly_connected<T>(
        graph: &Graph<T>,
        config: &ConnectedComponentsConfig,
    ) -> GraphResult<ComponentResult> {
        let n = graph.node_count();
        ensure_graph_size(n, config.max_graph_nodes)?;

        // Successor index lists, precomputed once
        let successors: Vec<Vec<usize>> = graph
            .node_ids()
            .map(|node| {
                graph
                    .outgoing(node)
                    .iter()
                    .filter_map(|&edge_id| graph.edge(edge_id))
                    .map(|edge| edge.target.as_u64() as usize)
                    .collect()
            })
            .collect();

        const UNVISITED: usize = usize::MAX;

        let mut indices = vec![UNVISITED; n];
        let mut lowlink = vec![0usize; n];
        let mut on_stack = vec![false; n];
        let mut stack: Vec<usize> = Vec::new();
        let mut next_index = 0usize;

        let mut assignments: HashMap<NodeId, usize> = HashMap::with_capacity(n);
        let mut num_components = 0usize;

        for start in 0..n {
            if indices[start] != UNVISITED {
                continue;
            }

            // Explicit call stack: (node, next successor position)
            let mut call_stack: Vec<(usize, usize)> = vec![(start, 0)];

            while let Some((v, position)) = call_stack.last().copied() {
                if position == 0 {
                    indices[v] = next_index;
                    lowlink[v] = next_index;
                    next_index += 1;
                    stack.push(v);
                    on_stack[v] = true;
                }

                if let Some(&w) = successors[v].get(position) {
                    if let Some(frame) = call_stack.last_mut() {
                        frame.1 = position + 1;
                    }
                    if indices[w] == UNVISITED {
                        call_stack.push((w, 0));
                    } else if on_stack[w] {
                        lowlink[v] = lowlink[v].min(indices[w]);
                    }
                } else {
                    call_stack.pop();
                    if let Some(&(parent, _)) = call_stack.last() {
                        lowlink[parent] = lowlink[parent].min(lowlink[v]);
                    }

                    // v is a component root: pop its members
                    if lowlink[v] == indices[v] {
                        while let Some(w) = stack.pop() {
                            on_stack[w] = false;
                            assignments.insert(NodeId::new(w as u64), num_components);
                            if w == v {
                                break;
                            }
                        }
                        num_components += 1;
                    }
                }
            }
        }

        Ok(ComponentResult { assignments, num_components })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_merges_sets() {
        let mut union_find = UnionFind::new(4);
        assert_ne!(union_find.find(0), union_find.find(1));

        union_find.union(0, 1);
        union_find.union(2, 3);
        assert_eq!(union_find.find(0), union_find.find(1));
        assert_eq!(union_find.find(2), union_find.find(3));
        assert_ne!(union_find.find(0), union_find.find(3));

        union_find.union(1, 2);
        assert_eq!(union_find.find(0), union_find.find(3));
    }

    #[test]
    fn component_result_queries() {
        let mut assignments = HashMap::new();
        assignments.insert(NodeId::new(0), 0);
        assignments.insert(NodeId::new(1), 0);
        assignments.insert(NodeId::new(2), 1);
        let result = ComponentResult { assignments, num_components: 2 };

        assert_eq!(result.component(NodeId::new(2)), Some(1));
        assert!(result.same_component(NodeId::new(0), NodeId::new(1)));
        assert!(!result.same_component(NodeId::new(0), NodeId::new(2)));
        assert_eq!(result.component_size(0), 2);
        assert_eq!(result.largest_component(), Some((0, 2)));

        let mut members = result.nodes_in_component(0);
        members.sort();
        assert_eq!(members, vec![NodeId::new(0), NodeId::new(1)]);
    }
}
