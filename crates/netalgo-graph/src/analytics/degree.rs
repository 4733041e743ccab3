//! Degree Centrality implementation.
//!
//! Degree centrality is a simple measure based on the number of
//! connections a node has. It can measure in-degree (incoming edges),
//! out-degree (outgoing edges), or total degree (both).
//!
//! # Formula
//!
//! For a node v:
//! - In-degree: DC_in(v) = number of incoming edges
//! - Out-degree: DC_out(v) = number of outgoing edges
//! - Total degree: DC(v) = in-degree + out-degree
//!
//! When normalized:
//! - DC_normalized(v) = DC(v) / (n - 1)
//!
//! where n is the total number of nodes.

use std::collections::HashMap;

use netalgo_core::NodeId;

use super::{ensure_graph_size, DEFAULT_MAX_GRAPH_NODES};
use crate::graph::{Graph, GraphResult};
use crate::traversal::Direction;

/// Configuration for Degree Centrality computation.
#[derive(Debug, Clone)]
pub struct DegreeCentralityConfig {
    /// Direction of edges to count.
    /// - `Outgoing`: Count outgoing edges (out-degree)
    /// - `Incoming`: Count incoming edges (in-degree)
    /// - `Both`: Count both directions (total degree)
    ///
    /// Default: Both
    pub direction: Direction,

    /// Whether to normalize centrality values.
    /// When normalized, values are divided by (n-1) where n is the number
    /// of nodes. Default: false
    pub normalize: bool,

    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 10,000,000 (10M nodes)
    pub max_graph_nodes: Option<usize>,
}

impl Default for DegreeCentralityConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Both,
            normalize: false,
            max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES),
        }
    }
}

impl DegreeCentralityConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction for degree counting.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set whether to normalize degree values.
    ///
    /// When normalized, values are divided by (n-1) where n is the number
    /// of nodes, giving a value in the range [0, 1] for simple graphs.
    #[must_use]
    pub const fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
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

/// Result of Degree Centrality computation.
#[derive(Debug, Clone)]
pub struct DegreeCentralityResult {
    /// Centrality scores: node -> degree (possibly normalized).
    pub scores: HashMap<NodeId, f64>,
}

impl DegreeCentralityResult {
    /// Get the score for a specific node.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.scores.get(&node).copied()
    }

    /// Get the top N nodes by score, descending.
    ///
    /// Ties break on the node handle so the order is deterministic.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(NodeId, f64)> {
        let mut ranked: Vec<_> = self.scores.iter().map(|(&node, &score)| (node, score)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// Degree Centrality executor.
pub struct DegreeCentrality;

impl DegreeCentrality {
    /// Compute degree centrality for every node in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::GraphTooLarge`] if the graph exceeds
    /// the configured node limit.
    pub fn compute<T>(
        graph: &Graph<T>,
        config: &DegreeCentralityConfig,
    ) -> GraphResult<DegreeCentralityResult> {
        let node_count = graph.node_count();
        ensure_graph_size(node_count, config.max_graph_nodes)?;

        let divisor = if config.normalize && node_count > 1 {
            (node_count - 1) as f64
        } else {
            1.0
        };

        let mut scores = HashMap::with_capacity(node_count);
        for node in graph.node_ids() {
            let mut degree = 0usize;
            if config.direction.includes_outgoing() {
                degree += graph.out_degree(node);
            }
            if config.direction.includes_incoming() {
                degree += graph.in_degree(node);
            }
            scores.insert(node, degree as f64 / divisor);
        }

        Ok(DegreeCentralityResult { scores })
    }
}
