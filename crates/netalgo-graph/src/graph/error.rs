//! Error types for the graph container.

use netalgo_core::{EdgeId, NodeId};
use thiserror::Error;

/// Errors that can occur in graph operations.
///
/// Duplicate insertion is deliberately absent: inserting an already-present
/// node or edge is not an error and is reported through the `bool` flag of
/// the insertion result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node handle does not refer to a node in this graph.
    #[error("unknown node handle {0:?}")]
    UnknownNode(NodeId),

    /// An edge endpoint label is not present in the node set.
    #[error("edge endpoint not present in graph: {0}")]
    UnknownEndpoint(String),

    /// The graph exceeds the configured size limit for an algorithm.
    #[error("graph has {nodes} nodes, exceeding the configured limit of {limit}")]
    GraphTooLarge {
        /// Number of nodes in the graph.
        nodes: usize,
        /// The configured limit that was exceeded.
        limit: usize,
    },

    /// A weight-aware algorithm encountered a negative edge weight.
    #[error("negative weight {weight} on edge {edge:?}")]
    NegativeWeight {
        /// The offending edge.
        edge: EdgeId,
        /// Its weight.
        weight: f64,
    },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
