//! Graph analytics algorithms.
//!
//! This module provides analytics over the container's query surface:
//!
//! - [`DegreeCentrality`] - connection-count importance (in/out/total)
//! - [`ConnectedComponents`] - weakly and strongly connected components
//!
//! Both guard against accidentally running on a graph far larger than the
//! caller intended via a configurable node limit; exceeding it returns
//! [`crate::GraphError::GraphTooLarge`] instead of allocating.
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//! use netalgo_graph::analytics::{DegreeCentrality, DegreeCentralityConfig};
//!
//! let mut graph = Graph::new();
//! let (a, _) = graph.add_node(Node::new("a"));
//! graph.add_node(Node::new("b"));
//! graph.add_edge(&"a", &"b").unwrap();
//!
//! let result = DegreeCentrality::compute(&graph, &DegreeCentralityConfig::default()).unwrap();
//! assert_eq!(result.get(a), Some(1.0));
//! ```

mod connected;
mod degree;

pub use connected::{ComponentResult, ConnectedComponents, ConnectedComponentsConfig};
pub use degree::{DegreeCentrality, DegreeCentralityConfig, DegreeCentralityResult};

use crate::graph::{GraphError, GraphResult};

/// Default node limit shared by the analytics algorithms.
pub const DEFAULT_MAX_GRAPH_NODES: usize = 10_000_000;

/// Reject graphs larger than the configured limit.
pub(crate) fn ensure_graph_size(nodes: usize, limit: Option<usize>) -> GraphResult<()> {
    match limit {
        Some(limit) if nodes > limit => Err(GraphError::GraphTooLarge { nodes, limit }),
        _ => Ok(()),
    }
}
