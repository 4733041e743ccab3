//! Edge types for the graph.
//!
//! This module provides the [`Edge`] type, a directed weighted relationship
//! between two nodes, referenced by their handles.
//!
//! # Example
//!
//! ```
//! use netalgo_core::{Edge, EdgeId, NodeId};
//!
//! let a = NodeId::new(0);
//! let b = NodeId::new(1);
//!
//! let link = Edge::new(EdgeId::new(0), a, b).with_weight(3.0);
//!
//! assert_eq!(link.source, a);
//! assert_eq!(link.target, b);
//! assert_eq!(link.weight, 3.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId};

/// A directed, weighted edge between two nodes in the graph.
///
/// Edges reference their endpoints by handle; the owning graph guarantees
/// both endpoints exist at insertion time. The weight defaults to
/// [`Edge::DEFAULT_WEIGHT`], which makes unweighted algorithms and
/// weighted algorithms agree on graphs built without explicit weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique handle for this edge.
    pub id: EdgeId,
    /// The source node handle.
    pub source: NodeId,
    /// The target node handle.
    pub target: NodeId,
    /// The weight of this edge.
    pub weight: f64,
}

impl Edge {
    /// The weight assigned to edges created without an explicit weight.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Create a new edge between two nodes with the default weight.
    #[must_use]
    pub const fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target, weight: Self::DEFAULT_WEIGHT }
    }

    /// Set the weight of this edge.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}
