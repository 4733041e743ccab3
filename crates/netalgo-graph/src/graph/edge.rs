//! Edge operations on the graph container.
//!
//! Edges are directed and weighted. Both endpoints must already be present
//! in the node set; an edge referencing an unknown endpoint is rejected
//! without mutating the graph. The container stores a simple directed
//! graph: at most one edge per ordered `(source, target)` pair, with
//! duplicate insertion reported the same way duplicate nodes are.

use std::fmt;
use std::hash::Hash;

use netalgo_core::{Edge, EdgeId, NodeId};
use tracing::trace;

use super::{Graph, GraphError, GraphResult};
use crate::traversal::Direction;

impl<T: Eq + Hash + Clone + fmt::Debug> Graph<T> {
    /// Insert a directed edge between two labels with the default weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEndpoint`] if either label is not
    /// present in the node set; the graph is left unchanged.
    pub fn add_edge(&mut self, from: &T, to: &T) -> GraphResult<(EdgeId, bool)> {
        self.add_edge_weighted(from, to, Edge::DEFAULT_WEIGHT)
    }

    /// Insert a directed edge between two labels with the given weight.
    ///
    /// If an edge for this ordered pair already exists, the graph is left
    /// untouched (the stored weight wins) and the existing handle is
    /// returned together with `false`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEndpoint`] if either label is not
    /// present in the node set; the graph is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use netalgo_core::Node;
    /// use netalgo_graph::{Graph, GraphError};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_node(Node::new("a"));
    /// graph.add_node(Node::new("b"));
    ///
    /// let (_, inserted) = graph.add_edge_weighted(&"a", &"b", 2.0).unwrap();
    /// assert!(inserted);
    ///
    /// let err = graph.add_edge(&"a", &"missing").unwrap_err();
    /// assert!(matches!(err, GraphError::UnknownEndpoint(_)));
    /// ```
    pub fn add_edge_weighted(&mut self, from: &T, to: &T, weight: f64) -> GraphResult<(EdgeId, bool)> {
        let source = self
            .find_node(from)
            .ok_or_else(|| GraphError::UnknownEndpoint(format!("{from:?}")))?;
        let target = self
            .find_node(to)
            .ok_or_else(|| GraphError::UnknownEndpoint(format!("{to:?}")))?;

        Ok(self.insert_edge(source, target, weight))
    }
}

impl<T> Graph<T> {
    /// Insert a directed edge between two node handles.
    ///
    /// Handle-based counterpart of [`Graph::add_edge_weighted`] for callers
    /// that kept the handles returned by [`Graph::add_node`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either handle was not issued
    /// by this graph; the graph is left unchanged.
    pub fn add_edge_between(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> GraphResult<(EdgeId, bool)> {
        if self.node(source).is_none() {
            return Err(GraphError::UnknownNode(source));
        }
        if self.node(target).is_none() {
            return Err(GraphError::UnknownNode(target));
        }

        Ok(self.insert_edge(source, target, weight))
    }

    /// Store an edge, deduplicating per ordered pair.
    ///
    /// Callers have validated both endpoints.
    fn insert_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> (EdgeId, bool) {
        if let Some(&existing) = self.edge_index.get(&(source, target)) {
            return (existing, false);
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, source, target).with_weight(weight));
        self.edge_index.insert((source, target), id);
        self.adjacency.record_edge(source, target, id);

        trace!(
            edge = id.as_u64(),
            source = source.as_u64(),
            target = target.as_u64(),
            "edge inserted"
        );
        (id, true)
    }

    /// Get an edge by handle.
    ///
    /// Returns `None` for handles this graph never issued.
    #[inline]
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize)
    }

    /// Find the handle of the edge for an ordered `(source, target)` pair.
    #[inline]
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&(source, target)).copied()
    }

    /// Iterate over the stored edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Handles of the edges leaving a node, in insertion order.
    ///
    /// Empty for handles this graph never issued.
    #[inline]
    #[must_use]
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        self.adjacency.outgoing(node)
    }

    /// Handles of the edges entering a node, in insertion order.
    ///
    /// Empty for handles this graph never issued.
    #[inline]
    #[must_use]
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        self.adjacency.incoming(node)
    }

    /// Number of edges leaving a node.
    #[inline]
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency.out_degree(node)
    }

    /// Number of edges entering a node.
    #[inline]
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.adjacency.in_degree(node)
    }

    /// Number of edges touching a node for the given direction.
    #[must_use]
    pub fn degree(&self, node: NodeId, direction: Direction) -> usize {
        let mut degree = 0;
        if direction.includes_outgoing() {
            degree += self.out_degree(node);
        }
        if direction.includes_incoming() {
            degree += self.in_degree(node);
        }
        degree
    }

    /// Handles of the nodes adjacent to a node for the given direction.
    ///
    /// For outgoing edges the neighbor is the edge's target; for incoming
    /// edges the source. Order follows edge insertion, outgoing first for
    /// [`Direction::Both`]. A neighbor appears once per adjacency entry,
    /// so a self loop queried with `Both` shows up twice.
    #[must_use]
    pub fn neighbors(&self, node: NodeId, direction: Direction) -> Vec<NodeId> {
        crate::traversal::neighbors(self, node, direction)
            .into_iter()
            .map(|(neighbor, _)| neighbor)
            .collect()
    }
}
