//! Adjacency list index.

use netalgo_core::{EdgeId, NodeId};

/// Adjacency list index: per-node outgoing and incoming edge handles.
///
/// The index is owned and maintained by the graph container; nodes are
/// registered on insertion and edges recorded when they are stored. There
/// is no removal, so the lists are append-only and edge handles inside
/// them stay valid for the life of the graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Outgoing edge handles per node, in edge insertion order.
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edge handles per node, in edge insertion order.
    incoming: Vec<Vec<EdgeId>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with pre-allocated node capacity.
    #[must_use]
    pub(crate) fn with_capacity(nodes: usize) -> Self {
        Self { outgoing: Vec::with_capacity(nodes), incoming: Vec::with_capacity(nodes) }
    }

    /// Register storage for the next node handle.
    pub(crate) fn register_node(&mut self) {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
    }

    /// Record an edge between two registered nodes.
    ///
    /// Endpoints have been validated by the container before this is
    /// called, so the lists for both handles exist.
    pub(crate) fn record_edge(&mut self, source: NodeId, target: NodeId, edge: EdgeId) {
        if let Some(list) = self.outgoing.get_mut(source.as_u64() as usize) {
            list.push(edge);
        }
        if let Some(list) = self.incoming.get_mut(target.as_u64() as usize) {
            list.push(edge);
        }
    }

    /// Edge handles leaving a node. Empty for unregistered handles.
    #[inline]
    #[must_use]
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        self.outgoing.get(node.as_u64() as usize).map_or(&[], Vec::as_slice)
    }

    /// Edge handles entering a node. Empty for unregistered handles.
    #[inline]
    #[must_use]
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        self.incoming.get(node.as_u64() as usize).map_or(&[], Vec::as_slice)
    }

    /// Number of edges leaving a node.
    #[inline]
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing(node).len()
    }

    /// Number of edges entering a node.
    #[inline]
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming(node).len()
    }
}
