//! Node operations on the graph container.
//!
//! Insertion deduplicates by label; lookups and iteration are the query
//! surface traversal algorithms build on.

use std::hash::Hash;

use netalgo_core::{Node, NodeId};
use tracing::trace;

use super::Graph;

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Insert a node, deduplicating by label.
    ///
    /// If a node with an equal label is already stored, the graph is left
    /// untouched and the handle of the existing node is returned together
    /// with `false`; the incoming value (payload included) is discarded,
    /// not merged. Otherwise the node is stored, the node count grows by
    /// exactly one, and the new handle is returned together with `true`.
    ///
    /// Amortized O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use netalgo_core::Node;
    /// use netalgo_graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let (first, inserted) = graph.add_node(Node::new("1"));
    /// assert!(inserted);
    ///
    /// let (again, inserted) = graph.add_node(Node::new("1"));
    /// assert!(!inserted);
    /// assert_eq!(first, again);
    /// ```
    pub fn add_node(&mut self, node: Node<T>) -> (NodeId, bool) {
        if let Some(&existing) = self.node_index.get(node.label()) {
            return (existing, false);
        }

        let id = NodeId::new(self.nodes.len() as u64);
        self.node_index.insert(node.label().clone(), id);
        self.nodes.push(node);
        self.adjacency.register_node();

        trace!(node = id.as_u64(), "node inserted");
        (id, true)
    }

    /// Find the handle of the node with the given label.
    ///
    /// O(1) expected.
    #[inline]
    #[must_use]
    pub fn find_node(&self, label: &T) -> Option<NodeId> {
        self.node_index.get(label).copied()
    }

    /// Check whether a node with the given label is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, label: &T) -> bool {
        self.node_index.contains_key(label)
    }
}

impl<T> Graph<T> {
    /// Get a node by handle.
    ///
    /// Returns `None` for handles this graph never issued.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.as_u64() as usize)
    }

    /// Get a mutable reference to a node's payload by handle.
    ///
    /// The label itself stays immutable ([`Node`] exposes no label
    /// mutator), so deduplication cannot be broken through this.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.as_u64() as usize)
    }

    /// Iterate over the stored nodes in insertion order.
    ///
    /// The iterator is lazy and restartable; repeated iteration of an
    /// unmodified graph yields the same sequence.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    /// Iterate over the handles of the stored nodes in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u64).map(NodeId::new)
    }
}
