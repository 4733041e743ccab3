//! Node types for the graph.
//!
//! This module provides the [`Node`] type, the unit of graph membership:
//! a label that carries the node's identity, plus an optional property map
//! for non-identity payload data.
//!
//! # Example
//!
//! ```
//! use netalgo_core::{Node, Value};
//!
//! let router = Node::new("r1")
//!     .with_property("site", "fra")
//!     .with_property("capacity", 40i64);
//!
//! assert_eq!(*router.label(), "r1");
//! assert_eq!(router.get_property("site").and_then(|v| v.as_str()), Some("fra"));
//! ```

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Value;

/// A node in the graph: an identity-bearing label plus payload properties.
///
/// Two nodes are equal if and only if their labels are equal. Properties
/// never participate in equality or hashing — they are payload, not
/// identity. The graph's deduplication rule rests on this, which is why the
/// label is immutable once a node is constructed: there is no mutator, and
/// [`label`](Self::label) hands out a shared reference only.
///
/// # Example
///
/// ```
/// use netalgo_core::Node;
///
/// let a = Node::new("1").with_property("color", "red");
/// let b = Node::new("1").with_property("color", "blue");
/// let c = Node::new("2");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<T> {
    /// The identity of this node.
    label: T,
    /// Payload properties, ignored by equality and hashing.
    properties: HashMap<String, Value>,
}

impl<T> Node<T> {
    /// Create a new node with the given label.
    #[must_use]
    pub fn new(label: T) -> Self {
        Self { label, properties: HashMap::new() }
    }

    /// Get the label of this node.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Add a property to this node.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property value by key.
    #[inline]
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property value.
    #[inline]
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Returns an iterator over the node's properties.
    #[inline]
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Equality and hashing are label-only and therefore consistent with each
// other: equal nodes hash identically.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}
