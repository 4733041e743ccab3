//! Handle types for referencing graph elements.
//!
//! Handles are stable indices into the owning graph's backing storage.
//! Inserting further nodes or edges never invalidates a handle issued
//! earlier; a handle stays valid for the lifetime of the graph that
//! produced it. Handles from one graph are meaningless in another.

use serde::{Deserialize, Serialize};

/// A handle to a node stored in a graph.
///
/// # Example
///
/// ```
/// use netalgo_core::NodeId;
///
/// let id = NodeId::new(7);
/// assert_eq!(id.as_u64(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a node handle from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value of this handle.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// A handle to an edge stored in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Create an edge handle from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value of this handle.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_roundtrip() {
        assert_eq!(NodeId::new(42).as_u64(), 42);
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert!(EdgeId::new(0) < EdgeId::new(10));
    }
}
