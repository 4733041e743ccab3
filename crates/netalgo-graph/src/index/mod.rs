//! Graph indexes for efficient traversal.
//!
//! This module provides the adjacency index used by the container for fast
//! neighbor lookups and by the traversal layer for expansion.
//!
//! # Layout
//!
//! Two per-node lists of edge handles, appended on edge insertion:
//!
//! - `outgoing`: edges leaving the node
//! - `incoming`: edges entering the node
//!
//! Lists follow edge insertion order, which keeps neighbor iteration
//! deterministic across repeated queries of an unmodified graph.

mod adjacency;

pub use adjacency::AdjacencyIndex;
