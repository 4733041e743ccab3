//! netalgo Graph
//!
//! This crate provides the in-memory graph container at the heart of
//! netalgo, together with the traversal and analytics layers that consume
//! its query surface.
//!
//! The container deduplicates nodes by label, validates edge endpoints at
//! insertion time, and hands out stable handles ([`netalgo_core::NodeId`],
//! [`netalgo_core::EdgeId`]) that remain valid for the life of the graph.
//!
//! # Modules
//!
//! - [`graph`] - The owning [`Graph`] container
//! - [`index`] - Adjacency index for neighbor lookups
//! - [`traversal`] - Graph traversal algorithms (BFS, DFS, shortest path)
//! - [`analytics`] - Graph analytics (degree centrality, connected components)
//!
//! # Example
//!
//! ```
//! use netalgo_core::Node;
//! use netalgo_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let (a, inserted) = graph.add_node(Node::new("a"));
//! assert!(inserted);
//!
//! // Duplicate labels resolve to the existing node
//! let (also_a, inserted) = graph.add_node(Node::new("a"));
//! assert!(!inserted);
//! assert_eq!(a, also_a);
//! assert_eq!(graph.node_count(), 1);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod graph;
pub mod index;
pub mod traversal;

pub use graph::{Graph, GraphError, GraphResult};
