//! Property-based tests for the container's insertion invariants.

#![allow(clippy::expect_used)]

use std::collections::HashSet;

use proptest::prelude::*;

use netalgo_core::Node;

use super::Graph;

/// Strategy for short label pools that force plenty of duplicates.
fn arb_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d][0-9]?", 0..64)
}

proptest! {
    #[test]
    fn node_count_tracks_distinct_labels(labels in arb_labels()) {
        let mut graph: Graph<String> = Graph::new();
        let mut seen: HashSet<String> = HashSet::new();

        for label in labels {
            let before = graph.node_count();
            let (_, inserted) = graph.add_node(Node::new(label.clone()));
            seen.insert(label);

            // Flag correctness: inserted iff the count grew by one
            prop_assert_eq!(inserted, graph.node_count() == before + 1);
            // Monotonicity
            prop_assert!(graph.node_count() >= before);
            // Dedup invariant
            prop_assert_eq!(graph.node_count(), seen.len());
        }
    }

    #[test]
    fn repeated_insertion_is_idempotent(label in "[a-z]{1,8}", repeats in 1usize..20) {
        let mut graph: Graph<String> = Graph::new();

        let (first, inserted) = graph.add_node(Node::new(label.clone()));
        prop_assert!(inserted);

        for _ in 0..repeats {
            let (handle, inserted) = graph.add_node(Node::new(label.clone()));
            prop_assert!(!inserted);
            prop_assert_eq!(handle, first);
        }

        prop_assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn every_inserted_label_is_findable(labels in arb_labels()) {
        let mut graph: Graph<String> = Graph::new();
        for label in &labels {
            graph.add_node(Node::new(label.clone()));
        }

        for label in &labels {
            let id = graph.find_node(label).expect("inserted label must be findable");
            let node = graph.node(id).expect("handle from find_node must resolve");
            prop_assert_eq!(node.label(), label);
        }
    }

    #[test]
    fn iteration_is_stable(labels in arb_labels()) {
        let mut graph: Graph<String> = Graph::new();
        for label in labels {
            graph.add_node(Node::new(label));
        }

        let first: Vec<String> = graph.nodes().map(|n| n.label().clone()).collect();
        let second: Vec<String> = graph.nodes().map(|n| n.label().clone()).collect();
        prop_assert_eq!(first, second);
    }
}
