//! Property-based tests for the node identity contract.

#![allow(clippy::expect_used)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use crate::types::{Node, Value};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Strategy for arbitrary property maps.
fn arb_properties() -> impl Strategy<Value = Vec<(String, Value)>> {
    let value = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // Filter out NaN since NaN != NaN
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::Float),
        ".*".prop_map(Value::String),
    ];
    prop::collection::vec(("[a-z]{1,6}", value), 0..6)
}

proptest! {
    #[test]
    fn equality_is_reflexive_symmetric_and_label_only(
        label in ".*",
        other in ".*",
        props_a in arb_properties(),
        props_b in arb_properties(),
    ) {
        let mut a = Node::new(label.clone());
        for (key, value) in props_a {
            a.set_property(key, value);
        }
        let mut b = Node::new(label.clone());
        for (key, value) in props_b {
            b.set_property(key, value);
        }

        // Reflexive and symmetric regardless of payload
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);

        let c = Node::new(other.clone());
        prop_assert_eq!(a == c, label == other);
    }

    #[test]
    fn equal_nodes_hash_identically(label in ".*", extra in ".*") {
        let plain = Node::new(label.clone());
        let decorated = Node::new(label).with_property("note", extra);

        prop_assert_eq!(hash_of(&plain), hash_of(&decorated));
    }
}
