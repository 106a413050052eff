//! Round-trip properties
//!
//! Any tree of plain values with direct children survives encode then decode.

use crate::*;
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn finite_double() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        finite_double().prop_map(Value::Double),
        "[ -~]{0,12}".prop_map(Value::String),
        Just(Value::Null),
    ]
}

fn list() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(any::<i64>(), 1..5).prop_map(|v| Value::List(List::from(v))),
        prop::collection::vec(any::<bool>(), 1..5).prop_map(|v| Value::List(List::from(v))),
        prop::collection::vec(finite_double(), 1..5).prop_map(|v| Value::List(List::from(v))),
        prop::collection::vec("[a-z]{0,6}", 1..5).prop_map(|v| Value::List(List::from(v))),
    ]
}

fn attributes() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((key(), prop_oneof![3 => scalar(), 1 => list()]), 0..6)
}

fn node(attrs: Vec<(String, Value)>, uri: Option<String>, types: Vec<String>) -> Representation {
    let repr = Representation::new();
    if let Some(uri) = uri {
        repr.set_uri(uri).unwrap();
    }
    for (k, v) in attrs {
        repr.set(k, v).unwrap();
    }
    for t in types {
        repr.append_resource_type(t).unwrap();
    }
    repr
}

type NodeParts = (Vec<(String, Value)>, Option<String>, Vec<String>);

fn node_parts() -> impl Strategy<Value = NodeParts> {
    (
        attributes(),
        prop::option::of("/[a-z]{1,8}"),
        prop::collection::vec("[a-z]{1,6}\\.[a-z]{1,6}", 0..3),
    )
}

fn tree() -> impl Strategy<Value = Representation> {
    (node_parts(), prop::collection::vec(node_parts(), 0..3)).prop_map(|((a, u, t), children)| {
        let parent = node(a, u, t);
        for (a, u, t) in children {
            parent.append_child(&node(a, u, t)).unwrap();
        }
        parent
    })
}

proptest! {
    #[test]
    fn test_encode_then_decode_is_identity(repr in tree(), pretty in any::<bool>()) {
        let config = CodecConfig::builder().pretty(pretty).build().unwrap();
        let decoded = config.decode(&config.encode(&repr).unwrap()).unwrap();
        prop_assert_eq!(decoded, repr);
    }

    #[test]
    fn test_reply_round_trip_is_identity(repr in tree(), result in 0i32..20) {
        let reply = CruResponse { options: None, representation: repr, result };
        let decoded = CruResponse::decode(&reply.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, reply);
    }
}
