//! JSON document tests
//!
//! Exact document layout and the decode paths for both document forms.

use crate::*;

// ============================================================================
// Encode
// ============================================================================

#[test]
fn test_light_encodes_to_exact_document() {
    init_tracing();
    let config = CodecConfig::default();
    assert_eq!(
        config.encode(&light()).unwrap(),
        r#"{"oc":[{"href":"/a/light","rep":{"power":true,"level":5},"prop":{"rt":["core.light"],"if":["oc.mi.def"]}}]}"#
    );
}

#[test]
fn test_integer_list_stays_integer() {
    let repr = Representation::new();
    repr.set_list("ints", List::from(vec![1i64, 2, 3])).unwrap();

    let json = iotcon::json::encode(&repr, false).unwrap();
    assert!(json.contains(r#""ints":[1,2,3]"#));

    let decoded = iotcon::json::decode(&json).unwrap();
    let ints = decoded.get_list("ints").unwrap();
    assert_eq!(ints.kind(), ValueKind::Int);
    let values: Vec<_> = ints.iter().cloned().collect();
    assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_children_listed_after_parent() {
    let json = iotcon::json::encode(&parent_with_children(2), false).unwrap();
    assert_eq!(
        json,
        r#"{"oc":[{"href":"/a/parent","rep":{"string":"Hello"}},{"href":"/a/child0","rep":{"index":0}},{"href":"/a/child1","rep":{"index":1}}]}"#
    );
}

#[test]
fn test_pretty_output_parses_as_json() {
    let config = CodecConfig::builder().pretty(true).build().unwrap();
    let text = config.encode(&parent_with_children(1)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["oc"].as_array().map(Vec::len), Some(2));
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn test_single_object_form_decodes() {
    let repr = CodecConfig::default()
        .decode(r#"{"href":"/a/x","rep":{"name":"hello"}}"#)
        .unwrap();
    assert_eq!(repr.uri().as_deref(), Some("/a/x"));
    assert_eq!(repr.key_count(), 1);
    assert_eq!(repr.get_str("name").unwrap(), "hello");
}

#[test]
fn test_oc_siblings_become_children() {
    let parent = parent_with_children(3);
    let config = CodecConfig::default();
    let decoded = config.decode(&config.encode(&parent).unwrap()).unwrap();

    assert_eq!(decoded, parent);
    let uris: Vec<_> = decoded.children().iter().filter_map(|c| c.uri()).collect();
    assert_eq!(uris, vec!["/a/child0", "/a/child1", "/a/child2"]);
}

#[test]
fn test_heterogeneous_array_is_type_mismatch() {
    let err = CodecConfig::default()
        .decode(r#"{"rep":{"mixed":[true,1]}}"#)
        .unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_wrong_member_type_is_type_mismatch() {
    let err = CodecConfig::default().decode(r#"{"href":["/a"]}"#).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_malformed_text_is_parse_error() {
    for text in ["", "{", r#"{"rep":{"a":}}"#, r#"{"a":1} trailing"#] {
        let err = CodecConfig::default().decode(text).unwrap_err();
        assert!(err.is_parse(), "{:?} gave {:?}", text, err);
    }
}

#[test]
fn test_too_deep_is_parse_error() {
    let config = CodecConfig::builder().max_depth(4).build().unwrap();
    let err = config
        .decode(r#"{"rep":{"a":[[[1]]]}}"#)
        .unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_list_deeper_than_three_dimensions_rejected() {
    let err = CodecConfig::default()
        .decode(r#"{"rep":{"a":[[[[1]]]]}}"#)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}
