//! List Tests
//!
//! Homogeneity and shape rules.

use crate::*;
use proptest::prelude::*;

#[test]
fn test_mixed_kinds_rejected() {
    let err = List::from_values(vec![Value::Int(1), Value::Bool(true)]).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_three_dimensions_allowed_four_rejected() {
    let d1 = List::from(vec![1i64]);
    let d2 = List::from_values(vec![Value::List(d1)]).unwrap();
    let d3 = List::from_values(vec![Value::List(d2)]).unwrap();
    assert_eq!(d3.dimension(), 3);

    let err = List::from_values(vec![Value::List(d3)]).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_inner_lists_must_agree() {
    let ints = Value::List(List::from(vec![1i64]));
    let strs = Value::List(List::from(vec!["a".to_string()]));
    assert!(List::from_values(vec![ints, strs]).unwrap_err().is_type_mismatch());
}

#[test]
fn test_insert_and_remove_positions() {
    let mut list = List::from(vec![1i64, 3]);
    list.insert(1, Value::Int(2)).unwrap();
    list.insert(3, Value::Int(4)).unwrap();
    assert!(list.insert(9, Value::Int(0)).unwrap_err().is_not_found());
    assert_eq!(list.remove(0).unwrap(), Value::Int(1));
    assert_eq!(list, List::from(vec![2i64, 3, 4]));
}

proptest! {
    #[test]
    fn test_uniform_lists_keep_order(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let list = List::with_kind(
            ValueKind::Int,
            values.iter().copied().map(Value::Int).collect(),
        ).unwrap();
        let back: Vec<i64> = list.iter().filter_map(Value::as_int).collect();
        prop_assert_eq!(back, values);
    }

    #[test]
    fn test_any_foreign_element_rejected(ints in prop::collection::vec(any::<i64>(), 0..8), at in 0usize..8) {
        let mut values: Vec<Value> = ints.into_iter().map(Value::Int).collect();
        let at = at.min(values.len());
        values.insert(at, Value::String("x".into()));
        let result = List::with_kind(ValueKind::Int, values);
        prop_assert!(result.unwrap_err().is_type_mismatch());
    }
}
