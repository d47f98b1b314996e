//! Tests for the value model.

use std::collections::{BTreeMap, HashMap};

use super::*;

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(1).type_name(), "int");
    assert_eq!(Value::from(1u8).type_name(), "uint");
    assert_eq!(Value::from(1.0).type_name(), "float");
    assert_eq!(Value::from("x").type_name(), "string");
    assert_eq!(Value::bytes("x").type_name(), "bytes");
    assert_eq!(Value::from(vec![1]).type_name(), "sequence");
    assert_eq!(Value::map([("a", 1)]).type_name(), "map");
    assert_eq!(Value::record("SomeStruct", [("el0", "a")]).type_name(), "SomeStruct");
}

#[test]
fn test_shape_classification() {
    assert!(matches!(Value::from(vec!["a"]).shape(), Shape::Linear(_)));
    assert!(matches!(Value::map([("a", 1)]).shape(), Shape::Associative(_)));
    assert!(matches!(Value::from("abc").shape(), Shape::Scalar));
    assert!(matches!(
        Value::record("SomeStruct", [("el0", "a"), ("el1", "b")]).shape(),
        Shape::Scalar
    ));
}

#[test]
fn test_len() {
    assert_eq!(Value::from("asdf").len(), Some(4));
    assert_eq!(Value::bytes(vec![1, 2]).len(), Some(2));
    assert_eq!(Value::map([("a", 1), ("b", 2)]).len(), Some(2));
    assert_eq!(Value::from(5).len(), None);
    assert_eq!(Value::record("R", Vec::<(String, Value)>::new()).len(), None);
}

#[test]
fn test_hash_map_conversion_is_key_ordered() {
    let mut m = HashMap::new();
    for (i, k) in ["d", "a", "c", "b"].into_iter().enumerate() {
        m.insert(k, i);
    }
    let Value::Map(entries) = Value::from(m) else {
        panic!("expected a map");
    };
    let keys: Vec<_> = entries.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["\"a\"", "\"b\"", "\"c\"", "\"d\""]);
}

#[test]
fn test_btree_map_conversion() {
    let m: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(Value::from(m).to_string(), "{\"a\": 1, \"b\": 2}");
}

#[test]
fn test_display() {
    assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[\"a\", \"b\"]");
    assert_eq!(Value::from(2.0).to_string(), "2.0");
    assert_eq!(Value::from(None::<i32>).to_string(), "null");
    assert_eq!(
        Value::record("SomeStruct", [("el0", "a"), ("el1", "b")]).to_string(),
        "SomeStruct { el0: \"a\", el1: \"b\" }"
    );
    assert_eq!(Value::record("Unit", Vec::<(String, Value)>::new()).to_string(), "Unit");
}

#[test]
fn test_structural_equality_is_strict_on_kind() {
    assert!(!Value::from(vec![1]).structurally_eq(&Value::map([(0, 1)])));
    assert!(!Value::Null.structurally_eq(&Value::from(false)));
    assert!(!Value::from(vec![1, 2]).structurally_eq(&Value::from(vec![1])));
}

#[test]
fn test_map_equality_is_symmetric_with_duplicate_keys() {
    let doubled = Value::map([("x", 1), ("x", 1)]);
    let distinct = Value::map([("x", 1), ("y", 2)]);
    assert!(!doubled.structurally_eq(&distinct));
    assert!(!distinct.structurally_eq(&doubled));
    assert!(doubled.structurally_eq(&Value::map([("x", 1), ("x", 1)])));
}

#[test]
fn test_get_uses_structural_keys() {
    let m = Value::map([(1u8, "one"), (2u8, "two")]);
    assert_eq!(m.get(&Value::from(2i64)), Some(&Value::from("two")));
    assert_eq!(m.get(&Value::from(3)), None);
    assert_eq!(Value::from(vec![1]).get(&Value::from(0)), None);
}

#[test]
fn test_total_cmp_orders_across_kinds() {
    let mut values = vec![
        Value::from("b"),
        Value::from(2),
        Value::Null,
        Value::from(1.5),
        Value::from("a"),
        Value::from(true),
    ];
    values.sort_by(Value::total_cmp);
    let rendered: Vec<_> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["null", "true", "1.5", "2", "\"a\"", "\"b\""]);
}

#[cfg(feature = "json")]
#[test]
fn test_json_conversion() {
    let v = Value::from(serde_json::json!({"a": [1, "x", null], "b": -2.5, "c": 18446744073709551615u64}));
    assert_eq!(v.get(&Value::from("a")), Some(&Value::seq([Value::Int(1), Value::from("x"), Value::Null])));
    assert_eq!(v.get(&Value::from("b")), Some(&Value::Float(-2.5)));
    assert_eq!(v.get(&Value::from("c")), Some(&Value::UInt(u64::MAX)));
}

#[test]
fn test_total_cmp_orders_mixed_numbers_and_nan() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan.total_cmp(&Value::Int(3)), Ordering::Greater);
    assert_eq!(Value::Int(3).total_cmp(&nan), Ordering::Less);
    assert_eq!(Value::Int(3).total_cmp(&Value::UInt(3)), Ordering::Less);
    assert_eq!(Value::Float(3.0).total_cmp(&Value::UInt(3)), Ordering::Greater);
    assert_eq!(nan.total_cmp(&nan), Ordering::Equal);

    let mut values = vec![
        nan.clone(),
        Value::Int(3),
        Value::Float(1.5),
        Value::UInt(3),
        Value::Int(-2),
        Value::Float(f64::NEG_INFINITY),
    ];
    values.sort_by(Value::total_cmp);
    let rendered: Vec<_> = values
        .iter()
        .map(|v| format!("{v} ({})", v.type_name()))
        .collect();
    assert_eq!(
        rendered,
        vec!["-inf (float)", "-2 (int)", "1.5 (float)", "3 (int)", "3 (uint)", "NaN (float)"]
    );
}
