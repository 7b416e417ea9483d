#![cfg(feature = "json")]

//! Integration tests for serde and JSON support of Set.

use rstest::rstest;
use serde::{Deserialize, Serialize};
use zeroset::{Set, SetError, set};

#[rstest]
fn test_zero_set_roundtrip_stays_zero() {
    let zero: Set<i32> = Set::new();
    let json = serde_json::to_string(&zero).unwrap();
    assert_eq!(json, "null");
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_zero());
    assert!(restored.equal(&zero));
}

#[rstest]
fn test_allocated_empty_roundtrip_stays_allocated() {
    let empty: Set<i32> = set![];
    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, "[]");
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert!(!restored.is_zero());
}

#[rstest]
fn test_null_and_empty_array_are_equal_but_differ_in_zero() {
    let from_null: Set<i32> = serde_json::from_str("null").unwrap();
    let from_array: Set<i32> = serde_json::from_str("[]").unwrap();
    assert!(from_null.equal(&from_array));
    assert!(from_null.is_zero());
    assert!(!from_array.is_zero());
}

#[rstest]
fn test_roundtrip_large_set() {
    let original: Set<u32> = (0..1000).collect();
    let json = original.to_json().unwrap();
    let restored = Set::<u32>::from_json(&json).unwrap();
    assert!(restored.equal(&original));
}

#[rstest]
fn test_serialized_array_holds_every_element() {
    let set = set!["a".to_string(), "b".to_string(), "c".to_string()];
    let json = serde_json::to_string(&set).unwrap();
    let mut parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    parsed.sort();
    assert_eq!(parsed, vec!["a", "b", "c"]);
}

#[rstest]
#[case("{}")]
#[case("true")]
#[case("1.5")]
#[case("\"[]\"")]
#[case("[1,")]
#[case("")]
fn test_invalid_input_is_a_decode_error(#[case] json: &str) {
    let error = Set::<i32>::from_json(json).unwrap_err();
    assert!(matches!(error, SetError::Decode(_)));
}

#[rstest]
fn test_decode_error_names_expected_shape() {
    let error = serde_json::from_str::<Set<i32>>("{\"a\": 1}").unwrap_err();
    assert!(error.to_string().contains("expected a sequence"));
}

#[rstest]
fn test_replace_discards_previous_contents() {
    let mut set = set![1, 2, 3];
    set.replace_from_json("[3, 4]").unwrap();
    assert!(set.equal(&set![3, 4]));

    set.replace_from_json("null").unwrap();
    assert!(set.is_zero());

    set.replace_from_json("[]").unwrap();
    assert!(!set.is_zero());
    assert!(set.is_empty());
}

#[rstest]
fn test_failed_replace_leaves_set_empty() {
    let mut set = set![1, 2, 3];
    assert!(set.replace_from_json("42").is_err());
    assert!(set.is_empty());
}

#[derive(Serialize, Deserialize)]
struct Document {
    tags: Set<String>,
    #[serde(default)]
    owners: Set<String>,
}

#[rstest]
fn test_nested_in_struct() {
    let document = Document {
        tags: set!["rust".to_string()],
        owners: Set::new(),
    };
    let json = serde_json::to_string(&document).unwrap();
    assert_eq!(json, r#"{"tags":["rust"],"owners":null}"#);

    let restored: Document = serde_json::from_str(r#"{"tags":[]}"#).unwrap();
    assert!(!restored.tags.is_zero());
    assert!(restored.owners.is_zero());
}
