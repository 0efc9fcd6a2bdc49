//! Integration tests for the JSON helpers.

use std::collections::BTreeMap;

use kata_common::json::{JsonError, from_json, get_json};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_get_json_struct() {
    let json = get_json(&Point { x: 1, y: -2 }).unwrap();
    assert_eq!(json, r#"{"x":1,"y":-2}"#);
}

#[test]
fn test_get_json_sequence() {
    let json = get_json(&[1, 2, 3]).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[test]
fn test_from_json_struct() {
    let point: Point = from_json(r#"{ "x": 10, "y": 20 }"#).unwrap();
    assert_eq!(point, Point { x: 10, y: 20 });
}

#[test]
fn test_from_json_map() {
    let map: BTreeMap<String, u32> = from_json(r#"{"height":10,"width":20}"#).unwrap();
    assert_eq!(map.get("height"), Some(&10));
    assert_eq!(map.get("width"), Some(&20));
}

#[test]
fn test_from_json_malformed() {
    let result: Result<Point, _> = from_json("{\"x\": 1,");
    assert!(matches!(result, Err(JsonError::Decode(_))));
}

#[test]
fn test_from_json_wrong_shape() {
    let result: Result<Point, _> = from_json(r#"{"x": "one", "y": 2}"#);
    assert!(matches!(result, Err(JsonError::Decode(_))));
}

#[test]
fn test_encode_error_message() {
    // Maps with non-string keys cannot be represented as JSON objects.
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1_u8], "value");
    let err = get_json(&map).unwrap_err();
    assert!(matches!(err, JsonError::Encode(_)));
    assert!(err.to_string().starts_with("failed to encode JSON"));
}
