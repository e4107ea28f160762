use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::converter::schema_path::{build_fragment, merge_property};
use crate::converter::swagger::Schema;
use crate::error::ConvertError;

fn object_of(fragments: Vec<(String, Schema)>) -> serde_json::Value {
  let mut properties = IndexMap::new();
  for (name, fragment) in fragments {
    merge_property(&mut properties, name, fragment);
  }
  serde_json::to_value(Schema::object(properties)).unwrap()
}

#[test]
fn test_array_segment_round_trip() {
  let fragment = build_fragment("items[n].name", Schema::typed("string")).unwrap();

  assert_eq!(
    object_of(vec![fragment]),
    json!({
      "type": "object",
      "properties": {
        "items": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": { "name": { "type": "string" } }
          }
        }
      }
    })
  );
}

#[test]
fn test_bare_array_path_wraps_leaf() {
  let fragment = build_fragment("tags[n]", Schema::typed("string")).unwrap();

  assert_eq!(
    object_of(vec![fragment]),
    json!({
      "type": "object",
      "properties": {
        "tags": { "type": "array", "items": { "type": "string" } }
      }
    })
  );
}

#[test]
fn test_repeated_array_segments_wrap_at_each_occurrence() {
  let fragment = build_fragment("a[n].b[n].c", Schema::typed("integer")).unwrap();

  assert_eq!(
    object_of(vec![fragment]),
    json!({
      "type": "object",
      "properties": {
        "a": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "b": {
                "type": "array",
                "items": {
                  "type": "object",
                  "properties": { "c": { "type": "integer" } }
                }
              }
            }
          }
        }
      }
    })
  );
}

#[test]
fn test_sibling_fragments_merge_without_losing_leaves() {
  let first = build_fragment("a.x", Schema::typed("string")).unwrap();
  let second = build_fragment("a.y", Schema::typed("integer")).unwrap();

  assert_eq!(
    object_of(vec![first, second]),
    json!({
      "type": "object",
      "properties": {
        "a": {
          "type": "object",
          "properties": {
            "x": { "type": "string" },
            "y": { "type": "integer" }
          }
        }
      }
    })
  );
}

#[test]
fn test_merge_is_associative_across_depths() {
  let fragments = vec![
    build_fragment("order.lines[n].sku", Schema::typed("string")).unwrap(),
    build_fragment("order.lines[n].count", Schema::typed("integer")).unwrap(),
    build_fragment("order.note", Schema::typed("string")).unwrap(),
  ];

  assert_eq!(
    object_of(fragments),
    json!({
      "type": "object",
      "properties": {
        "order": {
          "type": "object",
          "properties": {
            "lines": {
              "type": "array",
              "items": {
                "type": "object",
                "properties": {
                  "sku": { "type": "string" },
                  "count": { "type": "integer" }
                }
              }
            },
            "note": { "type": "string" }
          }
        }
      }
    })
  );
}

#[test]
fn test_terminal_leaf_may_be_overwritten() {
  let first = build_fragment("a.x", Schema::typed("string")).unwrap();
  let second = build_fragment("a.x", Schema::typed("integer")).unwrap();

  assert_eq!(
    object_of(vec![first, second]),
    json!({
      "type": "object",
      "properties": {
        "a": {
          "type": "object",
          "properties": { "x": { "type": "integer" } }
        }
      }
    })
  );
}

#[test]
fn test_malformed_paths_are_rejected() {
  for path in ["", "a..b", "a.", ".a", "a[n]x", "a[0].b", "[n]"] {
    let error = build_fragment(path, Schema::typed("string")).unwrap_err();
    assert!(
      matches!(error, ConvertError::UnsupportedConstruct { .. }),
      "path `{path}` should be rejected"
    );
  }
}
