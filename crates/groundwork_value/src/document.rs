//! Composite codec for free-form configuration documents.
//!
//! Catalog entities carry configuration payloads whose shape is unknown at
//! compile time. Those payloads are carried as `serde_json` documents and
//! converted recursively to and from tagged [`Value`]s here.
//!
//! Because the input domain is a closed sum type, every document value has
//! an exact mapping; there is no stringly fallback that could produce data
//! with no decode path back. The one unrepresentable case - a JSON integer
//! above `i64::MAX` - fails loudly with [`CodecError::IntegerOverflow`].

use crate::error::{CodecError, CodecResult};
use crate::value::{Value, ValueKind};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// A free-form, string-keyed configuration payload.
pub type Document = serde_json::Map<String, JsonValue>;

/// Encodes a configuration document.
///
/// An empty top-level map encodes to an explicit null tag, collapsing "no
/// configuration" into one representation. This applies to the top level
/// only; nested empty maps are preserved as empty maps.
pub fn encode_document(doc: &Document) -> CodecResult<Value> {
    if doc.is_empty() {
        return Ok(Value::Null);
    }

    let mut map = BTreeMap::new();
    for (key, value) in doc {
        map.insert(key.clone(), encode_json(value)?);
    }
    Ok(Value::Map(map))
}

/// Decodes a configuration document.
///
/// A null tag decodes to `None` ("no configuration"); a map decodes to the
/// document it holds.
pub fn decode_document(value: &Value) -> CodecResult<Option<Document>> {
    match value {
        Value::Null => Ok(None),
        Value::Map(map) => {
            let mut doc = Document::new();
            for (key, value) in map {
                doc.insert(key.clone(), decode_json(value)?);
            }
            Ok(Some(doc))
        }
        other => Err(CodecError::wrong_kind(ValueKind::Map, other.kind())),
    }
}

/// Recursively encodes a single JSON value.
///
/// An empty list does **not** collapse to null - it encodes as an explicit
/// empty list. "Zero items" and "field not present at all" are different
/// assertions the domain must be able to distinguish for lists.
pub fn encode_json(value: &JsonValue) -> CodecResult<Value> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                if n.is_u64() {
                    // A u64 above i64::MAX would be silently rounded through
                    // f64; refuse it instead.
                    Err(CodecError::integer_overflow(n.to_string()))
                } else {
                    Ok(Value::Float(f))
                }
            } else {
                Err(CodecError::invalid_number(n.to_string()))
            }
        }
        JsonValue::String(s) => Ok(Value::Text(s.clone())),
        JsonValue::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                list.push(encode_json(item)?);
            }
            Ok(Value::List(list))
        }
        JsonValue::Object(map) => {
            let mut out = BTreeMap::new();
            for (key, value) in map {
                out.insert(key.clone(), encode_json(value)?);
            }
            Ok(Value::Map(out))
        }
    }
}

/// Recursively decodes a single JSON value.
pub fn decode_json(value: &Value) -> CodecResult<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Int(n) => Ok(JsonValue::from(*n)),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| CodecError::invalid_number(f.to_string())),
        Value::Text(s) => Ok(JsonValue::String(s.clone())),
        Value::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_json(item)?);
            }
            Ok(JsonValue::Array(out))
        }
        Value::Map(map) => {
            let mut out = Document::new();
            for (key, value) in map {
                out.insert(key.clone(), decode_json(value)?);
            }
            Ok(JsonValue::Object(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: JsonValue) -> Document {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_document_collapses_to_null() {
        let encoded = encode_document(&Document::new()).unwrap();
        assert_eq!(encoded, Value::Null);
        assert_eq!(decode_document(&encoded).unwrap(), None);
    }

    #[test]
    fn empty_list_stays_an_empty_list() {
        let encoded = encode_json(&json!([])).unwrap();
        assert_eq!(encoded, Value::List(vec![]));
        assert_eq!(decode_json(&encoded).unwrap(), json!([]));
    }

    #[test]
    fn nested_empty_map_is_preserved() {
        let document = doc(json!({ "overrides": {} }));
        let encoded = encode_document(&document).unwrap();
        let decoded = decode_document(&encoded).unwrap().unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn explicit_null_inside_document_survives() {
        let document = doc(json!({ "vpcId": null }));
        let encoded = encode_document(&document).unwrap();
        let decoded = decode_document(&encoded).unwrap().unwrap();
        assert_eq!(decoded["vpcId"], JsonValue::Null);
    }

    #[test]
    fn mixed_nested_document_roundtrip() {
        let document = doc(json!({
            "instanceCount": 3,
            "cpuLimit": 0.5,
            "publiclyAccessible": false,
            "subnets": ["subnet-a", "subnet-b"],
            "autoscaling": {
                "min": 1,
                "max": 10,
                "policies": [{ "metric": "cpu", "target": 70.0 }]
            }
        }));

        let encoded = encode_document(&document).unwrap();
        let decoded = decode_document(&encoded).unwrap().unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn integer_and_fractional_tags_survive() {
        let document = doc(json!({ "int": 1, "frac": 3.14 }));
        let encoded = encode_document(&document).unwrap();
        let map = encoded.as_map().unwrap();
        assert_eq!(map["int"], Value::Int(1));
        assert_eq!(map["frac"], Value::Float(3.14));
    }

    #[test]
    fn oversized_unsigned_integer_fails_loudly() {
        let document = doc(json!({ "big": 18446744073709551615u64 }));
        let err = encode_document(&document).unwrap_err();
        assert!(matches!(err, CodecError::IntegerOverflow { .. }));
    }

    #[test]
    fn non_map_value_is_rejected() {
        let err = decode_document(&Value::Text("{}".into())).unwrap_err();
        assert!(matches!(err, CodecError::WrongKind { .. }));
    }

    fn json_leaf() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(JsonValue::from),
            "[a-zA-Z0-9 _-]{0,16}".prop_map(JsonValue::String),
        ]
    }

    fn json_value() -> impl Strategy<Value = JsonValue> {
        json_leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..4).prop_map(|m| {
                    JsonValue::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn json_roundtrip(value in json_value()) {
            let encoded = encode_json(&value).unwrap();
            prop_assert_eq!(decode_json(&encoded).unwrap(), value);
        }
    }
}
