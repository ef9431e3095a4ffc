//! Dynamic tagged attribute value.

use std::collections::BTreeMap;
use std::fmt;

/// A dynamic, tagged attribute value.
///
/// This type represents any value the item store can hold. The integral
/// vs. fractional distinction is carried by the tag itself ([`Value::Int`]
/// vs. [`Value::Float`]) so numbers round-trip without losing their kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null value. Distinct from an absent item key.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (full i64 range).
    Int(i64),
    /// Fractional number.
    Float(f64),
    /// Text string (UTF-8).
    Text(String),
    /// Ordered, heterogeneous list of values.
    List(Vec<Value>),
    /// String-keyed, unordered map of values.
    Map(BTreeMap<String, Value>),
}

/// The tag of a [`Value`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Null tag.
    Null,
    /// Boolean tag.
    Bool,
    /// Number tag (integer or fractional).
    Number,
    /// Text tag.
    Text,
    /// List tag.
    List,
    /// Map tag.
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) | Value::Float(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a fractional number, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Rough serialized size of this value in bytes.
    ///
    /// Used only for the pre-flight transaction size guard, so the estimate
    /// errs on the small-and-cheap side rather than matching any wire format.
    pub fn estimated_size(&self) -> usize {
        match self {
            Value::Null | Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 8,
            Value::Text(s) => s.len(),
            Value::List(l) => 3 + l.iter().map(Value::estimated_size).sum::<usize>(),
            Value::Map(m) => {
                3 + m
                    .iter()
                    .map(|(k, v)| k.len() + v.estimated_size())
                    .sum::<usize>()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_reporting() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Int(1).kind(), ValueKind::Number);
        assert_eq!(Value::Float(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::Text("x".into()).kind(), ValueKind::Text);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::List);
        assert_eq!(Value::Map(BTreeMap::new()).kind(), ValueKind::Map);
    }

    #[test]
    fn accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());

        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_bool(), None);

        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(42.0).as_int(), None);

        assert_eq!(Value::Text("hello".into()).as_text(), Some("hello"));
        assert_eq!(Value::List(vec![Value::Int(1)]).as_list().unwrap().len(), 1);
    }

    #[test]
    fn integer_and_float_are_distinct() {
        // `1` and `1.0` are different assertions and must not compare equal.
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
        assert_eq!(Value::from("hello"), Value::Text("hello".to_string()));
        assert_eq!(
            Value::from(vec![1i64, 2, 3]),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn estimated_size_is_monotonic_with_content() {
        let small = Value::Text("a".into());
        let large = Value::Text("a".repeat(100));
        assert!(small.estimated_size() < large.estimated_size());

        let nested = Value::List(vec![large.clone(), large]);
        assert!(nested.estimated_size() > 200);
    }
}
