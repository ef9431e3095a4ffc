//! Scalar codecs for primitive domain types.
//!
//! Every codec is a total, deterministic `encode`/`decode` pair satisfying
//! `decode(encode(x)) == x` for all valid `x`. Codecs take and return
//! `Option<T>`: a `None` domain value always encodes to an explicit
//! [`Value::Null`] and decodes back to `None` - never to field omission,
//! which is the entity mapper's policy, not the codec's.
//!
//! Decoding a corrupt literal (malformed UUID, unknown enum text, bad
//! timestamp) is a hard failure; codecs never substitute defaults.

use crate::error::{CodecError, CodecResult};
use crate::value::{Value, ValueKind};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// The fixed local date-time format used for timestamps.
///
/// No timezone offset; fractional seconds are printed only when nonzero,
/// so encode and decode share one formatter and round-trip exactly at the
/// formatter's own precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Trait for enums stored by their declared constant name.
///
/// Encoding uses the constant's name, never an ordinal - ordinals are
/// unstable under reordering. Decoding performs an exact, case-sensitive
/// match and fails with [`CodecError::UnknownEnumVariant`] on no match.
pub trait EnumText: Sized {
    /// The enum's type name, used in decode diagnostics.
    const ENUM_NAME: &'static str;

    /// Returns the declared constant name for this variant.
    fn as_text(&self) -> &'static str;

    /// Resolves a constant name to a variant, exactly and case-sensitively.
    fn from_text(text: &str) -> Option<Self>;
}

/// Encodes a UUID in canonical hyphenated textual form.
pub fn encode_uuid(value: Option<Uuid>) -> Value {
    match value {
        Some(u) => Value::Text(u.to_string()),
        None => Value::Null,
    }
}

/// Decodes a UUID from its canonical textual form.
pub fn decode_uuid(value: &Value) -> CodecResult<Option<Uuid>> {
    match value {
        Value::Null => Ok(None),
        Value::Text(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| CodecError::invalid_uuid(s.clone())),
        other => Err(CodecError::wrong_kind(ValueKind::Text, other.kind())),
    }
}

/// Encodes a local date-time using [`TIMESTAMP_FORMAT`].
pub fn encode_timestamp(value: Option<NaiveDateTime>) -> Value {
    match value {
        Some(ts) => Value::Text(ts.format(TIMESTAMP_FORMAT).to_string()),
        None => Value::Null,
    }
}

/// Decodes a local date-time using [`TIMESTAMP_FORMAT`].
pub fn decode_timestamp(value: &Value) -> CodecResult<Option<NaiveDateTime>> {
    match value {
        Value::Null => Ok(None),
        Value::Text(s) => NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Some)
            .map_err(|_| CodecError::invalid_timestamp(s.clone())),
        other => Err(CodecError::wrong_kind(ValueKind::Text, other.kind())),
    }
}

/// Encodes an enum by its declared constant name.
pub fn encode_enum<E: EnumText>(value: Option<&E>) -> Value {
    match value {
        Some(e) => Value::Text(e.as_text().to_string()),
        None => Value::Null,
    }
}

/// Decodes an enum by exact, case-sensitive constant name.
pub fn decode_enum<E: EnumText>(value: &Value) -> CodecResult<Option<E>> {
    match value {
        Value::Null => Ok(None),
        Value::Text(s) => E::from_text(s)
            .map(Some)
            .ok_or_else(|| CodecError::unknown_enum_variant(E::ENUM_NAME, s.clone())),
        other => Err(CodecError::wrong_kind(ValueKind::Text, other.kind())),
    }
}

/// Encodes a string.
pub fn encode_string(value: Option<&str>) -> Value {
    match value {
        Some(s) => Value::Text(s.to_string()),
        None => Value::Null,
    }
}

/// Decodes a string.
pub fn decode_string(value: &Value) -> CodecResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Text(s) => Ok(Some(s.clone())),
        other => Err(CodecError::wrong_kind(ValueKind::Text, other.kind())),
    }
}

/// Encodes a boolean.
pub fn encode_bool(value: Option<bool>) -> Value {
    match value {
        Some(b) => Value::Bool(b),
        None => Value::Null,
    }
}

/// Decodes a boolean.
pub fn decode_bool(value: &Value) -> CodecResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err(CodecError::wrong_kind(ValueKind::Bool, other.kind())),
    }
}

/// Encodes a signed integer.
pub fn encode_int(value: Option<i64>) -> Value {
    match value {
        Some(n) => Value::Int(n),
        None => Value::Null,
    }
}

/// Decodes a signed integer.
pub fn decode_int(value: &Value) -> CodecResult<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Int(n) => Ok(Some(*n)),
        other => Err(CodecError::wrong_kind(ValueKind::Number, other.kind())),
    }
}

/// Encodes an ordered list of UUIDs.
///
/// An empty list encodes as an explicit empty list, not null: "zero items"
/// and "field not present" are different assertions.
pub fn encode_uuid_list(value: Option<&[Uuid]>) -> Value {
    match value {
        Some(ids) => Value::List(ids.iter().map(|u| Value::Text(u.to_string())).collect()),
        None => Value::Null,
    }
}

/// Decodes an ordered list of UUIDs.
pub fn decode_uuid_list(value: &Value) -> CodecResult<Option<Vec<Uuid>>> {
    match value {
        Value::Null => Ok(None),
        Value::List(items) => {
            let mut ids = Vec::with_capacity(items.len());
            for item in items {
                match decode_uuid(item)? {
                    Some(id) => ids.push(id),
                    None => {
                        return Err(CodecError::wrong_kind(ValueKind::Text, ValueKind::Null));
                    }
                }
            }
            Ok(Some(ids))
        }
        other => Err(CodecError::wrong_kind(ValueKind::List, other.kind())),
    }
}

/// Encodes an ordered list of strings.
pub fn encode_string_list(value: Option<&[String]>) -> Value {
    match value {
        Some(items) => Value::List(items.iter().map(|s| Value::Text(s.clone())).collect()),
        None => Value::Null,
    }
}

/// Decodes an ordered list of strings.
pub fn decode_string_list(value: &Value) -> CodecResult<Option<Vec<String>>> {
    match value {
        Value::Null => Ok(None),
        Value::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match decode_string(item)? {
                    Some(s) => out.push(s),
                    None => {
                        return Err(CodecError::wrong_kind(ValueKind::Text, ValueKind::Null));
                    }
                }
            }
            Ok(Some(out))
        }
        other => Err(CodecError::wrong_kind(ValueKind::List, other.kind())),
    }
}

/// Parses a number literal into a tagged number value.
///
/// The literal is inspected for a decimal separator to choose integer vs.
/// fractional parsing: `"1"` yields `Int(1)`, `"3.14"` yields `Float(3.14)`.
/// Integers parse through the full 64-bit signed range; a literal outside
/// that range is an overflow, never a silent precision loss.
pub fn number_from_literal(literal: &str) -> CodecResult<Value> {
    if literal.contains('.') || literal.contains('e') || literal.contains('E') {
        literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| CodecError::invalid_number(literal))
    } else if let Ok(n) = literal.parse::<i64>() {
        Ok(Value::Int(n))
    } else if literal.parse::<i128>().is_ok() {
        Err(CodecError::integer_overflow(literal))
    } else {
        Err(CodecError::invalid_number(literal))
    }
}

/// Renders a tagged number value as a literal.
///
/// Fractional values always carry a decimal separator so the literal
/// re-parses to the same tag.
pub fn number_to_literal(value: &Value) -> CodecResult<String> {
    match value {
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(f) => {
            let mut literal = f.to_string();
            if !literal.contains('.') && !literal.contains('e') && !literal.contains('E') {
                literal.push_str(".0");
            }
            Ok(literal)
        }
        other => Err(CodecError::wrong_kind(ValueKind::Number, other.kind())),
    }
}
