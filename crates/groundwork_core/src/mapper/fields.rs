//! Field-access helpers implementing the absent/null policy in one place.
//!
//! Readers go through [`Presence`]: a required field that is absent or
//! null-tagged fails with `MissingField`; an optional field that is absent
//! or null-tagged reads as `None`. Writers either always write (required),
//! write-if-set (optional), or write-if-nonempty (lists and documents).

use crate::error::CoreResult;
use chrono::NaiveDateTime;
use groundwork_value::document::{self, Document};
use groundwork_value::scalar::{self, EnumText};
use groundwork_value::{CodecError, Item, Presence};
use serde_json::Value as JsonValue;
use uuid::Uuid;

fn require<T>(field: &'static str, value: Option<T>) -> CoreResult<T> {
    match value {
        Some(v) => Ok(v),
        None => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn required_uuid(item: &Item, field: &'static str) -> CoreResult<Uuid> {
    match item.presence(field) {
        Presence::Present(v) => require(field, scalar::decode_uuid(v)?),
        Presence::Absent | Presence::Null => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn required_string(item: &Item, field: &'static str) -> CoreResult<String> {
    match item.presence(field) {
        Presence::Present(v) => require(field, scalar::decode_string(v)?),
        Presence::Absent | Presence::Null => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn required_bool(item: &Item, field: &'static str) -> CoreResult<bool> {
    match item.presence(field) {
        Presence::Present(v) => require(field, scalar::decode_bool(v)?),
        Presence::Absent | Presence::Null => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn required_timestamp(item: &Item, field: &'static str) -> CoreResult<NaiveDateTime> {
    match item.presence(field) {
        Presence::Present(v) => require(field, scalar::decode_timestamp(v)?),
        Presence::Absent | Presence::Null => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn required_enum<E: EnumText>(item: &Item, field: &'static str) -> CoreResult<E> {
    match item.presence(field) {
        Presence::Present(v) => require(field, scalar::decode_enum(v)?),
        Presence::Absent | Presence::Null => Err(CodecError::missing_field(field).into()),
    }
}

pub(super) fn optional_string(item: &Item, field: &str) -> CoreResult<Option<String>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_string(v)?),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

pub(super) fn optional_bool(item: &Item, field: &str) -> CoreResult<Option<bool>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_bool(v)?),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

pub(super) fn optional_int(item: &Item, field: &str) -> CoreResult<Option<i64>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_int(v)?),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

pub(super) fn optional_uuid(item: &Item, field: &str) -> CoreResult<Option<Uuid>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_uuid(v)?),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

pub(super) fn optional_enum<E: EnumText>(item: &Item, field: &str) -> CoreResult<Option<E>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_enum(v)?),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

/// Reads a many-valued relationship. Absent reads as an empty list.
pub(super) fn optional_uuid_list(item: &Item, field: &str) -> CoreResult<Vec<Uuid>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(scalar::decode_uuid_list(v)?.unwrap_or_default()),
        Presence::Absent | Presence::Null => Ok(Vec::new()),
    }
}

/// Reads a configuration document. Absent reads as an empty document.
pub(super) fn optional_document(item: &Item, field: &str) -> CoreResult<Document> {
    match item.presence(field) {
        Presence::Present(v) => Ok(document::decode_document(v)?.unwrap_or_default()),
        Presence::Absent | Presence::Null => Ok(Document::new()),
    }
}

/// Reads a free-shaped JSON value.
pub(super) fn optional_json(item: &Item, field: &str) -> CoreResult<Option<JsonValue>> {
    match item.presence(field) {
        Presence::Present(v) => Ok(Some(document::decode_json(v)?)),
        Presence::Absent | Presence::Null => Ok(None),
    }
}

pub(super) fn put_uuid(item: &mut Item, field: &str, value: Uuid) {
    item.insert(field, scalar::encode_uuid(Some(value)));
}

pub(super) fn put_string(item: &mut Item, field: &str, value: &str) {
    item.insert(field, scalar::encode_string(Some(value)));
}

pub(super) fn put_bool(item: &mut Item, field: &str, value: bool) {
    item.insert(field, scalar::encode_bool(Some(value)));
}

pub(super) fn put_timestamp(item: &mut Item, field: &str, value: NaiveDateTime) {
    item.insert(field, scalar::encode_timestamp(Some(value)));
}

pub(super) fn put_enum<E: EnumText>(item: &mut Item, field: &str, value: &E) {
    item.insert(field, scalar::encode_enum(Some(value)));
}

pub(super) fn put_opt_string(item: &mut Item, field: &str, value: Option<&str>) {
    if let Some(v) = value {
        item.insert(field, scalar::encode_string(Some(v)));
    }
}

pub(super) fn put_opt_bool(item: &mut Item, field: &str, value: Option<bool>) {
    if let Some(v) = value {
        item.insert(field, scalar::encode_bool(Some(v)));
    }
}

pub(super) fn put_opt_int(item: &mut Item, field: &str, value: Option<i64>) {
    if let Some(v) = value {
        item.insert(field, scalar::encode_int(Some(v)));
    }
}

pub(super) fn put_opt_uuid(item: &mut Item, field: &str, value: Option<Uuid>) {
    if let Some(v) = value {
        item.insert(field, scalar::encode_uuid(Some(v)));
    }
}

pub(super) fn put_opt_enum<E: EnumText>(item: &mut Item, field: &str, value: Option<&E>) {
    if let Some(v) = value {
        item.insert(field, scalar::encode_enum(Some(v)));
    }
}

/// Writes a many-valued relationship, omitting the key when the list is
/// empty.
pub(super) fn put_uuid_list_nonempty(item: &mut Item, field: &str, value: &[Uuid]) {
    if !value.is_empty() {
        item.insert(field, scalar::encode_uuid_list(Some(value)));
    }
}

/// Writes a configuration document, omitting the key when empty.
pub(super) fn put_document_nonempty(
    item: &mut Item,
    field: &str,
    value: &Document,
) -> CoreResult<()> {
    if !value.is_empty() {
        item.insert(field, document::encode_document(value)?);
    }
    Ok(())
}

/// Writes a free-shaped JSON value if set.
pub(super) fn put_opt_json(item: &mut Item, field: &str, value: Option<&JsonValue>) -> CoreResult<()> {
    if let Some(v) = value {
        item.insert(field, document::encode_json(v)?);
    }
    Ok(())
}
