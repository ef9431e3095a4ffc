//! # Groundwork Value
//!
//! Tagged attribute values and codecs for the Groundwork catalog store.
//!
//! This crate defines the logical contract between the typed domain model
//! and a schemaless, item-based store:
//! - [`Value`] - a closed sum type for any storable attribute value
//!   (null, boolean, integer, float, text, list, map)
//! - [`Item`] - a string-keyed map of tagged values, the store's native
//!   per-record representation
//! - [`scalar`] - bidirectional codecs for primitive domain types
//!   (UUID, timestamp, enum, string, boolean, number)
//! - [`document`] - the recursive codec for free-form, JSON-shaped
//!   configuration payloads
//!
//! ## Absent vs. null
//!
//! A key that is missing from an item means "field not set"; a key present
//! with [`Value::Null`] means "field set to null". These are distinct
//! assertions and are never conflated. [`Presence`] makes the distinction
//! explicit at the type level instead of relying on scattered key checks.
//!
//! ## Usage
//!
//! ```
//! use groundwork_value::{scalar, Item, Value};
//! use uuid::Uuid;
//!
//! let id = Uuid::new_v4();
//! let mut item = Item::new();
//! item.insert("id", scalar::encode_uuid(Some(id)));
//! item.insert("enabled", Value::Bool(true));
//!
//! let decoded = scalar::decode_uuid(item.get("id").unwrap()).unwrap();
//! assert_eq!(decoded, Some(id));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
mod error;
mod item;
pub mod scalar;
mod value;

pub use error::{CodecError, CodecResult};
pub use item::{Item, Presence};
pub use value::{Value, ValueKind};
