//! Per-entity item mappers.
//!
//! Each entity converts to and from its flat [`Item`] projection through
//! pure functions with a fixed policy:
//!
//! - required fields are always written;
//! - unset optional fields are omitted, never written as explicit null;
//! - single relationships are written as `<name>Id`, owned many-valued
//!   relationships as `<name>Ids`, inverse sides never;
//! - configuration documents are omitted entirely when empty.
//!
//! Reading an empty item yields `Ok(None)` (the normal "not found" shape);
//! a present-but-corrupt attribute is a hard [`CoreError::Decode`] failure,
//! never a default.
//!
//! [`CoreError::Decode`]: crate::CoreError::Decode

use crate::error::CoreResult;
use groundwork_value::{scalar, Item};
use uuid::Uuid;

mod blueprint;
mod cloud_provider;
mod fields;
mod property_schema;
mod resource_type;
mod stack;
mod stack_resource;
mod team;

/// Conversion between an entity and its item projection.
pub trait ItemMapper: Sized {
    /// The table this entity type is stored in.
    fn table() -> &'static str;

    /// Projects the entity into a fresh item.
    ///
    /// Fallible only through the composite codec: a configuration document
    /// carrying an unrepresentable number refuses to encode.
    fn to_item(&self) -> CoreResult<Item>;

    /// Reconstructs an entity from an item.
    ///
    /// An empty item is `Ok(None)`. Foreign keys come back raw; resolving
    /// them is the repository layer's job.
    fn from_item(item: &Item) -> CoreResult<Option<Self>>;
}

/// Builds the primary-key item for an entity id.
pub fn id_key(id: Uuid) -> Item {
    Item::key("id", scalar::encode_uuid(Some(id)))
}
