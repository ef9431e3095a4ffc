//! The catalog domain model.
//!
//! Entities here are plain data: identity, scalars, optional fields,
//! free-form configuration documents, and relationships held by identity
//! only. No entity ever embeds another entity's fields.

mod entities;
mod enums;

pub use entities::{
    Blueprint, CloudProvider, PropertySchema, ResourceType, Stack, StackResource, Team,
};
pub use enums::{ProgrammingLanguage, PropertyDataType, ResourceCategory, StackType};
