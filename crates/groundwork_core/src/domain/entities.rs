//! Catalog entities.
//!
//! Timestamps are naive local date-times, matching the stored textual form.
//! Identity and timestamps are assigned by the repository layer on first
//! save, not by constructors.

use crate::domain::enums::{ProgrammingLanguage, PropertyDataType, ResourceCategory, StackType};
use chrono::NaiveDateTime;
use groundwork_value::document::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// A cloud computing platform that can host infrastructure resources.
///
/// Administrators enable or disable providers to control which platforms
/// are available to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudProvider {
    /// Identity.
    pub id: Uuid,
    /// Unique machine name.
    pub name: String,
    /// Human-readable name.
    pub display_name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Whether the provider is available to users.
    pub enabled: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A category of infrastructure resource (database, queue, bucket, ...)
/// abstracting over cloud-specific implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceType {
    /// Identity.
    pub id: Uuid,
    /// Unique machine name.
    pub name: String,
    /// Human-readable name.
    pub display_name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Where this resource type may be used.
    pub category: ResourceCategory,
    /// Whether the type is available to users.
    pub enabled: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A property definition for a resource-type/cloud-provider combination:
/// data type, validation rules and default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Identity.
    pub id: Uuid,
    /// Name of the property being described.
    pub property_name: String,
    /// Human-readable name.
    pub display_name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Data type the property's values must have.
    pub data_type: PropertyDataType,
    /// Whether users must supply a value.
    pub required: bool,
    /// The resource-type/cloud-provider mapping this schema belongs to.
    pub mapping_id: Option<Uuid>,
    /// Default value applied when the user supplies none. Free-shaped.
    pub default_value: Option<JsonValue>,
    /// Free-form validation-rule document.
    pub validation_rules: Document,
    /// Ordering hint for form generation.
    pub display_order: Option<i64>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A reusable template of shared infrastructure that stacks build on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Identity.
    pub id: Uuid,
    /// Unique name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Whether the blueprint is selectable for new stacks.
    pub is_active: Option<bool>,
    /// Cloud providers the blueprint supports, by identity. An empty list
    /// means none have been assigned yet.
    pub supported_cloud_provider_ids: Vec<Uuid>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A deployable unit of application plus infrastructure owned by a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// Identity.
    pub id: Uuid,
    /// Human-facing name.
    pub name: String,
    /// Unique cloud-safe resource name.
    pub cloud_name: String,
    /// Unique routing path, slash-delimited.
    pub route_path: String,
    /// The kind of workload.
    pub stack_type: StackType,
    /// Email or handle of the creator.
    pub created_by: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Source repository location.
    pub repository_url: Option<String>,
    /// Primary implementation language.
    pub programming_language: Option<ProgrammingLanguage>,
    /// Whether the stack is reachable without authentication.
    pub is_public: Option<bool>,
    /// Prefix marking ephemeral (short-lived) deployments.
    pub ephemeral_prefix: Option<String>,
    /// Owning team, by identity.
    pub team_id: Option<Uuid>,
    /// Collection membership, by identity.
    pub stack_collection_id: Option<Uuid>,
    /// Blueprint the stack was created from, by identity.
    pub blueprint_id: Option<Uuid>,
    /// Free-form configuration document.
    pub configuration: Document,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A non-shared infrastructure resource belonging to one stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackResource {
    /// Identity.
    pub id: Uuid,
    /// Human-facing name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The kind of resource, by identity.
    pub resource_type_id: Option<Uuid>,
    /// Hosting cloud provider, by identity.
    pub cloud_provider_id: Option<Uuid>,
    /// Owning stack, by identity.
    pub stack_id: Option<Uuid>,
    /// Free-form configuration document, validated upstream against the
    /// property schemas.
    pub configuration: Document,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

/// A team that owns stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Identity.
    pub id: Uuid,
    /// Unique name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Whether the team is active.
    pub is_active: Option<bool>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}
