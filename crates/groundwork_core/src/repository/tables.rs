//! Table-name registry.
//!
//! One table per entity type. Provisioning these tables belongs to the
//! driver/infrastructure layer; this module only names them.

/// Cloud providers.
pub const CLOUD_PROVIDERS: &str = "gw_cloud_providers";

/// Resource types.
pub const RESOURCE_TYPES: &str = "gw_resource_types";

/// Property schemas.
pub const PROPERTY_SCHEMAS: &str = "gw_property_schemas";

/// Blueprints.
pub const BLUEPRINTS: &str = "gw_blueprints";

/// Stacks.
pub const STACKS: &str = "gw_stacks";

/// Stack resources.
pub const STACK_RESOURCES: &str = "gw_stack_resources";

/// Teams.
pub const TEAMS: &str = "gw_teams";

/// Every table the catalog uses, for test-driver provisioning.
pub const ALL: &[&str] = &[
    CLOUD_PROVIDERS,
    RESOURCE_TYPES,
    PROPERTY_SCHEMAS,
    BLUEPRINTS,
    STACKS,
    STACK_RESOURCES,
    TEAMS,
];
