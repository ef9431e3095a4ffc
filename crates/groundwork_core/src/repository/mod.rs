//! Repositories: the worked consumers of the mappers, the driver and the
//! transaction coordinator.
//!
//! Repositories own the concerns the mappers deliberately do not: assigning
//! identity and timestamps on first save, resolving relationship identities
//! into entities (two-step hydration), and choosing when a write goes
//! through the single-item path versus an atomic batch.

mod cloud_provider;
mod stack;
pub mod tables;

pub use cloud_provider::CloudProviderRepository;
pub use stack::StackRepository;

use chrono::NaiveDateTime;

/// Current timestamp in the stored (naive) representation.
pub(crate) fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
