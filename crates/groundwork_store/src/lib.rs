//! # Groundwork Store
//!
//! Item-store driver surface for the Groundwork catalog.
//!
//! This crate defines the downstream contract the persistence core talks
//! to: the [`ItemStore`] trait with single-item get/put/delete primitives
//! and an atomic multi-item `transact_write`, the write-operation
//! descriptors submitted to it, and the driver's error surface.
//!
//! Drivers are **opaque item stores**: they address records by table and
//! key, hold tagged values, and know nothing about domain entities or how
//! fields are mapped. Table provisioning and schema lifecycle belong to the
//! driver/infrastructure layer, not to this contract.
//!
//! [`InMemoryStore`] is the reference driver, used by the core's tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod error;
mod memory;
mod ops;

pub use driver::ItemStore;
pub use error::{CancellationReason, StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use ops::{Condition, UpdateExpression, WriteOp};
