//! # Groundwork Core
//!
//! Domain model and persistence core for the Groundwork catalog.
//!
//! This crate sits between the typed catalog domain and the schemaless
//! item store:
//!
//! - [`domain`] — entities and enums (providers, resource types, property
//!   schemas, blueprints, stacks, teams);
//! - [`mapper`] — per-entity conversion to and from flat tagged items,
//!   with a fixed absent-vs-null policy and relationships stored by
//!   identity only;
//! - [`txn`] — the [`WriteBatch`] builder and [`TransactionCoordinator`]
//!   for all-or-nothing multi-item writes, with pre-flight limit checks
//!   and classified failure diagnostics;
//! - [`repository`] — worked consumers combining the above: identity and
//!   timestamp assignment, optimistic locking, two-step relationship
//!   hydration.
//!
//! [`WriteBatch`]: txn::WriteBatch
//! [`TransactionCoordinator`]: txn::TransactionCoordinator

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod domain;
mod error;
pub mod mapper;
pub mod repository;
pub mod txn;

pub use error::{CoreError, CoreResult, FailureKind, OperationFailure};
