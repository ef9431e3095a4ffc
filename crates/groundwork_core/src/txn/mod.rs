//! Atomic multi-item write coordination.
//!
//! Callers queue writes into a [`WriteBatch`] (each with a mandatory
//! human-readable description) and submit the batch through
//! [`TransactionCoordinator::execute`]. Either every write commits or none
//! does; there is no partial-commit state and the coordinator performs no
//! retries. Retry policy belongs to the caller.

mod coordinator;
mod write;

pub use coordinator::{
    TransactionCoordinator, MAX_TRANSACTION_BYTES, MAX_TRANSACTION_OPERATIONS,
};
pub use write::{TransactionWrite, WriteBatch};
