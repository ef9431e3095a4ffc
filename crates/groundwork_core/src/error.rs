//! Error types for the persistence core.

use groundwork_store::StoreError;
use groundwork_value::CodecError;
use std::fmt;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Classified cause of a transaction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A write's precondition was violated. Do not blindly retry; the
    /// expected state was not met.
    ConditionalCheckFailed,
    /// Another transaction was modifying the same items. Retry with
    /// backoff is reasonable.
    TransactionConflict,
    /// The store rejected the batch for capacity reasons.
    ThroughputExceeded,
    /// A referenced table does not exist.
    ResourceNotFound,
    /// The store reported a cause this layer does not recognize.
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::ConditionalCheckFailed => "conditional check failed",
            FailureKind::TransactionConflict => "transaction conflict",
            FailureKind::ThroughputExceeded => "throughput exceeded",
            FailureKind::ResourceNotFound => "resource not found",
            FailureKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One failed operation within a cancelled transaction, paired with the
/// caller-supplied description of what that operation was doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    /// Zero-based position of the operation in the submitted batch.
    pub index: usize,
    /// The description given when the write was queued.
    pub description: String,
    /// Classified cause.
    pub kind: FailureKind,
    /// Raw detail from the store, if any.
    pub message: Option<String>,
}

/// Errors surfaced by mappers, repositories and the transaction coordinator.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A stored value could not be decoded into its domain type.
    #[error("decode error: {0}")]
    Decode(#[from] CodecError),

    /// A request was rejected before any store call was made.
    #[error("validation error: {message}")]
    Validation {
        /// What was wrong with the request.
        message: String,
    },

    /// An atomic multi-item write failed; nothing was committed.
    #[error("transaction failed ({kind}): {message}")]
    TransactionFailed {
        /// Classified primary cause.
        kind: FailureKind,
        /// Full diagnostic text, including per-operation breakdown and
        /// guidance.
        message: String,
        /// Per-operation failures, in submission order.
        failures: Vec<OperationFailure>,
        /// The driver error that caused the failure.
        #[source]
        source: StoreError,
    },

    /// A single-item store call failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying driver error.
        #[from]
        source: StoreError,
    },
}

impl CoreError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Validation error for a batch exceeding the operation-count limit.
    pub fn batch_too_many(count: usize, limit: usize) -> Self {
        Self::validation(format!(
            "transaction contains {count} operations, exceeding the limit of {limit}"
        ))
    }

    /// Validation error for a batch exceeding the serialized-size limit.
    pub fn batch_too_large(estimated: usize, limit: usize) -> Self {
        Self::validation(format!(
            "transaction is an estimated {estimated} bytes, exceeding the limit of {limit}"
        ))
    }
}
