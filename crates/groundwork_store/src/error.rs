//! Error types for store drivers.

use thiserror::Error;

/// Result type for driver operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The per-operation explanation for why an atomic multi-item write did
/// not commit.
///
/// Codes are the driver's raw vocabulary (for example
/// `"ConditionalCheckFailed"` or `"TransactionConflict"`); classification
/// into the persistence core's failure taxonomy happens above this layer,
/// in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationReason {
    /// The driver's reason code, if any. The code `"None"` marks an
    /// operation that did not itself fail.
    pub code: Option<String>,
    /// Human-readable detail from the driver, if any.
    pub message: Option<String>,
}

impl CancellationReason {
    /// A reason marking an operation that did not itself fail.
    pub fn none() -> Self {
        Self {
            code: Some("None".to_string()),
            message: None,
        }
    }

    /// A reason with the given code and detail message.
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Returns true if this reason carries no actionable failure.
    pub fn is_trivial(&self) -> bool {
        match self.code.as_deref() {
            None | Some("None") => true,
            Some(_) => false,
        }
    }
}

/// Errors surfaced by an item-store driver.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A caller-supplied precondition on a single-item write was violated.
    #[error("conditional check failed: {message}")]
    ConditionFailed {
        /// Description of the violated condition.
        message: String,
    },

    /// An atomic multi-item write was cancelled; no operation took effect.
    #[error("transaction canceled ({} of {} operations failed)",
        .reasons.iter().filter(|r| !r.is_trivial()).count(),
        .reasons.len())]
    TransactionCanceled {
        /// Per-operation cancellation reasons, index-aligned with the
        /// submitted operations.
        reasons: Vec<CancellationReason>,
    },

    /// A referenced table does not exist.
    #[error("resource not found: table {table:?}")]
    ResourceNotFound {
        /// Name of the missing table.
        table: String,
    },

    /// The store rejected the request for capacity reasons.
    #[error("throughput exceeded: {message}")]
    ThroughputExceeded {
        /// Detail from the driver.
        message: String,
    },

    /// Any other driver failure.
    #[error("store error: {message}")]
    Other {
        /// Detail from the driver.
        message: String,
    },
}

impl StoreError {
    /// Creates a conditional check failure.
    pub fn condition_failed(message: impl Into<String>) -> Self {
        Self::ConditionFailed {
            message: message.into(),
        }
    }

    /// Creates a resource not found error.
    pub fn resource_not_found(table: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            table: table.into(),
        }
    }

    /// Creates a throughput exceeded error.
    pub fn throughput_exceeded(message: impl Into<String>) -> Self {
        Self::ThroughputExceeded {
            message: message.into(),
        }
    }

    /// Creates an uncategorized driver error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
