//! The transaction coordinator.

use crate::error::{CoreError, CoreResult, FailureKind, OperationFailure};
use crate::txn::write::WriteBatch;
use groundwork_store::{CancellationReason, ItemStore, StoreError, WriteOp};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Maximum number of operations the store accepts in one transaction.
pub const MAX_TRANSACTION_OPERATIONS: usize = 100;

/// Maximum estimated serialized size of one transaction, in bytes.
pub const MAX_TRANSACTION_BYTES: usize = 4 * 1024 * 1024;

/// Submits [`WriteBatch`]es as atomic multi-item writes.
///
/// The coordinator validates batches against the store's limits before any
/// driver call, and is the single place driver errors are translated into
/// the core's failure taxonomy. It never retries.
pub struct TransactionCoordinator {
    store: Arc<dyn ItemStore>,
}

impl TransactionCoordinator {
    /// Creates a coordinator over the given driver.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Commits the batch atomically, or nothing at all.
    ///
    /// An empty batch is a no-op. Oversized batches fail locally with
    /// [`CoreError::Validation`] before any store call, because a
    /// store-side rejection of an oversized batch cannot be decomposed
    /// into a useful per-item diagnostic.
    pub fn execute(&self, batch: WriteBatch) -> CoreResult<()> {
        if batch.is_empty() {
            debug!("no writes to execute in transaction");
            return Ok(());
        }

        if batch.len() > MAX_TRANSACTION_OPERATIONS {
            return Err(CoreError::batch_too_many(
                batch.len(),
                MAX_TRANSACTION_OPERATIONS,
            ));
        }
        let estimated = batch.estimated_size();
        if estimated > MAX_TRANSACTION_BYTES {
            return Err(CoreError::batch_too_large(estimated, MAX_TRANSACTION_BYTES));
        }

        let mut listing = format!("executing transaction with {} operations:", batch.len());
        for (i, write) in batch.iter().enumerate() {
            let _ = write!(listing, "\n  {}. {}", i + 1, write.description());
        }
        info!("{listing}");

        let ops: Vec<WriteOp> = batch.iter().map(|w| w.op().clone()).collect();
        match self.store.transact_write(&ops) {
            Ok(()) => {
                info!(operations = batch.len(), "transaction committed");
                Ok(())
            }
            Err(StoreError::TransactionCanceled { reasons }) => {
                Err(self.cancellation_error(reasons, &batch))
            }
            Err(source @ StoreError::ThroughputExceeded { .. }) => {
                error!("transaction failed: throughput exceeded");
                Err(CoreError::TransactionFailed {
                    kind: FailureKind::ThroughputExceeded,
                    message: "transaction failed due to insufficient throughput; \
                              consider increasing capacity or retrying with backoff"
                        .to_string(),
                    failures: Vec::new(),
                    source,
                })
            }
            Err(source @ StoreError::ResourceNotFound { .. }) => {
                error!("transaction failed: table not found");
                Err(CoreError::TransactionFailed {
                    kind: FailureKind::ResourceNotFound,
                    message: "transaction failed because one or more tables do not exist"
                        .to_string(),
                    failures: Vec::new(),
                    source,
                })
            }
            Err(source) => {
                error!(error = %source, "transaction failed");
                Err(CoreError::TransactionFailed {
                    kind: FailureKind::Unknown,
                    message: format!("transaction failed: {source}"),
                    failures: Vec::new(),
                    source,
                })
            }
        }
    }

    /// Pairs per-operation cancellation reasons with the originating
    /// writes' descriptions and classifies the primary cause.
    fn cancellation_error(
        &self,
        reasons: Vec<CancellationReason>,
        batch: &WriteBatch,
    ) -> CoreError {
        let mut failures = Vec::new();
        let mut message = String::from("transaction cancelled; reasons:");

        for (index, reason) in reasons.iter().enumerate() {
            if reason.is_trivial() {
                continue;
            }
            let code = reason.code.as_deref().unwrap_or("Unknown");
            let detail = reason.message.as_deref().unwrap_or("no detail");
            let description = batch
                .get(index)
                .map(|w| w.description().to_string())
                .unwrap_or_else(|| "unknown operation".to_string());

            let _ = write!(
                message,
                "\n  operation {} ({}): {} - {}",
                index + 1,
                description,
                code,
                detail
            );
            failures.push(OperationFailure {
                index,
                description,
                kind: classify(code),
                message: reason.message.clone(),
            });
        }

        let kind = primary_kind(&failures);
        match kind {
            FailureKind::ConditionalCheckFailed => {
                let _ = write!(
                    message,
                    "\none or more conditional checks failed; the expected state was \
                     not met or the data was modified by another process"
                );
            }
            FailureKind::TransactionConflict => {
                let _ = write!(
                    message,
                    "\nanother transaction was modifying the same items; \
                     retry with exponential backoff"
                );
            }
            _ => {}
        }

        error!("{message}");
        CoreError::TransactionFailed {
            kind,
            message,
            failures,
            source: StoreError::TransactionCanceled { reasons },
        }
    }
}

/// Maps a driver reason code to the core's failure taxonomy.
fn classify(code: &str) -> FailureKind {
    match code {
        "ConditionalCheckFailed" => FailureKind::ConditionalCheckFailed,
        "TransactionConflict" => FailureKind::TransactionConflict,
        "ThroughputExceeded" | "ProvisionedThroughputExceeded" => {
            FailureKind::ThroughputExceeded
        }
        _ => FailureKind::Unknown,
    }
}

/// Picks the most actionable cause when several operations failed.
fn primary_kind(failures: &[OperationFailure]) -> FailureKind {
    for kind in [
        FailureKind::ConditionalCheckFailed,
        FailureKind::TransactionConflict,
        FailureKind::ThroughputExceeded,
    ] {
        if failures.iter().any(|f| f.kind == kind) {
            return kind;
        }
    }
    FailureKind::Unknown
}
