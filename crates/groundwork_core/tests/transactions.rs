//! End-to-end coordinator behavior against the in-memory driver, plus
//! failure classification against a scripted driver.

use groundwork_core::repository::tables;
use groundwork_core::txn::{
    TransactionCoordinator, WriteBatch, MAX_TRANSACTION_OPERATIONS,
};
use groundwork_core::{CoreError, FailureKind};
use groundwork_store::{
    CancellationReason, Condition, InMemoryStore, ItemStore, StoreError, StoreResult, WriteOp,
};
use groundwork_value::{Item, Value};
use std::sync::Arc;

fn item(id: &str, name: &str) -> Item {
    let mut item = Item::new();
    item.insert("id", Value::Text(id.into()));
    item.insert("name", Value::Text(name.into()));
    item
}

#[test]
fn empty_batch_is_a_no_op_without_driver_calls() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    let coordinator = TransactionCoordinator::new(store.clone());

    coordinator.execute(WriteBatch::new()).unwrap();
    assert_eq!(store.transact_write_calls(), 0);
}

#[test]
fn violated_condition_leaves_state_unchanged_and_names_the_write() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    store
        .put_item(tables::STACKS, item("s-3", "existing"), None)
        .unwrap();
    let coordinator = TransactionCoordinator::new(store.clone());

    let mut batch = WriteBatch::new();
    batch
        .put(tables::STACKS, item("s-1", "orders"), "save stack: orders")
        .put(tables::STACKS, item("s-2", "billing"), "save stack: billing")
        .put_if(
            tables::STACKS,
            item("s-3", "shipping"),
            Condition::attribute_not_exists("id"),
            "create stack: shipping",
        );

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed {
            kind,
            message,
            failures,
            ..
        } => {
            assert_eq!(kind, FailureKind::ConditionalCheckFailed);
            assert!(message.contains("create stack: shipping"));
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].index, 2);
            assert_eq!(failures[0].description, "create stack: shipping");
            assert_eq!(failures[0].kind, FailureKind::ConditionalCheckFailed);
        }
        other => panic!("expected transaction failure, got {other}"),
    }

    // None of the three writes took effect, including the two valid ones.
    assert_eq!(store.item_count(tables::STACKS).unwrap(), 1);
    let key = Item::key("id", Value::Text("s-3".into()));
    let untouched = store.get_item(tables::STACKS, &key).unwrap().unwrap();
    assert_eq!(untouched.get("name").and_then(Value::as_text), Some("existing"));
}

#[test]
fn oversized_batch_fails_locally_before_any_driver_call() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    let coordinator = TransactionCoordinator::new(store.clone());

    let mut batch = WriteBatch::new();
    for i in 0..(MAX_TRANSACTION_OPERATIONS + 1) {
        batch.put(
            tables::STACKS,
            item(&format!("s-{i}"), "stack"),
            format!("save stack {i}"),
        );
    }

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::Validation { message } => {
            assert!(message.contains("101"));
            assert!(message.contains("100"));
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert_eq!(store.transact_write_calls(), 0);
}

#[test]
fn overweight_batch_fails_locally_with_a_size_message() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    let coordinator = TransactionCoordinator::new(store.clone());

    let mut heavy = item("s-1", "stack");
    heavy.insert("blob", Value::Text("x".repeat(5 * 1024 * 1024)));

    let mut batch = WriteBatch::new();
    batch.put(tables::STACKS, heavy, "save oversized stack");

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::Validation { message } => assert!(message.contains("bytes")),
        other => panic!("expected validation error, got {other}"),
    }
    assert_eq!(store.transact_write_calls(), 0);
}

#[test]
fn cancellation_reasons_pair_with_descriptions_by_index() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    store
        .put_item(tables::TEAMS, item("t-1", "platform"), None)
        .unwrap();
    let coordinator = TransactionCoordinator::new(store);

    let mut batch = WriteBatch::new();
    batch
        .put(tables::STACKS, item("s-1", "orders"), "save stack: orders")
        .put_if(
            tables::TEAMS,
            item("t-1", "platform"),
            Condition::attribute_not_exists("id"),
            "create team: platform",
        );

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed {
            message, failures, ..
        } => {
            // The first (passing) operation is not reported; the second is,
            // by its own description and one-based position.
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].index, 1);
            assert!(message.contains("operation 2 (create team: platform)"));
            assert!(!message.contains("save stack: orders"));
        }
        other => panic!("expected transaction failure, got {other}"),
    }
}

#[test]
fn update_and_conditional_delete_commit_together() {
    let store = Arc::new(InMemoryStore::with_tables(tables::ALL));
    store
        .put_item(tables::STACKS, item("s-1", "orders"), None)
        .unwrap();
    store
        .put_item(tables::STACKS, item("s-2", "billing"), None)
        .unwrap();
    let coordinator = TransactionCoordinator::new(store.clone());

    let mut values = std::collections::BTreeMap::new();
    values.insert(":name".to_string(), Value::Text("orders-v2".into()));

    let mut batch = WriteBatch::new();
    batch
        .update(
            tables::STACKS,
            Item::key("id", Value::Text("s-1".into())),
            groundwork_store::UpdateExpression::new("SET name = :name", values),
            "rename stack: orders",
        )
        .delete_if(
            tables::STACKS,
            Item::key("id", Value::Text("s-2".into())),
            Condition::attribute_exists("id"),
            "delete stack: billing",
        );
    coordinator.execute(batch).unwrap();

    let key = Item::key("id", Value::Text("s-1".into()));
    let renamed = store.get_item(tables::STACKS, &key).unwrap().unwrap();
    assert_eq!(renamed.get("name").and_then(Value::as_text), Some("orders-v2"));
    assert_eq!(store.item_count(tables::STACKS).unwrap(), 1);
}

/// Driver scripted to fail `transact_write` with a fixed error, for
/// exercising classification paths the in-memory driver never produces.
struct FailingStore {
    error: std::sync::Mutex<Option<StoreError>>,
}

impl FailingStore {
    fn with(error: StoreError) -> Arc<Self> {
        Arc::new(Self {
            error: std::sync::Mutex::new(Some(error)),
        })
    }
}

impl ItemStore for FailingStore {
    fn get_item(&self, _table: &str, _key: &Item) -> StoreResult<Option<Item>> {
        Ok(None)
    }

    fn put_item(&self, _table: &str, _item: Item, _condition: Option<&Condition>) -> StoreResult<()> {
        Ok(())
    }

    fn delete_item(
        &self,
        _table: &str,
        _key: &Item,
        _condition: Option<&Condition>,
    ) -> StoreResult<()> {
        Ok(())
    }

    fn transact_write(&self, _ops: &[WriteOp]) -> StoreResult<()> {
        let error = self.error.lock().unwrap().take();
        Err(error.unwrap_or_else(|| StoreError::other("script exhausted")))
    }
}

#[test]
fn conflict_reasons_classify_as_transaction_conflict() {
    let store = FailingStore::with(StoreError::TransactionCanceled {
        reasons: vec![
            CancellationReason::none(),
            CancellationReason::with_code("TransactionConflict", "concurrent writer"),
        ],
    });
    let coordinator = TransactionCoordinator::new(store);

    let mut batch = WriteBatch::new();
    batch
        .put(tables::STACKS, item("s-1", "orders"), "save stack: orders")
        .put(tables::TEAMS, item("t-1", "platform"), "save team: platform");

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed { kind, message, .. } => {
            assert_eq!(kind, FailureKind::TransactionConflict);
            assert!(message.contains("exponential backoff"));
        }
        other => panic!("expected transaction failure, got {other}"),
    }
}

#[test]
fn throughput_errors_classify_without_per_operation_breakdown() {
    let store = FailingStore::with(StoreError::throughput_exceeded("rate limited"));
    let coordinator = TransactionCoordinator::new(store);

    let mut batch = WriteBatch::new();
    batch.put(tables::STACKS, item("s-1", "orders"), "save stack: orders");

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed { kind, failures, .. } => {
            assert_eq!(kind, FailureKind::ThroughputExceeded);
            assert!(failures.is_empty());
        }
        other => panic!("expected transaction failure, got {other}"),
    }
}

#[test]
fn missing_table_classifies_as_resource_not_found() {
    let store = FailingStore::with(StoreError::resource_not_found("gw_unknown"));
    let coordinator = TransactionCoordinator::new(store);

    let mut batch = WriteBatch::new();
    batch.put("gw_unknown", item("x", "x"), "save into missing table");

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed { kind, .. } => {
            assert_eq!(kind, FailureKind::ResourceNotFound);
        }
        other => panic!("expected transaction failure, got {other}"),
    }
}

#[test]
fn unrecognized_reason_codes_classify_as_unknown() {
    let store = FailingStore::with(StoreError::TransactionCanceled {
        reasons: vec![CancellationReason::with_code(
            "ValidationError",
            "item too large",
        )],
    });
    let coordinator = TransactionCoordinator::new(store);

    let mut batch = WriteBatch::new();
    batch.put(tables::STACKS, item("s-1", "orders"), "save stack: orders");

    let err = coordinator.execute(batch).unwrap_err();
    match err {
        CoreError::TransactionFailed { kind, failures, .. } => {
            assert_eq!(kind, FailureKind::Unknown);
            assert_eq!(failures[0].kind, FailureKind::Unknown);
        }
        other => panic!("expected transaction failure, got {other}"),
    }
}
