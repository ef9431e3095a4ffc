//! In-memory reference driver.
//!
//! Backs the persistence core's tests. Tables are plain hash maps guarded
//! by a single lock, and conditions are evaluated against the subset of the
//! condition grammar the core actually emits: `attribute_exists(f)`,
//! `attribute_not_exists(f)`, `f = :var`, and `OR`-joined combinations of
//! those.

use crate::driver::ItemStore;
use crate::error::{CancellationReason, StoreError, StoreResult};
use crate::ops::{Condition, UpdateExpression, WriteOp};
use groundwork_value::{Item, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

type Table = HashMap<String, Item>;

/// An in-memory [`ItemStore`].
///
/// Tables must be provisioned up front with [`InMemoryStore::with_tables`];
/// touching an unprovisioned table fails with
/// [`StoreError::ResourceNotFound`], matching how a real driver reports a
/// missing table.
pub struct InMemoryStore {
    tables: RwLock<HashMap<String, Table>>,
    key_attribute: String,
    transact_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Creates a store with the given tables provisioned, keyed on `id`.
    pub fn with_tables(names: &[&str]) -> Self {
        let tables = names
            .iter()
            .map(|name| ((*name).to_string(), Table::new()))
            .collect();
        Self {
            tables: RwLock::new(tables),
            key_attribute: "id".to_string(),
            transact_calls: AtomicUsize::new(0),
        }
    }

    /// Overrides the key attribute (default `id`).
    pub fn with_key_attribute(mut self, field: impl Into<String>) -> Self {
        self.key_attribute = field.into();
        self
    }

    /// Number of `transact_write` calls that reached this driver.
    ///
    /// Lets tests assert that pre-flight validation rejected a batch before
    /// any I/O happened.
    pub fn transact_write_calls(&self) -> usize {
        self.transact_calls.load(Ordering::SeqCst)
    }

    /// Number of items currently stored in `table`.
    pub fn item_count(&self, table: &str) -> StoreResult<usize> {
        let tables = self.tables.read();
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::resource_not_found(table))?;
        Ok(rows.len())
    }

    fn fingerprint(key: &Item) -> String {
        // Items are ordered maps, so the debug rendering is deterministic.
        format!("{key:?}")
    }

    fn key_of(&self, item: &Item) -> StoreResult<Item> {
        let value = item.get(&self.key_attribute).ok_or_else(|| {
            StoreError::other(format!(
                "item is missing the key attribute {:?}",
                self.key_attribute
            ))
        })?;
        Ok(Item::key(self.key_attribute.clone(), value.clone()))
    }
}

/// Evaluates a condition against the current state of the addressed item.
fn evaluate_condition(condition: &Condition, current: Option<&Item>) -> StoreResult<bool> {
    for clause in condition.expression.split(" OR ") {
        if evaluate_clause(clause.trim(), &condition.values, current)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn evaluate_clause(
    clause: &str,
    values: &std::collections::BTreeMap<String, Value>,
    current: Option<&Item>,
) -> StoreResult<bool> {
    if let Some(field) = clause
        .strip_prefix("attribute_not_exists(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Ok(!current.is_some_and(|item| item.contains_key(field)));
    }
    if let Some(field) = clause
        .strip_prefix("attribute_exists(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Ok(current.is_some_and(|item| item.contains_key(field)));
    }
    if let Some((field, placeholder)) = clause.split_once(" = ") {
        let expected = values.get(placeholder).ok_or_else(|| {
            StoreError::other(format!("unbound condition placeholder {placeholder:?}"))
        })?;
        return Ok(current
            .and_then(|item| item.get(field.trim()))
            .is_some_and(|actual| actual == expected));
    }
    Err(StoreError::other(format!(
        "unsupported condition clause {clause:?}"
    )))
}

/// Applies a `SET`-style update expression to an item.
fn apply_update(item: &mut Item, update: &UpdateExpression) -> StoreResult<()> {
    let assignments = update.expression.strip_prefix("SET ").ok_or_else(|| {
        StoreError::other(format!(
            "unsupported update expression {:?}",
            update.expression
        ))
    })?;
    for assignment in assignments.split(',') {
        let (field, placeholder) = assignment.trim().split_once(" = ").ok_or_else(|| {
            StoreError::other(format!("malformed assignment {assignment:?}"))
        })?;
        let value = update.values.get(placeholder).ok_or_else(|| {
            StoreError::other(format!("unbound update placeholder {placeholder:?}"))
        })?;
        item.insert(field.trim(), value.clone());
    }
    Ok(())
}

impl ItemStore for InMemoryStore {
    fn get_item(&self, table: &str, key: &Item) -> StoreResult<Option<Item>> {
        let tables = self.tables.read();
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::resource_not_found(table))?;
        Ok(rows.get(&Self::fingerprint(key)).cloned())
    }

    fn put_item(&self, table: &str, item: Item, condition: Option<&Condition>) -> StoreResult<()> {
        let key = self.key_of(&item)?;
        let mut tables = self.tables.write();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::resource_not_found(table))?;
        let fingerprint = Self::fingerprint(&key);
        if let Some(condition) = condition {
            if !evaluate_condition(condition, rows.get(&fingerprint))? {
                return Err(StoreError::condition_failed(condition.expression.clone()));
            }
        }
        rows.insert(fingerprint, item);
        Ok(())
    }

    fn delete_item(
        &self,
        table: &str,
        key: &Item,
        condition: Option<&Condition>,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::resource_not_found(table))?;
        let fingerprint = Self::fingerprint(key);
        if let Some(condition) = condition {
            if !evaluate_condition(condition, rows.get(&fingerprint))? {
                return Err(StoreError::condition_failed(condition.expression.clone()));
            }
        }
        rows.remove(&fingerprint);
        Ok(())
    }

    fn transact_write(&self, ops: &[WriteOp]) -> StoreResult<()> {
        self.transact_calls.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.write();

        // Validation pass: check every table, condition and update
        // expression before touching anything, collecting one reason per
        // operation in submission order.
        let mut reasons = Vec::with_capacity(ops.len());
        let mut failed = false;
        for op in ops {
            let rows = tables
                .get(op.table())
                .ok_or_else(|| StoreError::resource_not_found(op.table()))?;
            let (current, condition) = match op {
                WriteOp::Put {
                    item, condition, ..
                } => {
                    let key = self.key_of(item)?;
                    (rows.get(&Self::fingerprint(&key)), condition)
                }
                WriteOp::Update {
                    key,
                    update,
                    condition,
                    ..
                } => {
                    let current = rows.get(&Self::fingerprint(key));
                    // Dry-run the update against a scratch copy so a
                    // malformed expression fails here, before any mutation.
                    let mut scratch = current.cloned().unwrap_or_else(|| key.clone());
                    apply_update(&mut scratch, update)?;
                    (current, condition)
                }
                WriteOp::Delete { key, condition, .. } => {
                    (rows.get(&Self::fingerprint(key)), condition)
                }
            };
            match condition {
                Some(condition) if !evaluate_condition(condition, current)? => {
                    failed = true;
                    reasons.push(CancellationReason::with_code(
                        "ConditionalCheckFailed",
                        format!("condition not met: {}", condition.expression),
                    ));
                }
                _ => reasons.push(CancellationReason::none()),
            }
        }
        if failed {
            return Err(StoreError::TransactionCanceled { reasons });
        }

        // Apply pass: every operation validated, so all of them take effect.
        for op in ops {
            let rows = tables
                .get_mut(op.table())
                .ok_or_else(|| StoreError::resource_not_found(op.table()))?;
            match op {
                WriteOp::Put { item, .. } => {
                    let key = self.key_of(item)?;
                    rows.insert(Self::fingerprint(&key), item.clone());
                }
                WriteOp::Update { key, update, .. } => {
                    let fingerprint = Self::fingerprint(key);
                    let mut item = rows.get(&fingerprint).cloned().unwrap_or_else(|| key.clone());
                    apply_update(&mut item, update)?;
                    rows.insert(fingerprint, item);
                }
                WriteOp::Delete { key, .. } => {
                    rows.remove(&Self::fingerprint(key));
                }
            }
        }
        Ok(())
    }
}
