//! Stack repository.

use crate::domain::{Stack, Team};
use crate::error::CoreResult;
use crate::mapper::{id_key, ItemMapper};
use crate::repository::{now, tables};
use crate::txn::{TransactionCoordinator, WriteBatch};
use chrono::NaiveDateTime;
use groundwork_store::{Condition, ItemStore};
use groundwork_value::scalar;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Persistence operations for [`Stack`]s.
///
/// Single-item reads and writes go straight to the driver; multi-item
/// writes and conditional writes go through the transaction coordinator.
pub struct StackRepository {
    store: Arc<dyn ItemStore>,
    coordinator: TransactionCoordinator,
}

impl StackRepository {
    /// Creates a repository over the given driver.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        let coordinator = TransactionCoordinator::new(store.clone());
        Self { store, coordinator }
    }

    /// Saves one stack, assigning identity and timestamps on first save.
    pub fn save(&self, stack: &mut Stack) -> CoreResult<()> {
        self.stamp(stack);
        let item = stack.to_item()?;
        self.store.put_item(Stack::table(), item, None)?;
        debug!(id = %stack.id, "saved stack");
        Ok(())
    }

    /// Loads a stack by id. Relationship fields come back as raw
    /// identities.
    pub fn find_by_id(&self, id: Uuid) -> CoreResult<Option<Stack>> {
        match self.store.get_item(Stack::table(), &id_key(id))? {
            Some(item) => Stack::from_item(&item),
            None => Ok(None),
        }
    }

    /// Deletes a stack by id. Deleting a nonexistent stack is a no-op.
    pub fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.store.delete_item(Stack::table(), &id_key(id), None)?;
        debug!(%id, "deleted stack");
        Ok(())
    }

    /// Saves every stack atomically: all of them or none.
    pub fn save_all(&self, stacks: &mut [Stack]) -> CoreResult<()> {
        if stacks.is_empty() {
            return Ok(());
        }
        let mut batch = WriteBatch::new();
        for stack in stacks.iter_mut() {
            self.stamp(stack);
            batch.put(
                Stack::table(),
                stack.to_item()?,
                format!("save stack: {} (id: {})", stack.name, stack.id),
            );
        }
        self.coordinator.execute(batch)
    }

    /// Deletes every stack atomically: all of them or none.
    pub fn delete_all(&self, stacks: &[Stack]) -> CoreResult<()> {
        if stacks.is_empty() {
            return Ok(());
        }
        let mut batch = WriteBatch::new();
        for stack in stacks {
            batch.delete(
                Stack::table(),
                id_key(stack.id),
                format!("delete stack: {} (id: {})", stack.name, stack.id),
            );
        }
        self.coordinator.execute(batch)
    }

    /// Saves a stack only if it has not been modified since it was read.
    ///
    /// The caller passes the `updated_at` it read; the write commits only
    /// while the stored value still matches (or the item carries no
    /// `updatedAt` yet). On a lost race the transaction fails with a
    /// conditional-check failure and nothing is written.
    pub fn save_with_optimistic_lock(
        &self,
        stack: &mut Stack,
        expected_updated_at: NaiveDateTime,
    ) -> CoreResult<()> {
        debug!(id = %stack.id, expected = %expected_updated_at, "saving stack with optimistic lock");
        stack.updated_at = now();

        let mut values = BTreeMap::new();
        values.insert(
            ":expectedUpdatedAt".to_string(),
            scalar::encode_timestamp(Some(expected_updated_at)),
        );
        let lock = Condition::new(
            "updatedAt = :expectedUpdatedAt OR attribute_not_exists(updatedAt)",
            values,
        );

        let mut batch = WriteBatch::new();
        batch.put_if(
            Stack::table(),
            stack.to_item()?,
            lock,
            format!("update stack {} with optimistic lock", stack.id),
        );
        self.coordinator.execute(batch)
    }

    /// Loads a stack together with its owning team, hydrating the `teamId`
    /// identity with a second read.
    pub fn find_with_team(&self, id: Uuid) -> CoreResult<Option<(Stack, Option<Team>)>> {
        let Some(stack) = self.find_by_id(id)? else {
            return Ok(None);
        };
        let team = match stack.team_id {
            Some(team_id) => match self.store.get_item(tables::TEAMS, &id_key(team_id))? {
                Some(item) => Team::from_item(&item)?,
                None => None,
            },
            None => None,
        };
        Ok(Some((stack, team)))
    }

    fn stamp(&self, stack: &mut Stack) {
        let ts = now();
        if stack.id.is_nil() {
            stack.id = Uuid::new_v4();
            stack.created_at = ts;
        }
        stack.updated_at = ts;
    }
}
