//! The driver contract the persistence core talks to.

use crate::error::StoreResult;
use crate::ops::{Condition, WriteOp};
use groundwork_value::Item;

/// An opaque item store addressed by table and key.
///
/// Implementations hold tagged [`Item`]s and know nothing about domain
/// entities. All methods take `&self`; drivers are expected to be shared
/// behind an `Arc` and handle their own synchronization.
///
/// `transact_write` is atomic: either every submitted operation takes
/// effect or none does. On cancellation the driver reports one
/// [`CancellationReason`](crate::CancellationReason) per operation, in
/// submission order, so callers can tell which operation failed and why.
pub trait ItemStore: Send + Sync {
    /// Reads the item at `key`, or `None` if no item exists.
    fn get_item(&self, table: &str, key: &Item) -> StoreResult<Option<Item>>;

    /// Writes a full item, replacing any existing item with the same key.
    ///
    /// If `condition` is set and evaluates false against the current item,
    /// the write is rejected with
    /// [`StoreError::ConditionFailed`](crate::StoreError::ConditionFailed).
    fn put_item(&self, table: &str, item: Item, condition: Option<&Condition>) -> StoreResult<()>;

    /// Deletes the item at `key`, subject to an optional condition.
    ///
    /// Deleting a nonexistent item is not an error unless a condition says
    /// otherwise.
    fn delete_item(&self, table: &str, key: &Item, condition: Option<&Condition>)
        -> StoreResult<()>;

    /// Applies all operations atomically, or none of them.
    fn transact_write(&self, ops: &[WriteOp]) -> StoreResult<()>;
}
