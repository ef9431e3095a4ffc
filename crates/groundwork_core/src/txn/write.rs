//! Write descriptors and the batch builder.

use groundwork_store::{Condition, UpdateExpression, WriteOp};
use groundwork_value::Item;

/// One queued write: the driver-level operation plus a mandatory
/// description used in failure diagnostics.
///
/// The description is diagnostic only; it never reaches the store.
#[derive(Debug, Clone)]
pub struct TransactionWrite {
    op: WriteOp,
    description: String,
}

impl TransactionWrite {
    /// An unconditional put of a full item.
    pub fn put(table: impl Into<String>, item: Item, description: impl Into<String>) -> Self {
        Self {
            op: WriteOp::Put {
                table: table.into(),
                item,
                condition: None,
            },
            description: description.into(),
        }
    }

    /// A put guarded by a precondition.
    pub fn put_if(
        table: impl Into<String>,
        item: Item,
        condition: Condition,
        description: impl Into<String>,
    ) -> Self {
        Self {
            op: WriteOp::Put {
                table: table.into(),
                item,
                condition: Some(condition),
            },
            description: description.into(),
        }
    }

    /// An update expression applied to the item at `key`.
    pub fn update(
        table: impl Into<String>,
        key: Item,
        update: UpdateExpression,
        description: impl Into<String>,
    ) -> Self {
        Self {
            op: WriteOp::Update {
                table: table.into(),
                key,
                update,
                condition: None,
            },
            description: description.into(),
        }
    }

    /// An unconditional delete of the item at `key`.
    pub fn delete(table: impl Into<String>, key: Item, description: impl Into<String>) -> Self {
        Self {
            op: WriteOp::Delete {
                table: table.into(),
                key,
                condition: None,
            },
            description: description.into(),
        }
    }

    /// A delete guarded by a precondition.
    pub fn delete_if(
        table: impl Into<String>,
        key: Item,
        condition: Condition,
        description: impl Into<String>,
    ) -> Self {
        Self {
            op: WriteOp::Delete {
                table: table.into(),
                key,
                condition: Some(condition),
            },
            description: description.into(),
        }
    }

    /// The driver-level operation.
    pub fn op(&self) -> &WriteOp {
        &self.op
    }

    /// The diagnostic description given when the write was queued.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// An ordered collection of writes to commit atomically.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    writes: Vec<TransactionWrite>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a prepared write.
    pub fn push(&mut self, write: TransactionWrite) -> &mut Self {
        self.writes.push(write);
        self
    }

    /// Appends an unconditional put.
    pub fn put(
        &mut self,
        table: impl Into<String>,
        item: Item,
        description: impl Into<String>,
    ) -> &mut Self {
        self.push(TransactionWrite::put(table, item, description))
    }

    /// Appends a conditional put.
    pub fn put_if(
        &mut self,
        table: impl Into<String>,
        item: Item,
        condition: Condition,
        description: impl Into<String>,
    ) -> &mut Self {
        self.push(TransactionWrite::put_if(table, item, condition, description))
    }

    /// Appends an update.
    pub fn update(
        &mut self,
        table: impl Into<String>,
        key: Item,
        update: UpdateExpression,
        description: impl Into<String>,
    ) -> &mut Self {
        self.push(TransactionWrite::update(table, key, update, description))
    }

    /// Appends an unconditional delete.
    pub fn delete(
        &mut self,
        table: impl Into<String>,
        key: Item,
        description: impl Into<String>,
    ) -> &mut Self {
        self.push(TransactionWrite::delete(table, key, description))
    }

    /// Appends a conditional delete.
    pub fn delete_if(
        &mut self,
        table: impl Into<String>,
        key: Item,
        condition: Condition,
        description: impl Into<String>,
    ) -> &mut Self {
        self.push(TransactionWrite::delete_if(table, key, condition, description))
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if no writes are queued.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Rough serialized size of the whole batch in bytes.
    pub fn estimated_size(&self) -> usize {
        self.writes.iter().map(|w| w.op.estimated_size()).sum()
    }

    /// Iterates over queued writes in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, TransactionWrite> {
        self.writes.iter()
    }

    /// Looks up a queued write by its position in the batch.
    pub fn get(&self, index: usize) -> Option<&TransactionWrite> {
        self.writes.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundwork_value::Value;

    #[test]
    fn batch_preserves_order_and_descriptions() {
        let mut batch = WriteBatch::new();
        batch
            .put("gw_stacks", Item::key("id", Value::Text("a".into())), "create stack a")
            .delete("gw_stacks", Item::key("id", Value::Text("b".into())), "remove stack b");

        assert_eq!(batch.len(), 2);
        let descriptions: Vec<_> = batch.iter().map(TransactionWrite::description).collect();
        assert_eq!(descriptions, ["create stack a", "remove stack b"]);
    }

    #[test]
    fn estimated_size_grows_with_content() {
        let mut small = WriteBatch::new();
        small.put("t", Item::key("id", Value::Text("a".into())), "x");

        let mut big = WriteBatch::new();
        let mut item = Item::key("id", Value::Text("a".into()));
        item.insert("blob", Value::Text("x".repeat(1024)));
        big.put("t", item, "x");

        assert!(big.estimated_size() > small.estimated_size());
    }
}
