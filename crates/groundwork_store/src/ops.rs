//! Write-operation descriptors submitted to a driver.

use groundwork_value::{Item, Value};
use std::collections::BTreeMap;

/// A precondition on a write, expressed in the driver's condition grammar.
///
/// Named placeholders of the form `:name` are resolved from `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The condition expression text.
    pub expression: String,
    /// Placeholder bindings for the expression.
    pub values: BTreeMap<String, Value>,
}

impl Condition {
    /// Creates a condition with placeholder bindings.
    pub fn new(expression: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            expression: expression.into(),
            values,
        }
    }

    /// Creates a condition with no placeholder bindings.
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::new(expression, BTreeMap::new())
    }

    /// Condition that the given attribute already exists on the item.
    pub fn attribute_exists(field: &str) -> Self {
        Self::expression(format!("attribute_exists({field})"))
    }

    /// Condition that the given attribute does not exist on the item.
    ///
    /// Applied to the key attribute, this is the usual create-only guard.
    pub fn attribute_not_exists(field: &str) -> Self {
        Self::expression(format!("attribute_not_exists({field})"))
    }
}

/// An update to apply to an existing item, in the driver's update grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    /// The update expression text, e.g. `SET enabled = :enabled`.
    pub expression: String,
    /// Placeholder bindings for the expression.
    pub values: BTreeMap<String, Value>,
}

impl UpdateExpression {
    /// Creates an update expression with placeholder bindings.
    pub fn new(expression: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            expression: expression.into(),
            values,
        }
    }
}

/// A single write operation within an atomic multi-item request.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Write a full item, replacing any existing item with the same key.
    Put {
        /// Target table.
        table: String,
        /// The full item to write.
        item: Item,
        /// Optional precondition; violation cancels the whole request.
        condition: Option<Condition>,
    },
    /// Apply an update expression to the item at `key`.
    Update {
        /// Target table.
        table: String,
        /// Primary key of the item to update.
        key: Item,
        /// The update to apply.
        update: UpdateExpression,
        /// Optional precondition; violation cancels the whole request.
        condition: Option<Condition>,
    },
    /// Delete the item at `key`.
    Delete {
        /// Target table.
        table: String,
        /// Primary key of the item to delete.
        key: Item,
        /// Optional precondition; violation cancels the whole request.
        condition: Option<Condition>,
    },
}

impl WriteOp {
    /// Returns the operation's target table.
    pub fn table(&self) -> &str {
        match self {
            WriteOp::Put { table, .. }
            | WriteOp::Update { table, .. }
            | WriteOp::Delete { table, .. } => table,
        }
    }

    /// Rough serialized size of this operation in bytes, for the pre-flight
    /// batch size guard.
    pub fn estimated_size(&self) -> usize {
        let payload = match self {
            WriteOp::Put { item, .. } => item.estimated_size(),
            WriteOp::Update { key, update, .. } => {
                key.estimated_size()
                    + update.expression.len()
                    + update
                        .values
                        .iter()
                        .map(|(k, v)| k.len() + v.estimated_size())
                        .sum::<usize>()
            }
            WriteOp::Delete { key, .. } => key.estimated_size(),
        };
        payload + self.table().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_helpers() {
        let c = Condition::attribute_not_exists("id");
        assert_eq!(c.expression, "attribute_not_exists(id)");
        assert!(c.values.is_empty());
    }

    #[test]
    fn op_table_and_size() {
        let mut item = Item::new();
        item.insert("id", Value::Text("abc".into()));
        item.insert("name", Value::Text("orders".into()));

        let op = WriteOp::Put {
            table: "gw_stacks".to_string(),
            item,
            condition: None,
        };

        assert_eq!(op.table(), "gw_stacks");
        assert!(op.estimated_size() > "gw_stacks".len());
    }
}
