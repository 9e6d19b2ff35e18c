//! Table metadata consulted by some legacy parsers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column names per table, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableMetaData {
    tables: BTreeMap<String, Vec<String>>,
}

impl TableMetaData {
    /// Creates empty metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Registers a table and its columns.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>, columns: &[&str]) -> Self {
        self.tables.insert(
            table.into(),
            columns.iter().map(|c| (*c).to_string()).collect(),
        );
        self
    }

    /// The columns of `table`, ignoring ASCII case.
    #[must_use]
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.tables
            .get(table)
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(table))
                    .map(|(_, columns)| columns)
            })
            .map(Vec::as_slice)
    }

    /// Returns true if `table` is known.
    #[must_use]
    pub fn contains_table(&self, table: &str) -> bool {
        self.columns(table).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_lookup() {
        let metadata = TableMetaData::new().with_table("t_order", &["order_id", "user_id"]);
        assert_eq!(
            metadata.columns("T_Order"),
            Some(&[String::from("order_id"), String::from("user_id")][..])
        );
        assert!(!metadata.contains_table("t_user"));
    }

    #[test]
    fn test_deserialize_as_map() {
        let metadata: TableMetaData =
            serde_json::from_str(r#"{"t_user":["user_id","name"]}"#).unwrap();
        assert_eq!(metadata.columns("t_user").map(<[String]>::len), Some(2));
    }
}
