//! Sharding rule configuration.

use serde::{Deserialize, Serialize};

/// How one logic table is spread over its data nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRule {
    /// The table name used in SQL.
    pub logic_table: String,
    /// Physical `data_source.table` nodes.
    #[serde(default)]
    pub actual_data_nodes: Vec<String>,
    /// Column whose value the middleware generates on insert.
    #[serde(default)]
    pub generate_key_column: Option<String>,
}

impl TableRule {
    /// Creates a rule for `logic_table` with no data nodes.
    #[must_use]
    pub fn new(logic_table: impl Into<String>) -> Self {
        Self {
            logic_table: logic_table.into(),
            actual_data_nodes: Vec::new(),
            generate_key_column: None,
        }
    }

    /// Adds a physical data node.
    #[must_use]
    pub fn data_node(mut self, node: impl Into<String>) -> Self {
        self.actual_data_nodes.push(node.into());
        self
    }

    /// Sets the generated key column.
    #[must_use]
    pub fn generate_key(mut self, column: impl Into<String>) -> Self {
        self.generate_key_column = Some(column.into());
        self
    }
}

/// Databases-and-tables sharding rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingRule {
    /// Per-table rules.
    #[serde(default)]
    pub tables: Vec<TableRule>,
}

impl ShardingRule {
    /// Creates an empty rule.
    #[must_use]
    pub const fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a table rule.
    #[must_use]
    pub fn table(mut self, rule: TableRule) -> Self {
        self.tables.push(rule);
        self
    }

    /// Finds the rule for a logic table, ignoring ASCII case.
    #[must_use]
    pub fn find_table_rule(&self, logic_table: &str) -> Option<&TableRule> {
        self.tables
            .iter()
            .find(|rule| rule.logic_table.eq_ignore_ascii_case(logic_table))
    }

    /// Returns true if `logic_table` is sharded.
    #[must_use]
    pub fn is_sharding_table(&self, logic_table: &str) -> bool {
        self.find_table_rule(logic_table).is_some()
    }

    /// The generated key column of `logic_table`, if it has one.
    #[must_use]
    pub fn generate_key_column(&self, logic_table: &str) -> Option<&str> {
        self.find_table_rule(logic_table)
            .and_then(|rule| rule.generate_key_column.as_deref())
    }
}
