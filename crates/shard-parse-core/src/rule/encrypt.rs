//! Column encryption rule configuration.

use serde::{Deserialize, Serialize};

/// Encrypted columns of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptTable {
    /// Table name.
    pub table: String,
    /// Columns stored encrypted.
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Column encryption rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptRule {
    /// Tables with encrypted columns.
    #[serde(default)]
    pub tables: Vec<EncryptTable>,
}

impl EncryptRule {
    /// Creates an empty rule.
    #[must_use]
    pub const fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Declares encrypted columns for `table`.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>, columns: &[&str]) -> Self {
        self.tables.push(EncryptTable {
            table: table.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        });
        self
    }

    /// The encrypted columns of `table`, ignoring ASCII case.
    #[must_use]
    pub fn encrypt_columns(&self, table: &str) -> &[String] {
        self.tables
            .iter()
            .find(|t| t.table.eq_ignore_ascii_case(table))
            .map(|t| t.columns.as_slice())
            .unwrap_or_default()
    }

    /// Returns true if `column` of `table` is encrypted.
    #[must_use]
    pub fn is_encrypt_column(&self, table: &str, column: &str) -> bool {
        self.encrypt_columns(table)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(column))
    }
}
