//! JSON configuration holding the rules and metadata a run is parsed with.
//!
//! Every section is optional:
//!
//! ```json
//! {
//!   "sharding": { "tables": [{ "logic_table": "t_order", "generate_key_column": "order_id" }] },
//!   "encrypt": { "tables": [{ "table": "t_user", "columns": ["pwd"] }] },
//!   "metadata": { "t_order": ["order_id", "user_id"] }
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use shard_parse_core::{EncryptRule, ShardingRule, TableMetaData};
use tracing::debug;

use crate::error::{CliError, Result};

/// Rules and metadata for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sharding rule for `route` and `parse`.
    pub sharding: ShardingRule,
    /// Encrypt rule for `--encrypt`.
    pub encrypt: EncryptRule,
    /// Column names per table.
    pub metadata: TableMetaData,
}

impl Config {
    /// Loads a config file, or returns the empty config when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadConfig`] when the file cannot be read and
    /// [`CliError::InvalidConfig`] when it does not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| CliError::InvalidConfig {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            sharding_tables = config.sharding.tables.len(),
            encrypt_tables = config.encrypt.tables.len(),
            "loaded config"
        );
        Ok(config)
    }
}
