//! SQL dialect support.
//!
//! Each supported database has a closed entry in [`DatabaseType`] and a
//! [`Dialect`] implementation carrying its keyword table and lexical quirks.

mod h2;
mod mysql;
mod oracle;
mod postgresql;
mod sqlserver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexer::{DefaultKeyword, Keyword};

pub use h2::{H2Dialect, H2Keyword};
pub use mysql::{MySqlDialect, MySqlKeyword};
pub use oracle::{OracleDialect, OracleKeyword};
pub use postgresql::{PostgreSqlDialect, PostgreSqlKeyword};
pub use sqlserver::{SqlServerDialect, SqlServerKeyword};

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the opening identifier delimiter (`"` for standard SQL,
    /// `` ` `` for MySQL, `[` for SQL Server).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns whether `#` starts a line comment.
    fn hash_comments(&self) -> bool {
        false
    }

    /// Returns whether a backslash escapes the next character in strings.
    fn backslash_escapes(&self) -> bool {
        false
    }

    /// Looks up an upper-case lexeme in this dialect's own keyword table.
    fn dialect_keyword(&self, upper: &str) -> Option<Keyword>;

    /// Resolves a word against the shared table, then the dialect table.
    fn keyword(&self, word: &str) -> Option<Keyword> {
        let upper = word.to_ascii_uppercase();
        DefaultKeyword::from_str(&upper)
            .map(Keyword::Default)
            .or_else(|| self.dialect_keyword(&upper))
    }

    /// The keyword that starts a `REPLACE` statement, if the dialect
    /// reserves one.
    fn replace_keyword(&self) -> Option<Keyword> {
        None
    }
}

/// Supported databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// MySQL.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// Oracle.
    Oracle,
    /// Microsoft SQL Server.
    SqlServer,
    /// H2.
    H2,
}

impl DatabaseType {
    /// Every supported database type.
    pub const ALL: [Self; 5] = [
        Self::MySql,
        Self::PostgreSql,
        Self::Oracle,
        Self::SqlServer,
        Self::H2,
    ];

    /// Returns the dialect implementation for this database.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::MySql => &MySqlDialect,
            Self::PostgreSql => &PostgreSqlDialect,
            Self::Oracle => &OracleDialect,
            Self::SqlServer => &SqlServerDialect,
            Self::H2 => &H2Dialect,
        }
    }

    /// Returns true for databases whose whole grammar is handled by the
    /// unified engine (MySQL and H2).
    #[must_use]
    pub const fn has_unified_grammar(self) -> bool {
        matches!(self, Self::MySql | Self::H2)
    }

    /// Returns the product name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::Oracle => "Oracle",
            Self::SqlServer => "SQLServer",
            Self::H2 => "H2",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a database name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown database type: {0}")]
pub struct UnknownDatabaseType(pub String);

impl FromStr for DatabaseType {
    type Err = UnknownDatabaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "oracle" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "h2" => Ok(Self::H2),
            _ => Err(UnknownDatabaseType(s.to_string())),
        }
    }
}
