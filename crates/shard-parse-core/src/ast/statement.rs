//! Statement shapes produced by the legacy parsers and the unified engine.
//!
//! These record what downstream rewriting needs to know about a statement
//! (which tables, which columns, which clauses are present), not a full
//! expression tree.

use serde::Serialize;

use crate::category::StatementCategory;
use crate::dialect::DatabaseType;

/// A table reference, optionally schema-qualified and aliased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    /// Schema or database qualifier.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates an unqualified, unaliased reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Sets the alias.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectStatement {
    /// `SELECT DISTINCT`.
    pub distinct: bool,
    /// Tables from FROM and JOIN, in order of appearance.
    pub tables: Vec<TableRef>,
    /// Number of derived tables (subqueries in FROM).
    pub derived_tables: usize,
    /// WHERE present.
    pub has_where: bool,
    /// GROUP BY present.
    pub has_group_by: bool,
    /// ORDER BY present.
    pub has_order_by: bool,
    /// LIMIT, OFFSET, FETCH or TOP present.
    pub has_limit: bool,
    /// FOR UPDATE present.
    pub for_update: bool,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertStatement {
    /// Target table.
    pub table: TableRef,
    /// Inserted columns.
    pub columns: Vec<String>,
    /// True when `columns` came from table metadata rather than the SQL.
    pub columns_from_metadata: bool,
    /// Number of VALUES rows.
    pub rows: usize,
    /// Key column the sharding rule generates, if the SQL omits it.
    pub generated_key: Option<String>,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStatement {
    /// Target table.
    pub table: TableRef,
    /// Assigned columns, in order.
    pub assignments: Vec<String>,
    /// WHERE present.
    pub has_where: bool,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatement {
    /// Target table.
    pub table: TableRef,
    /// WHERE present.
    pub has_where: bool,
}

/// `USE schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseStatement {
    /// The schema switched to.
    pub schema: String,
}

/// `DESC table` / `DESCRIBE table [column]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribeStatement {
    /// Described table.
    pub table: TableRef,
    /// Column filter.
    pub column: Option<String>,
}

/// What a MySQL `SHOW` statement asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ShowTarget {
    /// `SHOW DATABASES`.
    Databases,
    /// `SHOW [FULL] TABLES [FROM schema]`.
    Tables {
        /// `FULL` given.
        full: bool,
        /// Schema filter.
        schema: Option<String>,
    },
    /// `SHOW TABLE STATUS [FROM schema]`.
    TableStatus {
        /// Schema filter.
        schema: Option<String>,
    },
    /// `SHOW [FULL] COLUMNS|FIELDS FROM table [FROM schema]`.
    Columns {
        /// The table.
        table: TableRef,
    },
    /// `SHOW CREATE TABLE table`.
    CreateTable {
        /// The table.
        table: TableRef,
    },
    /// `SHOW INDEX|INDEXES|KEYS FROM table [FROM schema]`.
    Index {
        /// The table.
        table: TableRef,
    },
    /// Anything else, named by its first word.
    Other {
        /// The word following SHOW.
        name: String,
    },
}

/// A SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowStatement {
    /// What is shown.
    pub target: ShowTarget,
}

/// A SET statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetStatement {
    /// The first variable assigned, as written.
    pub variable: Option<String>,
}

/// A statement parsed by the unified engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedStatement {
    /// Dialect used.
    pub database_type: DatabaseType,
    /// Derived category.
    pub category: StatementCategory,
    /// Referenced tables, in order of first appearance.
    pub tables: Vec<String>,
    /// Encrypted columns referenced (encrypt rule set only).
    pub encrypt_columns: Vec<String>,
    /// Name of the rule set the statement was parsed for.
    pub rule_set: String,
}

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlStatement {
    /// SELECT.
    Select(SelectStatement),
    /// INSERT.
    Insert(InsertStatement),
    /// UPDATE.
    Update(UpdateStatement),
    /// DELETE.
    Delete(DeleteStatement),
    /// USE.
    Use(UseStatement),
    /// DESC / DESCRIBE.
    Describe(DescribeStatement),
    /// SHOW.
    Show(ShowStatement),
    /// SET.
    Set(SetStatement),
    /// Anything parsed by the unified engine.
    Unified(UnifiedStatement),
}

impl SqlStatement {
    /// Returns the statement's category.
    #[must_use]
    pub const fn category(&self) -> StatementCategory {
        match self {
            Self::Select(_) => StatementCategory::Dql,
            Self::Insert(_) | Self::Update(_) | Self::Delete(_) => StatementCategory::Dml,
            Self::Use(_) | Self::Describe(_) | Self::Show(_) => StatementCategory::Dal,
            Self::Set(_) => StatementCategory::Set,
            Self::Unified(s) => s.category,
        }
    }

    /// Names of the tables the statement touches.
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        match self {
            Self::Select(s) => s.tables.iter().map(|t| t.name.as_str()).collect(),
            Self::Insert(s) => vec![s.table.name.as_str()],
            Self::Update(s) => vec![s.table.name.as_str()],
            Self::Delete(s) => vec![s.table.name.as_str()],
            Self::Describe(s) => vec![s.table.name.as_str()],
            Self::Show(s) => match &s.target {
                ShowTarget::Columns { table }
                | ShowTarget::CreateTable { table }
                | ShowTarget::Index { table } => vec![table.name.as_str()],
                _ => vec![],
            },
            Self::Use(_) | Self::Set(_) => vec![],
            Self::Unified(s) => s.tables.iter().map(String::as_str).collect(),
        }
    }
}
