//! Keywords shared by every dialect, and the two-level keyword tag.
//!
//! A [`Keyword`] records which table a reserved word came from. The same
//! lexeme may live in two dialect tables (`SHOW` is reserved by both MySQL
//! and PostgreSQL) and the two tags stay distinct, which is what lets the
//! router treat PostgreSQL's `SHOW` differently from MySQL's.

use std::fmt;

use serde::Serialize;

use crate::category::StatementCategory;
use crate::dialect::{H2Keyword, MySqlKeyword, OracleKeyword, PostgreSqlKeyword, SqlServerKeyword};

/// Keywords reserved by every supported dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefaultKeyword {
    // Queries
    Select,
    From,
    Where,
    Group,
    Order,
    By,
    Having,
    Limit,
    Offset,
    Fetch,
    For,
    Distinct,
    All,
    As,
    With,

    // Predicates
    And,
    Or,
    Not,
    In,
    Is,
    Null,
    Like,
    Between,
    Exists,
    Case,
    When,
    Then,
    Else,
    End,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,

    // Set operations
    Union,
    Intersect,
    Except,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Data definition
    Create,
    Alter,
    Drop,
    Truncate,
    Rename,
    Table,
    Index,
    View,
    Schema,
    Database,

    // Data control
    Grant,
    Revoke,
    Deny,
    Login,
    User,
    Role,

    // Transactions
    Begin,
    Commit,
    Rollback,
    Savepoint,
    Transaction,

    // Administration
    Use,
    Desc,
    Asc,
    Session,
    Global,
}

impl DefaultKeyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "FETCH" => Some(Self::Fetch),
            "FOR" => Some(Self::For),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "AS" => Some(Self::As),
            "WITH" => Some(Self::With),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "LIKE" => Some(Self::Like),
            "BETWEEN" => Some(Self::Between),
            "EXISTS" => Some(Self::Exists),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "ALTER" => Some(Self::Alter),
            "DROP" => Some(Self::Drop),
            "TRUNCATE" => Some(Self::Truncate),
            "RENAME" => Some(Self::Rename),
            "TABLE" => Some(Self::Table),
            "INDEX" => Some(Self::Index),
            "VIEW" => Some(Self::View),
            "SCHEMA" => Some(Self::Schema),
            "DATABASE" => Some(Self::Database),
            "GRANT" => Some(Self::Grant),
            "REVOKE" => Some(Self::Revoke),
            "DENY" => Some(Self::Deny),
            "LOGIN" => Some(Self::Login),
            "USER" => Some(Self::User),
            "ROLE" => Some(Self::Role),
            "BEGIN" => Some(Self::Begin),
            "COMMIT" => Some(Self::Commit),
            "ROLLBACK" => Some(Self::Rollback),
            "SAVEPOINT" => Some(Self::Savepoint),
            "TRANSACTION" => Some(Self::Transaction),
            "USE" => Some(Self::Use),
            "DESC" => Some(Self::Desc),
            "ASC" => Some(Self::Asc),
            "SESSION" => Some(Self::Session),
            "GLOBAL" => Some(Self::Global),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Fetch => "FETCH",
            Self::For => "FOR",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::With => "WITH",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Like => "LIKE",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Truncate => "TRUNCATE",
            Self::Rename => "RENAME",
            Self::Table => "TABLE",
            Self::Index => "INDEX",
            Self::View => "VIEW",
            Self::Schema => "SCHEMA",
            Self::Database => "DATABASE",
            Self::Grant => "GRANT",
            Self::Revoke => "REVOKE",
            Self::Deny => "DENY",
            Self::Login => "LOGIN",
            Self::User => "USER",
            Self::Role => "ROLE",
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Savepoint => "SAVEPOINT",
            Self::Transaction => "TRANSACTION",
            Self::Use => "USE",
            Self::Desc => "DESC",
            Self::Asc => "ASC",
            Self::Session => "SESSION",
            Self::Global => "GLOBAL",
        }
    }

    /// The statement category this keyword announces when it leads a
    /// statement.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Select => Some(StatementCategory::Dql),
            Self::Insert | Self::Update | Self::Delete => Some(StatementCategory::Dml),
            Self::Create | Self::Alter | Self::Drop | Self::Truncate => {
                Some(StatementCategory::Ddl)
            }
            Self::Grant | Self::Revoke | Self::Deny => Some(StatementCategory::Dcl),
            Self::Begin | Self::Commit | Self::Rollback | Self::Savepoint => {
                Some(StatementCategory::Tcl)
            }
            Self::Use | Self::Desc => Some(StatementCategory::Dal),
            Self::Set => Some(StatementCategory::Set),
            _ => None,
        }
    }
}

/// A reserved word, tagged with the keyword table it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    /// Reserved by every dialect.
    Default(DefaultKeyword),
    /// MySQL only.
    MySql(MySqlKeyword),
    /// PostgreSQL only.
    PostgreSql(PostgreSqlKeyword),
    /// Oracle only.
    Oracle(OracleKeyword),
    /// SQL Server only.
    SqlServer(SqlServerKeyword),
    /// H2 only.
    H2(H2Keyword),
}

impl Keyword {
    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default(kw) => kw.as_str(),
            Self::MySql(kw) => kw.as_str(),
            Self::PostgreSql(kw) => kw.as_str(),
            Self::Oracle(kw) => kw.as_str(),
            Self::SqlServer(kw) => kw.as_str(),
            Self::H2(kw) => kw.as_str(),
        }
    }

    /// The statement category this keyword announces when it leads a
    /// statement, if any.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Default(kw) => kw.role(),
            Self::MySql(kw) => kw.role(),
            Self::PostgreSql(kw) => kw.role(),
            Self::Oracle(kw) => kw.role(),
            Self::SqlServer(kw) => kw.role(),
            Self::H2(kw) => kw.role(),
        }
    }

    /// Returns the shared keyword, if this tag comes from the default table.
    #[must_use]
    pub const fn as_default(&self) -> Option<DefaultKeyword> {
        match self {
            Self::Default(kw) => Some(*kw),
            _ => None,
        }
    }
}

impl From<DefaultKeyword> for Keyword {
    fn from(kw: DefaultKeyword) -> Self {
        Self::Default(kw)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
