//! Statement categories and the keyword rules that derive them.
//!
//! Single-keyword categories come straight from the keyword tables'
//! roles. DDL and DCL need the second token as well: `CREATE TABLE` is
//! data definition while `CREATE USER` is data control.

use std::fmt;

use serde::Serialize;

use crate::lexer::{DefaultKeyword, Keyword, Token};

/// Category of a SQL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatementCategory {
    /// Query (SELECT).
    Dql,
    /// Data manipulation (INSERT, UPDATE, DELETE, ...).
    Dml,
    /// Data definition (CREATE TABLE, DROP INDEX, ...).
    Ddl,
    /// Data control (GRANT, REVOKE, CREATE USER, ...).
    Dcl,
    /// Transaction control (BEGIN, COMMIT, ...).
    Tcl,
    /// Administration (USE, DESCRIBE, SHOW).
    Dal,
    /// Variable assignment (SET).
    Set,
    /// No known category.
    Unsupported,
}

impl StatementCategory {
    /// Returns the conventional abbreviation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dql => "DQL",
            Self::Dml => "DML",
            Self::Ddl => "DDL",
            Self::Dcl => "DCL",
            Self::Tcl => "TCL",
            Self::Dal => "DAL",
            Self::Set => "SET",
            Self::Unsupported => "UNSUPPORTED",
        }
    }

    /// Derives the category of a statement from its first two tokens.
    ///
    /// This is the routing table's view of a statement minus the
    /// per-dialect overrides; the router itself checks the same rules one
    /// step at a time so it can stop consuming tokens early.
    #[must_use]
    pub fn of(first: &Token, second: &Token) -> Self {
        match role(first) {
            Some(category @ (Self::Dql | Self::Dml | Self::Tcl | Self::Dal)) => category,
            _ if is_dcl(first, second) => Self::Dcl,
            _ if is_ddl(first, second) => Self::Ddl,
            Some(Self::Set) => Self::Set,
            _ => Self::Unsupported,
        }
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DCL_PRIMARY: [DefaultKeyword; 4] = [
    DefaultKeyword::Create,
    DefaultKeyword::Alter,
    DefaultKeyword::Drop,
    DefaultKeyword::Rename,
];

const DCL_SECONDARY: [DefaultKeyword; 3] = [
    DefaultKeyword::Login,
    DefaultKeyword::User,
    DefaultKeyword::Role,
];

fn role(token: &Token) -> Option<StatementCategory> {
    token.as_keyword().as_ref().and_then(Keyword::role)
}

fn default_keyword(token: &Token) -> Option<DefaultKeyword> {
    token.as_keyword().as_ref().and_then(Keyword::as_default)
}

/// Returns true if `first` leads a query.
#[must_use]
pub fn is_dql(first: &Token) -> bool {
    role(first) == Some(StatementCategory::Dql)
}

/// Returns true if `first` leads a data manipulation statement.
#[must_use]
pub fn is_dml(first: &Token) -> bool {
    role(first) == Some(StatementCategory::Dml)
}

/// Returns true if `first` leads a transaction control statement.
#[must_use]
pub fn is_tcl(first: &Token) -> bool {
    role(first) == Some(StatementCategory::Tcl)
}

/// Returns true if `first` leads an administrative statement.
#[must_use]
pub fn is_dal(first: &Token) -> bool {
    role(first) == Some(StatementCategory::Dal)
}

/// Returns true for `GRANT`, `REVOKE` and `DENY`, and for
/// `CREATE`/`ALTER`/`DROP`/`RENAME` followed by `LOGIN`, `USER` or `ROLE`.
#[must_use]
pub fn is_dcl(first: &Token, second: &Token) -> bool {
    if role(first) == Some(StatementCategory::Dcl) {
        return true;
    }
    matches!(
        (default_keyword(first), default_keyword(second)),
        (Some(p), Some(s)) if DCL_PRIMARY.contains(&p) && DCL_SECONDARY.contains(&s)
    )
}

/// Returns true for `CREATE`, `ALTER`, `DROP` and `TRUNCATE` unless the
/// object is a login, user or role.
#[must_use]
pub fn is_ddl(first: &Token, second: &Token) -> bool {
    role(first) == Some(StatementCategory::Ddl)
        && !default_keyword(second).is_some_and(|s| DCL_SECONDARY.contains(&s))
}
