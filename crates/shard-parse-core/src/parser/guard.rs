//! Clause guards.
//!
//! Legacy parsers cover a common grammar subset per dialect. At each clause
//! position where a dialect extension they do not handle could start, they
//! check a guard. A guard looks ahead without consuming anything and turns a
//! match into an `UnsupportedSyntax` error; it never tries to parse the
//! extension.

use tracing::debug;

use crate::dialect::{OracleKeyword, PostgreSqlKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenStream};

use super::ParseError;

/// A named, read-only set of keyword sequences rejected at one clause
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseGuard {
    /// Human-readable clause name, used in logs.
    pub name: &'static str,
    /// Rejected sequences; any match is fatal.
    pub patterns: &'static [&'static [Keyword]],
}

impl ClauseGuard {
    /// Checks the upcoming tokens of `stream`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedSyntax`] naming the first upcoming
    /// token if any pattern matches.
    pub fn check(&self, stream: &TokenStream<'_>) -> Result<(), ParseError> {
        stream.guard(self.patterns).inspect_err(|err| {
            debug!(guard = self.name, error = %err, "clause guard rejected statement");
        })
    }
}

/// Oracle `START WITH ... CONNECT BY ...`, in either order.
pub const HIERARCHICAL_QUERY: ClauseGuard = ClauseGuard {
    name: "hierarchical query",
    patterns: &[
        &[Keyword::Oracle(OracleKeyword::Connect)],
        &[Keyword::Oracle(OracleKeyword::Start)],
    ],
};

/// `SELECT ... INTO target`.
pub const SELECT_INTO: ClauseGuard = ClauseGuard {
    name: "select into",
    patterns: &[&[Keyword::Default(DefaultKeyword::Into)]],
};

/// `UNION`, `INTERSECT` and `EXCEPT` after a select body.
pub const SELECT_SET_OPERATION: ClauseGuard = ClauseGuard {
    name: "set operation",
    patterns: &[
        &[Keyword::Default(DefaultKeyword::Union)],
        &[Keyword::Default(DefaultKeyword::Intersect)],
        &[Keyword::Default(DefaultKeyword::Except)],
    ],
};

/// Oracle's `MINUS` set operator.
pub const ORACLE_SET_OPERATION: ClauseGuard = ClauseGuard {
    name: "minus",
    patterns: &[&[Keyword::Oracle(OracleKeyword::Minus)]],
};

/// `INSERT INTO t [(columns)] SELECT ...`.
pub const INSERT_SELECT: ClauseGuard = ClauseGuard {
    name: "insert select",
    patterns: &[&[Keyword::Default(DefaultKeyword::Select)]],
};

/// PostgreSQL `RETURNING` on insert, update and delete.
pub const RETURNING: ClauseGuard = ClauseGuard {
    name: "returning",
    patterns: &[&[Keyword::PostgreSql(PostgreSqlKeyword::Returning)]],
};
