//! Legacy statement parsers.
//!
//! One hand-written sub-factory per statement kind. The router consumes the
//! leading keyword and hands the stream over; the sub-factory parses the
//! rest of the statement eagerly and checks clause guards on the way.

pub(crate) mod clause;
mod error;
pub mod guard;

pub mod dal;
pub mod delete;
pub mod insert;
pub mod select;
pub mod set;
pub mod update;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::ast::SqlStatement;
use crate::dialect::DatabaseType;
use crate::lexer::TokenStream;
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

pub use error::ParseError;
pub use guard::ClauseGuard;

/// Entry point shared by every legacy sub-factory.
pub type NewInstance = fn(
    DatabaseType,
    &ShardingRule,
    &mut TokenStream<'_>,
    &TableMetaData,
) -> Result<LegacyParser, ParseError>;

/// The statement kinds with a hand-written parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyKind {
    Select,
    Insert,
    Update,
    Delete,
    Use,
    Describe,
    Show,
    Set,
}

impl LegacyKind {
    /// Returns the kind's name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Use => "use",
            Self::Describe => "describe",
            Self::Show => "show",
            Self::Set => "set",
        }
    }

    /// The sub-factory for this kind.
    #[must_use]
    pub fn factory(self) -> NewInstance {
        match self {
            Self::Select => select::new_instance,
            Self::Insert => insert::new_instance,
            Self::Update => update::new_instance,
            Self::Delete => delete::new_instance,
            Self::Use => dal::new_use_instance,
            Self::Describe => dal::new_describe_instance,
            Self::Show => dal::new_show_instance,
            Self::Set => set::new_instance,
        }
    }
}

impl fmt::Display for LegacyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statement already parsed by a legacy sub-factory.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyParser {
    kind: LegacyKind,
    statement: SqlStatement,
}

impl LegacyParser {
    fn new(kind: LegacyKind, statement: SqlStatement, stream: &TokenStream<'_>) -> Self {
        debug!(
            kind = %kind,
            database = %stream.database_type(),
            tokens = stream.position(),
            "legacy parser consumed statement"
        );
        Self { kind, statement }
    }

    /// Which sub-factory built this parser.
    #[must_use]
    pub const fn kind(&self) -> LegacyKind {
        self.kind
    }

    /// The parsed statement.
    #[must_use]
    pub const fn statement(&self) -> &SqlStatement {
        &self.statement
    }

    /// Returns the parsed statement.
    #[must_use]
    pub fn into_statement(self) -> SqlStatement {
        self.statement
    }
}
