//! Parser handles returned by the router.

use std::fmt;

use crate::ast::SqlStatement;
use crate::dialect::DatabaseType;
use crate::engine::UnifiedEngine;
use crate::metadata::TableMetaData;
use crate::parser::{LegacyParser, ParseError};
use crate::rule::RuleSet;

use super::Strategy;

/// A statement waiting for the unified engine.
///
/// Nothing is parsed until [`UnifiedParser::parse`]; the engine then reads
/// the full text again.
#[derive(Clone, Copy)]
pub struct UnifiedParser<'r> {
    engine: &'r dyn UnifiedEngine,
    database_type: DatabaseType,
    sql: &'r str,
    rule_set: RuleSet<'r>,
    metadata: &'r TableMetaData,
}

impl<'r> UnifiedParser<'r> {
    pub(super) fn new(
        engine: &'r dyn UnifiedEngine,
        database_type: DatabaseType,
        sql: &'r str,
        rule_set: RuleSet<'r>,
        metadata: &'r TableMetaData,
    ) -> Self {
        Self {
            engine,
            database_type,
            sql,
            rule_set,
            metadata,
        }
    }

    /// The dialect the engine will parse with.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The statement text.
    #[must_use]
    pub const fn sql(&self) -> &'r str {
        self.sql
    }

    /// The rule set the statement is parsed for.
    #[must_use]
    pub const fn rule_set(&self) -> RuleSet<'r> {
        self.rule_set
    }

    /// Runs the engine.
    ///
    /// # Errors
    ///
    /// Returns whatever the engine reports.
    pub fn parse(self) -> Result<SqlStatement, ParseError> {
        self.engine
            .parse(self.database_type, self.sql, self.rule_set, self.metadata)
    }
}

impl fmt::Debug for UnifiedParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifiedParser")
            .field("database_type", &self.database_type)
            .field("sql", &self.sql)
            .field("rule_set", &self.rule_set.name())
            .finish_non_exhaustive()
    }
}

/// The parser selected for one statement.
#[derive(Debug)]
pub enum SqlParser<'r> {
    /// Deferred to the unified engine.
    Unified(UnifiedParser<'r>),
    /// Already parsed by a legacy sub-factory.
    Legacy(LegacyParser),
}

impl SqlParser<'_> {
    /// Which strategy produced this parser.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self {
            Self::Unified(_) => Strategy::Unified,
            Self::Legacy(parser) => Strategy::Legacy(parser.kind()),
        }
    }

    /// Produces the statement.
    ///
    /// # Errors
    ///
    /// Returns the unified engine's error; a legacy parser has already
    /// succeeded and cannot fail here.
    pub fn parse(self) -> Result<SqlStatement, ParseError> {
        match self {
            Self::Unified(parser) => parser.parse(),
            Self::Legacy(parser) => Ok(parser.into_statement()),
        }
    }
}
