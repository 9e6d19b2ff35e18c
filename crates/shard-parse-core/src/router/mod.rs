//! The dispatch router.
//!
//! [`SqlParserFactory`] looks at the first token of a statement (and the
//! second, when the first is not enough) and decides which parser handles
//! the rest. MySQL and H2 queries and data manipulation always go to the
//! unified engine; other dialects use the legacy sub-factories for those.
//! Transaction, definition and control statements go to the unified engine
//! for every dialect.

mod decision;
mod handle;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::category::{self, StatementCategory};
use crate::dialect::{DatabaseType, MySqlKeyword, PostgreSqlKeyword};
use crate::engine::{ShapeEngine, UnifiedEngine};
use crate::lexer::{DefaultKeyword, Keyword, Token, TokenStream};
use crate::metadata::TableMetaData;
use crate::parser::{LegacyKind, ParseError};
use crate::rule::{EncryptRule, RuleSet, ShardingRule};

pub use decision::{RoutingDecision, Strategy};
pub use handle::{SqlParser, UnifiedParser};

/// Decides whether a statement whose first keyword is not conclusive is
/// a transaction control statement.
///
/// The stream is borrowed immutably; an implementation may look ahead but
/// cannot move the cursor. Closures with the same signature implement it.
pub trait AmbiguousTcl: Send + Sync {
    /// Returns true to route the statement to the unified engine as TCL.
    fn is_ambiguous(
        &self,
        database_type: DatabaseType,
        first: &Token,
        stream: &TokenStream<'_>,
    ) -> bool;
}

impl<F> AmbiguousTcl for F
where
    F: Fn(DatabaseType, &Token, &TokenStream<'_>) -> bool + Send + Sync,
{
    fn is_ambiguous(
        &self,
        database_type: DatabaseType,
        first: &Token,
        stream: &TokenStream<'_>,
    ) -> bool {
        self(database_type, first, stream)
    }
}

/// Never treats a statement as ambiguous TCL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbiguousTcl;

impl AmbiguousTcl for NoAmbiguousTcl {
    fn is_ambiguous(&self, _: DatabaseType, _: &Token, _: &TokenStream<'_>) -> bool {
        false
    }
}

/// Selects a parser for each statement.
///
/// The factory holds no per-statement state and is cheap to clone; share
/// one across threads and give each request its own [`TokenStream`].
#[derive(Clone)]
pub struct SqlParserFactory {
    engine: Arc<dyn UnifiedEngine>,
    ambiguous_tcl: Arc<dyn AmbiguousTcl>,
}

impl Default for SqlParserFactory {
    fn default() -> Self {
        Self {
            engine: Arc::new(ShapeEngine),
            ambiguous_tcl: Arc::new(NoAmbiguousTcl),
        }
    }
}

impl fmt::Debug for SqlParserFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlParserFactory").finish_non_exhaustive()
    }
}

impl SqlParserFactory {
    /// Creates a factory with the [`ShapeEngine`] and no ambiguous TCL rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the unified engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl UnifiedEngine + 'static) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Replaces the ambiguous TCL predicate.
    #[must_use]
    pub fn with_ambiguous_tcl(mut self, predicate: impl AmbiguousTcl + 'static) -> Self {
        self.ambiguous_tcl = Arc::new(predicate);
        self
    }

    /// Routes a statement for sharding-aware rewriting.
    ///
    /// Classifies the statement with [`classify`](Self::classify) and builds
    /// the selected parser with [`build`](Self::build). A legacy parser runs
    /// to completion here, so its errors surface from this call.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedSyntax`] when no parser accepts the
    /// statement or a clause guard fires, and [`ParseError::Syntax`] when a
    /// legacy parser meets malformed input.
    pub fn route<'r>(
        &'r self,
        database_type: DatabaseType,
        rule: &'r ShardingRule,
        stream: &mut TokenStream<'_>,
        metadata: &'r TableMetaData,
        sql: &'r str,
    ) -> Result<SqlParser<'r>, ParseError> {
        let decision = self.classify(database_type, stream)?;
        self.build(&decision, database_type, rule, stream, metadata, sql)
    }

    /// Routes a statement for encrypt-aware rewriting.
    ///
    /// Only databases with a unified grammar are supported; nothing is
    /// tokenized.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedDialect`] for any other database.
    pub fn route_encrypt<'r>(
        &'r self,
        database_type: DatabaseType,
        rule: &'r EncryptRule,
        metadata: &'r TableMetaData,
        sql: &'r str,
    ) -> Result<SqlParser<'r>, ParseError> {
        if !database_type.has_unified_grammar() {
            debug!(database = %database_type, "encrypt routing rejected database");
            return Err(ParseError::UnsupportedDialect(database_type));
        }
        debug!(
            database = %database_type,
            strategy = %Strategy::Unified,
            "routed statement for encryption"
        );
        Ok(SqlParser::Unified(UnifiedParser::new(
            self.engine.as_ref(),
            database_type,
            sql,
            RuleSet::Encrypt(rule),
            metadata,
        )))
    }

    /// Decides which parser handles the statement at the head of `stream`.
    ///
    /// The rules are tried in order and the first match wins. One token is
    /// consumed; the second is consumed only when it decides the route.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedSyntax`] naming the first token when
    /// no rule matches.
    pub fn classify(
        &self,
        database_type: DatabaseType,
        stream: &mut TokenStream<'_>,
    ) -> Result<RoutingDecision, ParseError> {
        let first = stream.advance().clone();
        let (strategy, category) = self
            .decide(database_type, &first, stream)
            .inspect_err(|err| {
                debug!(database = %database_type, error = %err, "no parser for statement");
            })?;
        let decision = RoutingDecision {
            strategy,
            category,
            tokens_consumed: stream.position(),
        };
        debug!(
            database = %database_type,
            category = %decision.category,
            strategy = %decision.strategy,
            tokens = decision.tokens_consumed,
            "routed statement"
        );
        Ok(decision)
    }

    /// Turns a decision into a parser.
    ///
    /// A legacy sub-factory consumes the rest of `stream`; the unified
    /// engine is deferred until [`SqlParser::parse`].
    ///
    /// # Errors
    ///
    /// Returns the legacy sub-factory's error.
    pub fn build<'r>(
        &'r self,
        decision: &RoutingDecision,
        database_type: DatabaseType,
        rule: &'r ShardingRule,
        stream: &mut TokenStream<'_>,
        metadata: &'r TableMetaData,
        sql: &'r str,
    ) -> Result<SqlParser<'r>, ParseError> {
        match decision.strategy {
            Strategy::Unified => Ok(SqlParser::Unified(UnifiedParser::new(
                self.engine.as_ref(),
                database_type,
                sql,
                RuleSet::Sharding(rule),
                metadata,
            ))),
            Strategy::Legacy(kind) => {
                kind.factory()(database_type, rule, stream, metadata).map(SqlParser::Legacy)
            }
        }
    }

    /// The decision table, with `first` already consumed.
    fn decide(
        &self,
        database_type: DatabaseType,
        first: &Token,
        stream: &mut TokenStream<'_>,
    ) -> Result<(Strategy, StatementCategory), ParseError> {
        let unified = database_type.has_unified_grammar();

        if category::is_dql(first) {
            let strategy = if unified {
                Strategy::Unified
            } else {
                Strategy::Legacy(LegacyKind::Select)
            };
            return Ok((strategy, StatementCategory::Dql));
        }

        if category::is_dml(first) {
            if unified {
                return Ok((Strategy::Unified, StatementCategory::Dml));
            }
            let kind = match first.as_keyword() {
                Some(Keyword::Default(DefaultKeyword::Insert)) => LegacyKind::Insert,
                Some(Keyword::Default(DefaultKeyword::Update)) => LegacyKind::Update,
                Some(Keyword::Default(DefaultKeyword::Delete)) => LegacyKind::Delete,
                _ => return Err(ParseError::unsupported(first)),
            };
            return Ok((Strategy::Legacy(kind), StatementCategory::Dml));
        }

        let replace = database_type.dialect().replace_keyword();
        if unified && replace.is_some_and(|kw| first.is_keyword(kw)) {
            return Ok((Strategy::Unified, StatementCategory::Dml));
        }

        if category::is_tcl(first) {
            return Ok((Strategy::Unified, StatementCategory::Tcl));
        }

        if category::is_dal(first) {
            let strategy = match first.as_keyword() {
                Some(Keyword::PostgreSql(PostgreSqlKeyword::Show)) => Strategy::Unified,
                Some(Keyword::Default(DefaultKeyword::Use)) => Strategy::Legacy(LegacyKind::Use),
                Some(
                    Keyword::Default(DefaultKeyword::Desc)
                    | Keyword::MySql(MySqlKeyword::Describe),
                ) => Strategy::Legacy(LegacyKind::Describe),
                Some(Keyword::MySql(MySqlKeyword::Show)) => Strategy::Legacy(LegacyKind::Show),
                _ => return Err(ParseError::unsupported(first)),
            };
            return Ok((strategy, StatementCategory::Dal));
        }

        let second = stream.peek().clone();
        let paired = if category::is_dcl(first, &second) {
            Some(StatementCategory::Dcl)
        } else if category::is_ddl(first, &second) {
            Some(StatementCategory::Ddl)
        } else if self.ambiguous_tcl.is_ambiguous(database_type, first, stream) {
            Some(StatementCategory::Tcl)
        } else {
            None
        };
        if let Some(category) = paired {
            stream.advance();
            return Ok((Strategy::Unified, category));
        }

        if first.is_keyword(DefaultKeyword::Set) {
            return Ok((Strategy::Legacy(LegacyKind::Set), StatementCategory::Set));
        }

        Err(ParseError::unsupported(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(database_type: DatabaseType, sql: &str) -> Result<RoutingDecision, ParseError> {
        let mut stream = TokenStream::new(sql, database_type);
        SqlParserFactory::new().classify(database_type, &mut stream)
    }

    #[test]
    fn test_single_token_rules_consume_one() {
        let cases = [
            (DatabaseType::Oracle, "SELECT 1 FROM dual", Strategy::Legacy(LegacyKind::Select)),
            (DatabaseType::SqlServer, "DELETE FROM t", Strategy::Legacy(LegacyKind::Delete)),
            (DatabaseType::H2, "REPLACE INTO t VALUES (1)", Strategy::Unified),
            (DatabaseType::Oracle, "COMMIT", Strategy::Unified),
            (DatabaseType::PostgreSql, "SHOW search_path", Strategy::Unified),
            (DatabaseType::MySql, "SHOW TABLES", Strategy::Legacy(LegacyKind::Show)),
            (DatabaseType::MySql, "DESCRIBE t", Strategy::Legacy(LegacyKind::Describe)),
            (DatabaseType::Oracle, "DESC t", Strategy::Legacy(LegacyKind::Describe)),
            (DatabaseType::SqlServer, "USE db", Strategy::Legacy(LegacyKind::Use)),
            (DatabaseType::PostgreSql, "SET x = 1", Strategy::Legacy(LegacyKind::Set)),
        ];
        for (database_type, sql, strategy) in cases {
            let decision = classify(database_type, sql).unwrap();
            assert_eq!(decision.strategy, strategy, "{database_type} {sql}");
            assert_eq!(decision.tokens_consumed, 1, "{database_type} {sql}");
        }
    }

    #[test]
    fn test_pair_rules_consume_two() {
        let cases = [
            ("GRANT SELECT ON t TO bob", StatementCategory::Dcl),
            ("CREATE USER bob", StatementCategory::Dcl),
            ("DROP ROLE admin", StatementCategory::Dcl),
            ("CREATE TABLE t (id INT)", StatementCategory::Ddl),
            ("TRUNCATE TABLE t", StatementCategory::Ddl),
        ];
        for (sql, category) in cases {
            let decision = classify(DatabaseType::Oracle, sql).unwrap();
            assert_eq!(decision.strategy, Strategy::Unified, "{sql}");
            assert_eq!(decision.category, category, "{sql}");
            assert_eq!(decision.tokens_consumed, 2, "{sql}");
        }
    }

    #[test]
    fn test_unknown_statement() {
        let mut stream = TokenStream::new("FOO BAR", DatabaseType::PostgreSql);
        let err = SqlParserFactory::new()
            .classify(DatabaseType::PostgreSql, &mut stream)
            .unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "Unsupported SQL syntax: FOO at position 0..3");
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_replace_is_unsupported_outside_mysql_and_h2() {
        let err = classify(DatabaseType::PostgreSql, "REPLACE INTO t VALUES (1)").unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_merge_is_unsupported_on_legacy_dialects() {
        let err = classify(DatabaseType::Oracle, "MERGE INTO t USING s ON (1 = 1)").unwrap_err();
        assert!(err.is_unsupported());
        let decision = classify(DatabaseType::H2, "MERGE INTO t KEY (id) VALUES (1)").unwrap();
        assert_eq!(decision.strategy, Strategy::Unified);
    }

    #[test]
    fn test_ambiguous_tcl_predicate() {
        fn implicit_transactions(
            database_type: DatabaseType,
            first: &Token,
            stream: &TokenStream<'_>,
        ) -> bool {
            database_type == DatabaseType::SqlServer
                && first.is_keyword(DefaultKeyword::Set)
                && stream.peek().as_identifier() == Some("IMPLICIT_TRANSACTIONS")
        }

        let factory = SqlParserFactory::new().with_ambiguous_tcl(implicit_transactions);
        let mut stream = TokenStream::new("SET IMPLICIT_TRANSACTIONS ON", DatabaseType::SqlServer);
        let decision = factory.classify(DatabaseType::SqlServer, &mut stream).unwrap();
        assert_eq!(decision.category, StatementCategory::Tcl);
        assert_eq!(decision.tokens_consumed, 2);

        let mut stream = TokenStream::new("SET NOCOUNT ON", DatabaseType::SqlServer);
        let decision = factory.classify(DatabaseType::SqlServer, &mut stream).unwrap();
        assert_eq!(decision.strategy, Strategy::Legacy(LegacyKind::Set));
        assert_eq!(decision.tokens_consumed, 1);
    }
}
