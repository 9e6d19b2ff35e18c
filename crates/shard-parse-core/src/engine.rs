//! The unified grammar engine seam.
//!
//! MySQL and H2 statements, and every transaction, definition and control
//! statement, are handed to an engine as raw text. The engine re-tokenizes
//! the text on its own; the router's cursor is not shared with it.

use tracing::debug;

use crate::ast::{SqlStatement, UnifiedStatement};
use crate::category::StatementCategory;
use crate::dialect::{DatabaseType, MySqlKeyword};
use crate::lexer::{DefaultKeyword, Keyword, Lexer, Span, Token, TokenKind};
use crate::metadata::TableMetaData;
use crate::parser::clause::is_name_keyword;
use crate::parser::ParseError;
use crate::rule::RuleSet;

/// A parser for the complete grammar of a dialect.
pub trait UnifiedEngine: Send + Sync {
    /// Parses one statement.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the statement cannot be parsed.
    fn parse(
        &self,
        database_type: DatabaseType,
        sql: &str,
        rule_set: RuleSet<'_>,
        metadata: &TableMetaData,
    ) -> Result<SqlStatement, ParseError>;
}

/// The default engine.
///
/// It recognizes statement shape only: the category, the referenced tables
/// and, for the encrypt rule set, which encrypted columns appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeEngine;

impl UnifiedEngine for ShapeEngine {
    fn parse(
        &self,
        database_type: DatabaseType,
        sql: &str,
        rule_set: RuleSet<'_>,
        _metadata: &TableMetaData,
    ) -> Result<SqlStatement, ParseError> {
        let tokens = Lexer::new(sql, database_type).tokenize();
        if let Some(token) = tokens.iter().find(|t| matches!(t.kind, TokenKind::Error(_))) {
            return Err(ParseError::new(token.kind.to_string(), token.span));
        }
        let (first, second) = match tokens.as_slice() {
            [first, second, ..] => (first, second),
            [eof] => return Err(ParseError::unexpected("statement", eof)),
            [] => return Err(ParseError::new("Empty statement", Span::default())),
        };

        let replace = database_type.dialect().replace_keyword();
        let category = if replace.is_some_and(|kw| first.is_keyword(kw)) {
            StatementCategory::Dml
        } else {
            StatementCategory::of(first, second)
        };
        let tables = referenced_tables(&tokens, sql);
        let encrypt_columns = match rule_set {
            RuleSet::Encrypt(rule) => tables
                .iter()
                .flat_map(|table| rule.encrypt_columns(table))
                .filter(|column| mentions(&tokens, column))
                .cloned()
                .collect(),
            RuleSet::Sharding(_) => Vec::new(),
        };

        debug!(
            database = %database_type,
            category = %category,
            tables = ?tables,
            rule_set = %rule_set,
            "unified engine parsed statement"
        );
        Ok(SqlStatement::Unified(UnifiedStatement {
            database_type,
            category,
            tables,
            encrypt_columns,
            rule_set: rule_set.name().to_string(),
        }))
    }
}

/// Returns true if a table name is expected after `tokens[i]`.
///
/// DESC and DESCRIBE only count when they lead the statement, and UPDATE
/// not after FOR.
fn introduces_table(tokens: &[Token], i: usize) -> bool {
    let Some(keyword) = tokens[i].as_keyword() else {
        return false;
    };
    match keyword {
        Keyword::Default(
            DefaultKeyword::From
            | DefaultKeyword::Join
            | DefaultKeyword::Into
            | DefaultKeyword::Table,
        ) => true,
        Keyword::Default(DefaultKeyword::Update) => {
            i == 0 || !tokens[i - 1].is_keyword(DefaultKeyword::For)
        }
        Keyword::Default(DefaultKeyword::Desc) | Keyword::MySql(MySqlKeyword::Describe) => i == 0,
        _ => false,
    }
}

fn name_of<'t>(token: &'t Token, sql: &'t str) -> Option<&'t str> {
    match &token.kind {
        TokenKind::Identifier(name) => Some(name),
        TokenKind::Keyword(kw) if is_name_keyword(*kw) => Some(token.span.slice(sql)),
        _ => None,
    }
}

/// Reads `[schema.]name` at `tokens[i]`, returning the name and the index
/// after it.
fn qualified_name<'t>(tokens: &'t [Token], mut i: usize, sql: &'t str) -> Option<(&'t str, usize)> {
    let mut name = name_of(tokens.get(i)?, sql)?;
    i += 1;
    while tokens.get(i).is_some_and(|t| t.kind == TokenKind::Dot) {
        match tokens.get(i + 1).and_then(|t| name_of(t, sql)) {
            Some(part) => {
                name = part;
                i += 2;
            }
            None => break,
        }
    }
    Some((name, i))
}

/// Tables named after FROM, JOIN, INTO, UPDATE, TABLE and DESC/DESCRIBE,
/// in order of first appearance. A FROM list is followed across commas.
fn referenced_tables(tokens: &[Token], sql: &str) -> Vec<String> {
    let mut tables: Vec<String> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let follows_commas = tokens[i].is_keyword(DefaultKeyword::From);
        if !introduces_table(tokens, i) {
            i += 1;
            continue;
        }
        i += 1;
        while let Some((name, next)) = qualified_name(tokens, i, sql) {
            if !tables.iter().any(|t| t.eq_ignore_ascii_case(name)) {
                tables.push(name.to_string());
            }
            i = next;
            // [AS] alias
            if tokens.get(i).is_some_and(|t| t.is_keyword(DefaultKeyword::As)) {
                i += 1;
            }
            if tokens.get(i).is_some_and(|t| t.as_identifier().is_some()) {
                i += 1;
            }
            if follows_commas && tokens.get(i).is_some_and(|t| t.kind == TokenKind::Comma) {
                i += 1;
            } else {
                break;
            }
        }
    }
    tables
}

fn mentions(tokens: &[Token], column: &str) -> bool {
    tokens
        .iter()
        .filter_map(Token::as_identifier)
        .any(|name| name.eq_ignore_ascii_case(column))
}
