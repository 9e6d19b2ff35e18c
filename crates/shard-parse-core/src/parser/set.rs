//! SET sub-factory.

use crate::ast::{SetStatement, SqlStatement};
use crate::dialect::DatabaseType;
use crate::lexer::{DefaultKeyword, TokenKind, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{expect_end, skip_to_end};
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses the rest of a SET statement.
///
/// Only the first variable name is recorded, as written (`@x`, `@@x`,
/// `SESSION x`, `GLOBAL x` or a plain name); the assignments are skipped.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] when nothing follows SET.
pub fn new_instance(
    _database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    let scoped = stream.peek().is_keyword(DefaultKeyword::Session)
        || stream.peek().is_keyword(DefaultKeyword::Global);
    let scope = scoped.then(|| stream.advance().clone());

    let token = stream.peek();
    if token.ends_statement() {
        return Err(ParseError::unexpected("variable name", token));
    }
    let name = match &token.kind {
        TokenKind::Variable(name) => format!("@{name}"),
        _ => stream.text(token).to_string(),
    };
    let variable = match scope {
        Some(scope) => format!("{} {name}", stream.text(&scope)),
        None => name,
    };

    skip_to_end(stream)?;
    expect_end(stream)?;
    Ok(LegacyParser::new(
        LegacyKind::Set,
        SqlStatement::Set(SetStatement {
            variable: Some(variable),
        }),
        stream,
    ))
}
