//! UPDATE sub-factory.

use crate::ast::{SqlStatement, UpdateStatement};
use crate::dialect::{DatabaseType, PostgreSqlKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenKind, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{
    at_clause_boundary, at_list_boundary, expect_end, expect_keyword, expect_token,
    parse_column_name, parse_table_ref, skip_token, skip_until,
};
use super::guard::RETURNING;
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses the rest of an UPDATE whose keyword the router consumed.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedSyntax`] for PostgreSQL `RETURNING` and
/// [`ParseError::Syntax`] on malformed input.
pub fn new_instance(
    database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    if database_type == DatabaseType::PostgreSql {
        stream.skip_if(Keyword::PostgreSql(PostgreSqlKeyword::Only));
    }
    let table = parse_table_ref(stream)?;
    expect_keyword(stream, DefaultKeyword::Set)?;

    let mut assignments = Vec::new();
    loop {
        assignments.push(parse_column_name(stream)?);
        expect_token(stream, &TokenKind::Eq)?;
        skip_until(stream, at_list_boundary)?;
        if !skip_token(stream, &TokenKind::Comma) {
            break;
        }
    }

    let has_where = stream.skip_if(DefaultKeyword::Where);
    if has_where {
        skip_until(stream, at_clause_boundary)?;
    }

    if database_type == DatabaseType::PostgreSql {
        RETURNING.check(stream)?;
    }
    expect_end(stream)?;

    let update = UpdateStatement {
        table,
        assignments,
        has_where,
    };
    Ok(LegacyParser::new(
        LegacyKind::Update,
        SqlStatement::Update(update),
        stream,
    ))
}
