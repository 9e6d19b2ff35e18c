//! DELETE sub-factory.

use crate::ast::{DeleteStatement, SqlStatement};
use crate::dialect::{DatabaseType, PostgreSqlKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{at_clause_boundary, expect_end, expect_keyword, parse_table_ref, skip_until};
use super::guard::RETURNING;
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses the rest of a DELETE whose keyword the router consumed.
///
/// `FROM` is required by PostgreSQL and optional elsewhere.
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
        expect_keyword(stream, DefaultKeyword::From)?;
        stream.skip_if(Keyword::PostgreSql(PostgreSqlKeyword::Only));
    } else {
        stream.skip_if(DefaultKeyword::From);
    }
    let table = parse_table_ref(stream)?;

    let has_where = stream.skip_if(DefaultKeyword::Where);
    if has_where {
        skip_until(stream, at_clause_boundary)?;
    }

    if database_type == DatabaseType::PostgreSql {
        RETURNING.check(stream)?;
    }
    expect_end(stream)?;

    Ok(LegacyParser::new(
        LegacyKind::Delete,
        SqlStatement::Delete(DeleteStatement { table, has_where }),
        stream,
    ))
}
