//! USE, DESCRIBE and SHOW sub-factories.

use crate::ast::{DescribeStatement, ShowStatement, ShowTarget, SqlStatement, TableRef, UseStatement};
use crate::dialect::{DatabaseType, MySqlKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenKind, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{expect_end, expect_keyword, expect_name, parse_qualified_name, skip_to_end};
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses `USE schema`.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] when no schema name follows.
pub fn new_use_instance(
    _database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    let schema = expect_name(stream, "schema name")?;
    expect_end(stream)?;
    Ok(LegacyParser::new(
        LegacyKind::Use,
        SqlStatement::Use(UseStatement { schema }),
        stream,
    ))
}

/// Parses `DESC table [column]` and `DESCRIBE table [column]`.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] when no table name follows.
pub fn new_describe_instance(
    _database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    let table = parse_qualified_name(stream)?;
    let column = if let TokenKind::String(pattern) = &stream.peek().kind {
        let pattern = pattern.clone();
        stream.advance();
        Some(pattern)
    } else if stream.peek().ends_statement() {
        None
    } else {
        Some(expect_name(stream, "column name")?)
    };
    expect_end(stream)?;
    Ok(LegacyParser::new(
        LegacyKind::Describe,
        SqlStatement::Describe(DescribeStatement { table, column }),
        stream,
    ))
}

/// Parses a MySQL `SHOW` statement.
///
/// Known targets are recorded; anything else becomes
/// [`ShowTarget::Other`] and the rest of the statement is skipped.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] on malformed input.
pub fn new_show_instance(
    _database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    let target = parse_show_target(stream)?;
    // LIKE 'pattern' or WHERE expr
    skip_to_end(stream)?;
    expect_end(stream)?;
    Ok(LegacyParser::new(
        LegacyKind::Show,
        SqlStatement::Show(ShowStatement { target }),
        stream,
    ))
}

const fn mysql(keyword: MySqlKeyword) -> Keyword {
    Keyword::MySql(keyword)
}

fn parse_show_target(stream: &mut TokenStream<'_>) -> Result<ShowTarget, ParseError> {
    let full = stream.skip_if(DefaultKeyword::Full);
    let token = stream.peek().clone();

    if token.is_keyword(mysql(MySqlKeyword::Tables)) {
        stream.advance();
        let schema = parse_from_schema(stream)?;
        return Ok(ShowTarget::Tables { full, schema });
    }
    if token.is_keyword(mysql(MySqlKeyword::Columns)) || token.is_keyword(mysql(MySqlKeyword::Fields))
    {
        stream.advance();
        let table = parse_from_table(stream)?;
        return Ok(ShowTarget::Columns { table });
    }
    if full {
        return Err(ParseError::unexpected("TABLES, COLUMNS or FIELDS", &token));
    }

    if token.is_keyword(mysql(MySqlKeyword::Databases)) {
        stream.advance();
        return Ok(ShowTarget::Databases);
    }
    if token.is_keyword(DefaultKeyword::Table)
        && stream.peek_nth(1).is_keyword(mysql(MySqlKeyword::Status))
    {
        stream.advance();
        stream.advance();
        let schema = parse_from_schema(stream)?;
        return Ok(ShowTarget::TableStatus { schema });
    }
    if token.is_keyword(DefaultKeyword::Create) && stream.peek_nth(1).is_keyword(DefaultKeyword::Table)
    {
        stream.advance();
        stream.advance();
        let table = parse_qualified_name(stream)?;
        return Ok(ShowTarget::CreateTable { table });
    }
    if token.is_keyword(DefaultKeyword::Index)
        || token.is_keyword(mysql(MySqlKeyword::Indexes))
        || token.is_keyword(mysql(MySqlKeyword::Keys))
    {
        stream.advance();
        let table = parse_from_table(stream)?;
        return Ok(ShowTarget::Index { table });
    }

    if token.ends_statement() {
        return Err(ParseError::unexpected("SHOW target", &token));
    }
    Ok(ShowTarget::Other {
        name: stream.text(&token).to_ascii_uppercase(),
    })
}

/// Consumes FROM or IN.
fn skip_from_or_in(stream: &mut TokenStream<'_>) -> bool {
    stream.skip_if(DefaultKeyword::From) || stream.skip_if(DefaultKeyword::In)
}

/// `[FROM|IN schema]`
fn parse_from_schema(stream: &mut TokenStream<'_>) -> Result<Option<String>, ParseError> {
    if skip_from_or_in(stream) {
        expect_name(stream, "schema name").map(Some)
    } else {
        Ok(None)
    }
}

/// `FROM|IN table [FROM|IN schema]`
fn parse_from_table(stream: &mut TokenStream<'_>) -> Result<TableRef, ParseError> {
    if !skip_from_or_in(stream) {
        expect_keyword(stream, DefaultKeyword::From)?;
    }
    let mut table = parse_qualified_name(stream)?;
    if let Some(schema) = parse_from_schema(stream)? {
        table.schema = Some(schema);
    }
    Ok(table)
}
