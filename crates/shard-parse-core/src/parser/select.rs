//! SELECT sub-factory.

use crate::ast::{SelectStatement, SqlStatement, TableRef};
use crate::dialect::{DatabaseType, SqlServerKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenKind, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{
    at_clause_boundary, at_list_boundary, expect_end, expect_keyword, parse_optional_alias,
    parse_qualified_name, skip_group, skip_to_end, skip_token, skip_until,
};
use super::guard::{HIERARCHICAL_QUERY, ORACLE_SET_OPERATION, SELECT_INTO, SELECT_SET_OPERATION};
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses the rest of a SELECT whose keyword the router consumed.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedSyntax`] when a clause guard fires and
/// [`ParseError::Syntax`] on malformed input.
pub fn new_instance(
    database_type: DatabaseType,
    _rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    _metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    let select = parse_select(database_type, stream)?;
    Ok(LegacyParser::new(
        LegacyKind::Select,
        SqlStatement::Select(select),
        stream,
    ))
}

fn parse_select(
    database_type: DatabaseType,
    stream: &mut TokenStream<'_>,
) -> Result<SelectStatement, ParseError> {
    let mut select = SelectStatement::default();

    if stream.skip_if(DefaultKeyword::Distinct) {
        select.distinct = true;
    } else {
        stream.skip_if(DefaultKeyword::All);
    }

    if database_type == DatabaseType::SqlServer
        && stream.skip_if(Keyword::SqlServer(SqlServerKeyword::Top))
    {
        if stream.peek().kind == TokenKind::LeftParen {
            skip_group(stream)?;
        } else {
            stream.advance();
        }
        stream.skip_if(Keyword::SqlServer(SqlServerKeyword::Percent));
        select.has_limit = true;
    }

    // Select list
    skip_until(stream, at_clause_boundary)?;
    SELECT_INTO.check(stream)?;

    if stream.skip_if(DefaultKeyword::From) {
        parse_from(stream, &mut select)?;
    }

    if stream.skip_if(DefaultKeyword::Where) {
        select.has_where = true;
        skip_until(stream, at_clause_boundary)?;
    }

    if database_type == DatabaseType::Oracle {
        HIERARCHICAL_QUERY.check(stream)?;
    }

    if stream.skip_if(DefaultKeyword::Group) {
        expect_keyword(stream, DefaultKeyword::By)?;
        select.has_group_by = true;
        skip_until(stream, at_clause_boundary)?;
    }

    if stream.skip_if(DefaultKeyword::Having) {
        skip_until(stream, at_clause_boundary)?;
    }

    if stream.skip_if(DefaultKeyword::Order) {
        expect_keyword(stream, DefaultKeyword::By)?;
        select.has_order_by = true;
        skip_until(stream, at_clause_boundary)?;
    }

    for keyword in [
        DefaultKeyword::Limit,
        DefaultKeyword::Offset,
        DefaultKeyword::Fetch,
    ] {
        if stream.skip_if(keyword) {
            select.has_limit = true;
            skip_until(stream, at_clause_boundary)?;
        }
    }

    SELECT_SET_OPERATION.check(stream)?;
    if database_type == DatabaseType::Oracle {
        ORACLE_SET_OPERATION.check(stream)?;
    }

    if stream.skip_if(DefaultKeyword::For) {
        expect_keyword(stream, DefaultKeyword::Update)?;
        select.for_update = true;
        skip_to_end(stream)?;
    }

    expect_end(stream)?;
    Ok(select)
}

/// Parses the FROM list: comma-separated table factors, each followed by
/// any number of joins.
fn parse_from(stream: &mut TokenStream<'_>, select: &mut SelectStatement) -> Result<(), ParseError> {
    loop {
        parse_table_factor(stream, select)?;
        while parse_join_keywords(stream)? {
            parse_table_factor(stream, select)?;
            if stream.skip_if(DefaultKeyword::On) {
                skip_until(stream, at_list_boundary)?;
            } else if stream.skip_if(DefaultKeyword::Using) {
                skip_group(stream)?;
            }
        }
        if !skip_token(stream, &TokenKind::Comma) {
            return Ok(());
        }
    }
}

fn parse_table_factor(
    stream: &mut TokenStream<'_>,
    select: &mut SelectStatement,
) -> Result<(), ParseError> {
    if stream.peek().kind == TokenKind::LeftParen {
        skip_group(stream)?;
        parse_optional_alias(stream)?;
        select.derived_tables += 1;
        return Ok(());
    }

    let mut table: TableRef = parse_qualified_name(stream)?;
    table.alias = parse_optional_alias(stream)?;

    // SQL Server table hints: WITH (NOLOCK)
    if stream.database_type() == DatabaseType::SqlServer
        && stream.peek().is_keyword(DefaultKeyword::With)
        && stream.peek_nth(1).kind == TokenKind::LeftParen
    {
        stream.advance();
        skip_group(stream)?;
    }

    select.tables.push(table);
    Ok(())
}

/// Consumes `[INNER | CROSS | LEFT|RIGHT|FULL [OUTER]] JOIN`.
///
/// Returns false, consuming nothing, when no join starts here.
fn parse_join_keywords(stream: &mut TokenStream<'_>) -> Result<bool, ParseError> {
    let Some(Keyword::Default(keyword)) = stream.peek().as_keyword() else {
        return Ok(false);
    };
    match keyword {
        DefaultKeyword::Join => {}
        DefaultKeyword::Inner | DefaultKeyword::Cross => {
            stream.advance();
        }
        DefaultKeyword::Left | DefaultKeyword::Right | DefaultKeyword::Full => {
            stream.advance();
            stream.skip_if(DefaultKeyword::Outer);
        }
        _ => return Ok(false),
    }
    expect_keyword(stream, DefaultKeyword::Join)?;
    Ok(true)
}
