//! Cursor helpers shared by the legacy parsers.
//!
//! Legacy parsers only record the shape of a statement. Expressions are
//! skipped token by token with parenthesis depth tracking, and clause
//! keywords at depth zero end a skip.

use crate::ast::TableRef;
use crate::dialect::{MySqlKeyword, OracleKeyword, PostgreSqlKeyword, SqlServerKeyword};
use crate::lexer::{DefaultKeyword, Keyword, TokenKind, TokenStream};

use super::ParseError;

/// Consumes `keyword` or fails.
pub fn expect_keyword(
    stream: &mut TokenStream<'_>,
    keyword: impl Into<Keyword>,
) -> Result<(), ParseError> {
    let keyword = keyword.into();
    if stream.skip_if(keyword) {
        Ok(())
    } else {
        Err(ParseError::unexpected(keyword.as_str(), stream.peek()))
    }
}

/// Consumes a token of exactly `kind` or fails.
pub fn expect_token(stream: &mut TokenStream<'_>, kind: &TokenKind) -> Result<(), ParseError> {
    if stream.peek().kind == *kind {
        stream.advance();
        Ok(())
    } else {
        Err(ParseError::unexpected(kind.to_string(), stream.peek()))
    }
}

/// Consumes the next token if it is exactly `kind`.
pub fn skip_token(stream: &mut TokenStream<'_>, kind: &TokenKind) -> bool {
    if stream.peek().kind == *kind {
        stream.advance();
        true
    } else {
        false
    }
}

/// Keywords that still work as object names.
pub const fn is_name_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Default(
            DefaultKeyword::User
                | DefaultKeyword::Role
                | DefaultKeyword::Login
                | DefaultKeyword::Session
                | DefaultKeyword::Global
                | DefaultKeyword::Transaction
                | DefaultKeyword::View
                | DefaultKeyword::Schema
                | DefaultKeyword::Database
        ) | Keyword::MySql(
            MySqlKeyword::Status
                | MySqlKeyword::Tables
                | MySqlKeyword::Databases
                | MySqlKeyword::Columns
                | MySqlKeyword::Fields
                | MySqlKeyword::Keys
                | MySqlKeyword::Variables
                | MySqlKeyword::Autocommit
        ) | Keyword::PostgreSql(PostgreSqlKeyword::Nothing)
            | Keyword::SqlServer(SqlServerKeyword::Nolock)
    )
}

/// Consumes an object name: an identifier or a non-reserved keyword.
pub fn expect_name(stream: &mut TokenStream<'_>, expected: &str) -> Result<String, ParseError> {
    let token = stream.peek();
    let name = match &token.kind {
        TokenKind::Identifier(name) => name.clone(),
        TokenKind::Keyword(kw) if is_name_keyword(*kw) => stream.text(token).to_string(),
        _ => return Err(ParseError::unexpected(expected, token)),
    };
    stream.advance();
    Ok(name)
}

/// Parses `[schema.]name`, returning the reference without alias.
pub fn parse_qualified_name(stream: &mut TokenStream<'_>) -> Result<TableRef, ParseError> {
    let first = expect_name(stream, "table name")?;
    if skip_token(stream, &TokenKind::Dot) {
        let name = expect_name(stream, "table name")?;
        Ok(TableRef {
            schema: Some(first),
            name,
            alias: None,
        })
    } else {
        Ok(TableRef::new(first))
    }
}

/// Parses `AS alias` or a bare identifier alias.
pub fn parse_optional_alias(stream: &mut TokenStream<'_>) -> Result<Option<String>, ParseError> {
    if stream.skip_if(DefaultKeyword::As) {
        return expect_name(stream, "alias").map(Some);
    }
    match stream.peek().as_identifier() {
        Some(alias) => {
            let alias = alias.to_string();
            stream.advance();
            Ok(Some(alias))
        }
        None => Ok(None),
    }
}

/// Parses `[schema.]name [[AS] alias]`.
pub fn parse_table_ref(stream: &mut TokenStream<'_>) -> Result<TableRef, ParseError> {
    let mut table = parse_qualified_name(stream)?;
    table.alias = parse_optional_alias(stream)?;
    Ok(table)
}

/// Parses a possibly qualified column name and keeps its last part.
pub fn parse_column_name(stream: &mut TokenStream<'_>) -> Result<String, ParseError> {
    let mut name = expect_name(stream, "column name")?;
    while skip_token(stream, &TokenKind::Dot) {
        name = expect_name(stream, "column name")?;
    }
    Ok(name)
}

/// Parses `(a, b, c)`.
pub fn parse_column_list(stream: &mut TokenStream<'_>) -> Result<Vec<String>, ParseError> {
    expect_token(stream, &TokenKind::LeftParen)?;
    let mut columns = vec![parse_column_name(stream)?];
    while skip_token(stream, &TokenKind::Comma) {
        columns.push(parse_column_name(stream)?);
    }
    expect_token(stream, &TokenKind::RightParen)?;
    Ok(columns)
}

/// Skips a parenthesized group, the next token being its `(`.
pub fn skip_group(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    let open = stream.peek().clone();
    expect_token(stream, &TokenKind::LeftParen)?;
    let mut depth = 1usize;
    while depth > 0 {
        match stream.peek().kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth -= 1,
            TokenKind::Eof => return Err(ParseError::new("Unclosed parenthesis", open.span)),
            _ => {}
        }
        stream.advance();
    }
    Ok(())
}

/// Skips tokens at depth zero until `stop` holds or the statement ends.
///
/// A stray `)` also stops the skip so that the caller reports it.
pub fn skip_until(
    stream: &mut TokenStream<'_>,
    stop: impl Fn(&TokenStream<'_>) -> bool,
) -> Result<(), ParseError> {
    loop {
        let token = stream.peek();
        if token.ends_statement() || token.kind == TokenKind::RightParen || stop(stream) {
            return Ok(());
        }
        if let TokenKind::Error(message) = &token.kind {
            return Err(ParseError::new(message.clone(), token.span));
        }
        if token.kind == TokenKind::LeftParen {
            skip_group(stream)?;
        } else {
            stream.advance();
        }
    }
}

/// Skips the rest of the statement.
pub fn skip_to_end(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    skip_until(stream, |_| false)
}

/// Accepts an optional `;` and then requires the end of input.
pub fn expect_end(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    skip_token(stream, &TokenKind::Semicolon);
    if stream.is_at_end() {
        Ok(())
    } else {
        Err(ParseError::unexpected("end of statement", stream.peek()))
    }
}

/// Returns true at a keyword that starts a select clause, a join or a
/// set operation.
///
/// `LEFT (` and `RIGHT (` are function calls and do not count.
pub fn at_clause_boundary(stream: &TokenStream<'_>) -> bool {
    let Some(keyword) = stream.peek().as_keyword() else {
        return false;
    };
    let called = stream.peek_nth(1).kind == TokenKind::LeftParen;
    match keyword {
        Keyword::Default(DefaultKeyword::Left | DefaultKeyword::Right) => !called,
        Keyword::Default(
            DefaultKeyword::From
            | DefaultKeyword::Into
            | DefaultKeyword::Where
            | DefaultKeyword::Group
            | DefaultKeyword::Having
            | DefaultKeyword::Order
            | DefaultKeyword::Limit
            | DefaultKeyword::Offset
            | DefaultKeyword::Fetch
            | DefaultKeyword::For
            | DefaultKeyword::Union
            | DefaultKeyword::Intersect
            | DefaultKeyword::Except
            | DefaultKeyword::Join
            | DefaultKeyword::Inner
            | DefaultKeyword::Full
            | DefaultKeyword::Cross
            | DefaultKeyword::On
            | DefaultKeyword::Using,
        )
        | Keyword::Oracle(OracleKeyword::Connect | OracleKeyword::Start | OracleKeyword::Minus)
        | Keyword::PostgreSql(PostgreSqlKeyword::Returning) => true,
        _ => false,
    }
}

/// [`at_clause_boundary`], or a `,` at depth zero.
pub fn at_list_boundary(stream: &TokenStream<'_>) -> bool {
    stream.peek().kind == TokenKind::Comma || at_clause_boundary(stream)
}
