//! INSERT sub-factory.

use crate::ast::{InsertStatement, SqlStatement};
use crate::dialect::DatabaseType;
use crate::lexer::{DefaultKeyword, TokenKind, TokenStream};
use crate::metadata::TableMetaData;
use crate::rule::ShardingRule;

use super::clause::{
    expect_end, expect_keyword, parse_column_list, parse_table_ref, skip_group, skip_token,
};
use super::guard::{INSERT_SELECT, RETURNING};
use super::{LegacyKind, LegacyParser, ParseError};

/// Parses the rest of an INSERT whose keyword the router consumed.
///
/// Without a column list the columns are taken from `metadata`. When the
/// sharding rule generates a key column the statement does not name,
/// `generated_key` records it.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedSyntax`] for `INSERT ... SELECT` and
/// PostgreSQL `RETURNING`, and [`ParseError::Syntax`] on malformed input.
pub fn new_instance(
    database_type: DatabaseType,
    rule: &ShardingRule,
    stream: &mut TokenStream<'_>,
    metadata: &TableMetaData,
) -> Result<LegacyParser, ParseError> {
    // SQL Server allows INSERT without INTO
    if database_type == DatabaseType::SqlServer {
        stream.skip_if(DefaultKeyword::Into);
    } else {
        expect_keyword(stream, DefaultKeyword::Into)?;
    }
    let table = parse_table_ref(stream)?;

    // INSERT INTO t (SELECT ...)
    if stream.peek().kind == TokenKind::LeftParen
        && stream.peek_nth(1).is_keyword(DefaultKeyword::Select)
    {
        stream.advance();
    }

    let (columns, columns_from_metadata) = if stream.peek().kind == TokenKind::LeftParen {
        (parse_column_list(stream)?, false)
    } else {
        let columns = metadata.columns(&table.name).unwrap_or_default().to_vec();
        (columns, true)
    };

    INSERT_SELECT.check(stream)?;
    expect_keyword(stream, DefaultKeyword::Values)?;

    let mut rows = 0;
    loop {
        skip_group(stream)?;
        rows += 1;
        if !skip_token(stream, &TokenKind::Comma) {
            break;
        }
    }

    if database_type == DatabaseType::PostgreSql {
        RETURNING.check(stream)?;
    }
    expect_end(stream)?;

    let generated_key = rule
        .generate_key_column(&table.name)
        .filter(|key| !columns.iter().any(|c| c.eq_ignore_ascii_case(key)))
        .map(str::to_string);

    let insert = InsertStatement {
        table,
        columns,
        columns_from_metadata,
        rows,
        generated_key,
    };
    Ok(LegacyParser::new(
        LegacyKind::Insert,
        SqlStatement::Insert(insert),
        stream,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TableRef;
    use crate::rule::TableRule;

    fn parse(
        sql: &str,
        database_type: DatabaseType,
        rule: &ShardingRule,
        metadata: &TableMetaData,
    ) -> Result<InsertStatement, ParseError> {
        let mut stream = TokenStream::new(sql, database_type);
        assert!(stream.advance().is_keyword(DefaultKeyword::Insert));
        match new_instance(database_type, rule, &mut stream, metadata)?.into_statement() {
            SqlStatement::Insert(insert) => Ok(insert),
            other => panic!("expected insert, got {other:?}"),
        }
    }

    fn order_rule() -> ShardingRule {
        ShardingRule::new().table(TableRule::new("t_order").generate_key("order_id"))
    }

    #[test]
    fn test_insert_with_columns_and_generated_key() {
        let insert = parse(
            "INSERT INTO t_order (user_id, status) VALUES (?, ?), (?, ?)",
            DatabaseType::PostgreSql,
            &order_rule(),
            &TableMetaData::new(),
        )
        .unwrap();
        assert_eq!(insert.table, TableRef::new("t_order"));
        assert_eq!(insert.columns, vec!["user_id", "status"]);
        assert!(!insert.columns_from_metadata);
        assert_eq!(insert.rows, 2);
        assert_eq!(insert.generated_key.as_deref(), Some("order_id"));
    }

    #[test]
    fn test_key_present_is_not_generated() {
        let insert = parse(
            "INSERT INTO t_order (ORDER_ID, user_id) VALUES (1, 2)",
            DatabaseType::Oracle,
            &order_rule(),
            &TableMetaData::new(),
        )
        .unwrap();
        assert_eq!(insert.generated_key, None);
    }

    #[test]
    fn test_columns_from_metadata() {
        let metadata = TableMetaData::new().with_table("t_order", &["order_id", "user_id"]);
        let insert = parse(
            "INSERT INTO t_order VALUES (1, 2);",
            DatabaseType::Oracle,
            &order_rule(),
            &metadata,
        )
        .unwrap();
        assert_eq!(insert.columns, vec!["order_id", "user_id"]);
        assert!(insert.columns_from_metadata);
        assert_eq!(insert.generated_key, None);
    }

    #[test]
    fn test_sqlserver_without_into() {
        let insert = parse(
            "INSERT t_order (user_id) VALUES (1)",
            DatabaseType::SqlServer,
            &ShardingRule::new(),
            &TableMetaData::new(),
        )
        .unwrap();
        assert_eq!(insert.table.name, "t_order");
    }

    #[test]
    fn test_insert_select_rejected() {
        for sql in [
            "INSERT INTO t_order (user_id) SELECT user_id FROM t_user",
            "INSERT INTO t_order SELECT * FROM t_user",
            "INSERT INTO t_order (SELECT * FROM t_user)",
        ] {
            let err = parse(sql, DatabaseType::PostgreSql, &order_rule(), &TableMetaData::new());
            assert!(err.is_err_and(|e| e.is_unsupported()), "{sql}");
        }
    }

    #[test]
    fn test_returning_rejected_on_postgresql_only() {
        let sql = "INSERT INTO t_order (user_id) VALUES (1) RETURNING order_id";
        let err = parse(sql, DatabaseType::PostgreSql, &order_rule(), &TableMetaData::new())
            .unwrap_err();
        assert!(err.is_unsupported());

        let err = parse(sql, DatabaseType::Oracle, &order_rule(), &TableMetaData::new())
            .unwrap_err();
        assert!(!err.is_unsupported());
    }
}
