#![allow(dead_code)]

use shard_parse_core::ast::{
    DeleteStatement, InsertStatement, SelectStatement, ShowTarget, UnifiedStatement,
    UpdateStatement,
};
use shard_parse_core::{
    DatabaseType, ParseError, RoutingDecision, ShardingRule, SqlParserFactory, SqlStatement,
    Strategy, TableMetaData, TableRule, TokenStream,
};

pub fn sharding_rule() -> ShardingRule {
    ShardingRule::new()
        .table(
            TableRule::new("t_order")
                .data_node("ds_0.t_order_0")
                .data_node("ds_1.t_order_1")
                .generate_key("order_id"),
        )
        .table(TableRule::new("t_order_item").generate_key("item_id"))
}

pub fn metadata() -> TableMetaData {
    TableMetaData::new()
        .with_table("t_order", &["order_id", "user_id", "status"])
        .with_table("t_user", &["user_id", "name", "pwd"])
}

pub fn classify(database_type: DatabaseType, sql: &str) -> RoutingDecision {
    let mut stream = TokenStream::new(sql, database_type);
    SqlParserFactory::new()
        .classify(database_type, &mut stream)
        .unwrap_or_else(|e| panic!("Failed to classify: {sql}\nError: {e:?}"))
}

/// Routes and parses `sql`, returning the strategy used and the statement.
pub fn route(database_type: DatabaseType, sql: &str) -> (Strategy, SqlStatement) {
    try_route(database_type, sql)
        .unwrap_or_else(|e| panic!("Failed to route: {sql} on {database_type}\nError: {e:?}"))
}

pub fn try_route(
    database_type: DatabaseType,
    sql: &str,
) -> Result<(Strategy, SqlStatement), ParseError> {
    let factory = SqlParserFactory::new();
    let rule = sharding_rule();
    let metadata = metadata();
    let mut stream = TokenStream::new(sql, database_type);
    let parser = factory.route(database_type, &rule, &mut stream, &metadata, sql)?;
    let strategy = parser.strategy();
    Ok((strategy, parser.parse()?))
}

/// Routes `sql` and returns the error together with the cursor position.
pub fn route_err(database_type: DatabaseType, sql: &str) -> (ParseError, usize) {
    let factory = SqlParserFactory::new();
    let rule = sharding_rule();
    let metadata = metadata();
    let mut stream = TokenStream::new(sql, database_type);
    let err = factory
        .route(database_type, &rule, &mut stream, &metadata, sql)
        .expect_err(&format!("Expected routing error for: {sql}"));
    (err, stream.position())
}

pub fn unsupported_at(database_type: DatabaseType, sql: &str) -> String {
    let (err, _) = route_err(database_type, sql);
    assert!(err.is_unsupported(), "Expected unsupported syntax for {sql}, got {err}");
    err.found()
        .map(ToString::to_string)
        .unwrap_or_else(|| panic!("No token in {err}"))
}

pub fn route_select(database_type: DatabaseType, sql: &str) -> SelectStatement {
    match route(database_type, sql).1 {
        SqlStatement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn route_insert(database_type: DatabaseType, sql: &str) -> InsertStatement {
    match route(database_type, sql).1 {
        SqlStatement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn route_update(database_type: DatabaseType, sql: &str) -> UpdateStatement {
    match route(database_type, sql).1 {
        SqlStatement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn route_delete(database_type: DatabaseType, sql: &str) -> DeleteStatement {
    match route(database_type, sql).1 {
        SqlStatement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn route_show(sql: &str) -> ShowTarget {
    match route(DatabaseType::MySql, sql).1 {
        SqlStatement::Show(s) => s.target,
        other => panic!("Expected SHOW, got {other:?}"),
    }
}

pub fn route_unified(database_type: DatabaseType, sql: &str) -> UnifiedStatement {
    match route(database_type, sql) {
        (Strategy::Unified, SqlStatement::Unified(u)) => u,
        other => panic!("Expected unified statement, got {other:?}"),
    }
}
