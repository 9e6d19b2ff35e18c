//! End-to-end tests for the legacy sub-factories, reached through the router.

mod common;
use common::*;

use shard_parse_core::ast::{ShowTarget, TableRef};
use shard_parse_core::{DatabaseType, LegacyKind, SqlStatement, Strategy};

#[test]
fn select_records_tables_and_clauses() {
    let select = route_select(
        DatabaseType::PostgreSql,
        "SELECT o.order_id, COUNT(*) FROM public.t_order AS o \
         INNER JOIN t_order_item i USING (order_id) \
         WHERE o.user_id IN (1, 2) GROUP BY o.order_id HAVING COUNT(*) > 1 \
         ORDER BY o.order_id LIMIT 10",
    );
    assert_eq!(
        select.tables,
        vec![
            TableRef {
                schema: Some(String::from("public")),
                name: String::from("t_order"),
                alias: Some(String::from("o")),
            },
            TableRef::new("t_order_item").alias("i"),
        ]
    );
    assert!(select.has_where);
    assert!(select.has_group_by);
    assert!(select.has_order_by);
    assert!(select.has_limit);
    assert!(!select.distinct);
}

#[test]
fn select_without_from() {
    let select = route_select(DatabaseType::PostgreSql, "SELECT 1 + 1");
    assert!(select.tables.is_empty());
}

#[test]
fn select_with_subquery_in_where() {
    let select = route_select(
        DatabaseType::Oracle,
        "SELECT * FROM t_order WHERE user_id IN (SELECT user_id FROM t_user WHERE name LIKE 'a%')",
    );
    assert_eq!(select.tables, vec![TableRef::new("t_order")]);
    assert!(select.has_where);
}

#[test]
fn select_for_update() {
    let select = route_select(
        DatabaseType::Oracle,
        "SELECT * FROM t_order WHERE order_id = 1 FOR UPDATE",
    );
    assert!(select.for_update);
}

#[test]
fn select_sqlserver_top() {
    let select = route_select(
        DatabaseType::SqlServer,
        "SELECT TOP (5) PERCENT [order_id] FROM [dbo].[t_order]",
    );
    assert!(select.has_limit);
    assert_eq!(select.tables[0].schema.as_deref(), Some("dbo"));
    assert_eq!(select.tables[0].name, "t_order");
}

#[test]
fn select_syntax_errors() {
    for sql in [
        "SELECT * FROM",
        "SELECT (1 + 2 FROM t_order",
        "SELECT * FROM t_order GROUP order_id",
        "SELECT * FROM a JOIN",
    ] {
        let (err, _) = route_err(DatabaseType::PostgreSql, sql);
        assert!(!err.is_unsupported(), "{sql}: {err}");
    }
}

#[test]
fn insert_generates_missing_key() {
    let insert = route_insert(
        DatabaseType::PostgreSql,
        "INSERT INTO t_order (user_id, status) VALUES (10, 'init')",
    );
    assert_eq!(insert.table.name, "t_order");
    assert_eq!(insert.columns, vec!["user_id", "status"]);
    assert_eq!(insert.rows, 1);
    assert_eq!(insert.generated_key.as_deref(), Some("order_id"));
}

#[test]
fn insert_takes_columns_from_metadata() {
    let insert = route_insert(
        DatabaseType::Oracle,
        "INSERT INTO t_user VALUES (1, 'a', 'b'), (2, 'c', 'd')",
    );
    assert!(insert.columns_from_metadata);
    assert_eq!(insert.columns, vec!["user_id", "name", "pwd"]);
    assert_eq!(insert.rows, 2);
    assert_eq!(insert.generated_key, None);
}

#[test]
fn insert_unknown_table_without_columns() {
    let insert = route_insert(DatabaseType::SqlServer, "INSERT INTO t_log VALUES (1)");
    assert!(insert.columns.is_empty());
    assert!(insert.columns_from_metadata);
}

#[test]
fn update_records_assignments() {
    let update = route_update(
        DatabaseType::SqlServer,
        "UPDATE t_order SET status = 'paid', user_id = user_id + 1 WHERE order_id = 7",
    );
    assert_eq!(update.assignments, vec!["status", "user_id"]);
    assert!(update.has_where);
}

#[test]
fn delete_records_where() {
    let delete = route_delete(DatabaseType::Oracle, "DELETE t_order o WHERE o.order_id = 1;");
    assert_eq!(delete.table, TableRef::new("t_order").alias("o"));
    assert!(delete.has_where);
}

#[test]
fn use_and_describe() {
    let (strategy, statement) = route(DatabaseType::SqlServer, "USE sharding_db");
    assert_eq!(strategy, Strategy::Legacy(LegacyKind::Use));
    assert_eq!(statement.table_names(), Vec::<&str>::new());

    let (strategy, statement) = route(DatabaseType::MySql, "DESCRIBE t_order status");
    assert_eq!(strategy, Strategy::Legacy(LegacyKind::Describe));
    let SqlStatement::Describe(describe) = statement else {
        panic!("expected describe");
    };
    assert_eq!(describe.table.name, "t_order");
    assert_eq!(describe.column.as_deref(), Some("status"));
}

#[test]
fn mysql_show_targets() {
    assert_eq!(route_show("SHOW DATABASES"), ShowTarget::Databases);
    assert_eq!(
        route_show("SHOW FULL TABLES IN sharding_db WHERE Table_type = 'BASE TABLE'"),
        ShowTarget::Tables {
            full: true,
            schema: Some(String::from("sharding_db")),
        }
    );
    assert_eq!(
        route_show("SHOW FULL COLUMNS FROM t_order"),
        ShowTarget::Columns {
            table: TableRef::new("t_order"),
        }
    );
    assert_eq!(
        route_show("SHOW INDEX FROM t_order"),
        ShowTarget::Index {
            table: TableRef::new("t_order"),
        }
    );
    assert_eq!(
        route_show("SHOW STATUS"),
        ShowTarget::Other {
            name: String::from("STATUS"),
        }
    );
}

#[test]
fn set_statements() {
    for (database_type, sql, variable) in [
        (DatabaseType::MySql, "SET autocommit = 0", "autocommit"),
        (DatabaseType::MySql, "SET @@session.sql_mode = ''", "@@session.sql_mode"),
        (DatabaseType::MySql, "SET GLOBAL max_connections = 100", "GLOBAL max_connections"),
        (DatabaseType::Oracle, "SET ROLE ALL", "ROLE"),
    ] {
        let (_, statement) = route(database_type, sql);
        let SqlStatement::Set(set) = statement else {
            panic!("expected set for {sql}");
        };
        assert_eq!(set.variable.as_deref(), Some(variable), "{sql}");
    }
}

#[test]
fn statement_json_output() {
    let (_, statement) = route(DatabaseType::PostgreSql, "DELETE FROM t_order WHERE order_id = 1");
    let json = serde_json::to_value(&statement).unwrap();
    assert_eq!(json["type"], "delete");
    assert_eq!(json["table"]["name"], "t_order");
    assert_eq!(json["has_where"], true);
}
