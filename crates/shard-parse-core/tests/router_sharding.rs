//! Tests for the sharding entry point's decision table.

mod common;
use common::*;

use shard_parse_core::{
    DatabaseType, LegacyKind, ShardingRule, SqlParserFactory, StatementCategory, Strategy,
    TableMetaData, TokenStream,
};

const QUERIES_AND_DML: &[&str] = &[
    "SELECT * FROM t_order",
    "SELECT o.*, i.* FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id",
    "SELECT * FROM a UNION SELECT * FROM b",
    "INSERT INTO t_order (user_id) VALUES (1)",
    "INSERT INTO t_order (user_id) SELECT user_id FROM t_user",
    "UPDATE t_order SET status = 'x' WHERE order_id = 1",
    "DELETE FROM t_order WHERE order_id = 1",
];

#[test]
fn mysql_and_h2_queries_and_dml_go_to_unified_engine() {
    for database_type in [DatabaseType::MySql, DatabaseType::H2] {
        for sql in QUERIES_AND_DML {
            let decision = classify(database_type, sql);
            assert_eq!(decision.strategy, Strategy::Unified, "{database_type}: {sql}");
            assert_eq!(decision.tokens_consumed, 1);
            let (strategy, _) = route(database_type, sql);
            assert!(strategy.is_unified());
        }
    }
}

#[test]
fn other_dialects_use_legacy_parsers_for_queries_and_dml() {
    let cases = [
        ("SELECT * FROM t_order", LegacyKind::Select, StatementCategory::Dql),
        ("INSERT INTO t_order (user_id) VALUES (1)", LegacyKind::Insert, StatementCategory::Dml),
        ("UPDATE t_order SET status = 1", LegacyKind::Update, StatementCategory::Dml),
        ("DELETE FROM t_order", LegacyKind::Delete, StatementCategory::Dml),
    ];
    for database_type in [
        DatabaseType::PostgreSql,
        DatabaseType::Oracle,
        DatabaseType::SqlServer,
    ] {
        for (sql, kind, category) in cases {
            let decision = classify(database_type, sql);
            assert_eq!(decision.strategy, Strategy::Legacy(kind), "{database_type}: {sql}");
            assert_eq!(decision.category, category);
            assert_eq!(decision.tokens_consumed, 1);
            assert_eq!(route(database_type, sql).1.category(), category);
        }
    }
}

#[test]
fn replace_routes_to_unified_on_mysql_and_h2() {
    for database_type in [DatabaseType::MySql, DatabaseType::H2] {
        let unified = route_unified(database_type, "REPLACE INTO t_order (order_id) VALUES (1)");
        assert_eq!(unified.category, StatementCategory::Dml);
        assert_eq!(unified.tables, vec!["t_order"]);
    }
}

#[test]
fn transaction_control_always_goes_to_unified_engine() {
    for database_type in DatabaseType::ALL {
        for sql in ["BEGIN", "COMMIT", "ROLLBACK", "SAVEPOINT sp1"] {
            let decision = classify(database_type, sql);
            assert_eq!(decision.strategy, Strategy::Unified, "{database_type}: {sql}");
            assert_eq!(decision.category, StatementCategory::Tcl);
            assert_eq!(decision.tokens_consumed, 1);
        }
    }
}

#[test]
fn postgresql_show_goes_to_unified_engine() {
    let unified = route_unified(DatabaseType::PostgreSql, "SHOW search_path");
    assert_eq!(unified.category, StatementCategory::Dal);
}

#[test]
fn mysql_show_goes_to_show_parser() {
    let decision = classify(DatabaseType::MySql, "SHOW TABLES");
    assert_eq!(decision.strategy, Strategy::Legacy(LegacyKind::Show));
    assert_eq!(decision.category, StatementCategory::Dal);
}

#[test]
fn use_and_describe_go_to_their_parsers() {
    for database_type in DatabaseType::ALL {
        assert_eq!(
            classify(database_type, "USE sharding_db").strategy,
            Strategy::Legacy(LegacyKind::Use)
        );
        assert_eq!(
            classify(database_type, "DESC t_order").strategy,
            Strategy::Legacy(LegacyKind::Describe)
        );
    }
    assert_eq!(
        classify(DatabaseType::MySql, "DESCRIBE t_order").strategy,
        Strategy::Legacy(LegacyKind::Describe)
    );
}

#[test]
fn show_is_unsupported_where_it_is_not_a_keyword() {
    for database_type in [DatabaseType::Oracle, DatabaseType::SqlServer] {
        assert_eq!(unsupported_at(database_type, "SHOW TABLES"), "SHOW");
    }
}

#[test]
fn control_and_definition_pairs_consume_two_tokens() {
    let cases = [
        ("GRANT SELECT ON t_order TO app", StatementCategory::Dcl),
        ("REVOKE SELECT ON t_order FROM app", StatementCategory::Dcl),
        ("DENY SELECT ON t_order TO app", StatementCategory::Dcl),
        ("CREATE LOGIN app WITH PASSWORD = 'x'", StatementCategory::Dcl),
        ("ALTER USER app IDENTIFIED BY x", StatementCategory::Dcl),
        ("RENAME USER app TO app2", StatementCategory::Dcl),
        ("DROP ROLE reader", StatementCategory::Dcl),
        ("CREATE TABLE t_log (id INT)", StatementCategory::Ddl),
        ("ALTER TABLE t_order ADD note VARCHAR(10)", StatementCategory::Ddl),
        ("DROP INDEX idx_user", StatementCategory::Ddl),
        ("TRUNCATE TABLE t_order", StatementCategory::Ddl),
    ];
    for database_type in DatabaseType::ALL {
        for (sql, category) in cases {
            let decision = classify(database_type, sql);
            assert_eq!(decision.strategy, Strategy::Unified, "{database_type}: {sql}");
            assert_eq!(decision.category, category, "{database_type}: {sql}");
            assert_eq!(decision.tokens_consumed, 2, "{database_type}: {sql}");
        }
    }
}

#[test]
fn rename_table_is_unsupported() {
    let (err, position) = route_err(DatabaseType::Oracle, "RENAME t_order TO t_order_old");
    assert!(err.is_unsupported());
    assert_eq!(position, 1);
}

#[test]
fn set_goes_to_set_parser() {
    for database_type in DatabaseType::ALL {
        let decision = classify(database_type, "SET @x = 1");
        assert_eq!(decision.strategy, Strategy::Legacy(LegacyKind::Set));
        assert_eq!(decision.category, StatementCategory::Set);
        assert_eq!(decision.tokens_consumed, 1);
    }
}

#[test]
fn unknown_statement_fails_on_first_token() {
    for database_type in DatabaseType::ALL {
        let (err, position) = route_err(database_type, "FOO BAR");
        assert!(err.is_unsupported());
        assert_eq!(err.found().map(ToString::to_string).as_deref(), Some("FOO"));
        assert_eq!(position, 1, "{database_type}");
    }
}

#[test]
fn empty_statement_is_unsupported() {
    let (err, position) = route_err(DatabaseType::PostgreSql, "");
    assert!(err.is_unsupported());
    assert_eq!(position, 1);
}

#[test]
fn merge_is_unsupported_on_legacy_dialects() {
    for database_type in [DatabaseType::Oracle, DatabaseType::SqlServer] {
        assert_eq!(
            unsupported_at(database_type, "MERGE INTO t USING s ON (t.id = s.id)"),
            "MERGE"
        );
    }
}

#[test]
fn routing_is_deterministic() {
    let statements = [
        "SELECT * FROM t_order WHERE order_id = 1",
        "CREATE TABLE t (id INT)",
        "FOO BAR",
        "SHOW search_path",
    ];
    for database_type in DatabaseType::ALL {
        for sql in statements {
            let first = try_route(database_type, sql);
            let second = try_route(database_type, sql);
            assert_eq!(first, second, "{database_type}: {sql}");
        }
    }
}

#[test]
fn factory_is_shared_across_threads() {
    let factory = SqlParserFactory::new();
    let rule = ShardingRule::new();
    let metadata = TableMetaData::new();
    let statements = [
        (DatabaseType::MySql, "SELECT 1"),
        (DatabaseType::Oracle, "SELECT * FROM t_order"),
        (DatabaseType::PostgreSql, "SHOW search_path"),
        (DatabaseType::SqlServer, "DELETE FROM t_order"),
    ];

    std::thread::scope(|scope| {
        let handles: Vec<_> = statements
            .iter()
            .map(|&(database_type, sql)| {
                let (factory, rule, metadata) = (&factory, &rule, &metadata);
                scope.spawn(move || {
                    let mut stream = TokenStream::new(sql, database_type);
                    factory
                        .route(database_type, rule, &mut stream, metadata, sql)
                        .map(|parser| parser.strategy())
                })
            })
            .collect();
        let strategies: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(
            strategies,
            vec![
                Strategy::Unified,
                Strategy::Legacy(LegacyKind::Select),
                Strategy::Unified,
                Strategy::Legacy(LegacyKind::Delete),
            ]
        );
    });
}
