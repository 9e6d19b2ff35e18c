//! # shard-parse-core
//!
//! A dialect-aware SQL parser dispatcher for database middleware.
//!
//! Given a statement and its target database, [`SqlParserFactory`] inspects
//! the first token or two and selects a parser:
//!
//! - the unified grammar engine, which handles the full grammar of MySQL
//!   and H2 and every transaction, definition and control statement;
//! - or a hand-written legacy parser for one statement kind (SELECT,
//!   INSERT, UPDATE, DELETE, USE, DESCRIBE, SHOW, SET) on PostgreSQL,
//!   Oracle and SQL Server.
//!
//! Legacy parsers cover a common grammar subset and check clause guards
//! where a dialect extension could start, failing with
//! [`ParseError::UnsupportedSyntax`] rather than misparsing it.
//!
//! ## Routing a statement
//!
//! ```rust
//! use shard_parse_core::{
//!     DatabaseType, ShardingRule, SqlParserFactory, SqlStatement, Strategy, TableMetaData,
//!     TokenStream,
//! };
//!
//! let factory = SqlParserFactory::new();
//! let rule = ShardingRule::new();
//! let metadata = TableMetaData::new();
//!
//! let sql = "SELECT * FROM t_order WHERE order_id = ?";
//! let mut stream = TokenStream::new(sql, DatabaseType::PostgreSql);
//! let parser = factory
//!     .route(DatabaseType::PostgreSql, &rule, &mut stream, &metadata, sql)
//!     .unwrap();
//! assert!(matches!(parser.strategy(), Strategy::Legacy(_)));
//!
//! let SqlStatement::Select(select) = parser.parse().unwrap() else {
//!     panic!("expected a select");
//! };
//! assert_eq!(select.tables[0].name, "t_order");
//! ```
//!
//! ## Unsupported dialect extensions
//!
//! ```rust
//! use shard_parse_core::{DatabaseType, ShardingRule, SqlParserFactory, TableMetaData, TokenStream};
//!
//! let factory = SqlParserFactory::new();
//! let sql = "SELECT * FROM t START WITH id = 1 CONNECT BY PRIOR parent_id = id";
//! let mut stream = TokenStream::new(sql, DatabaseType::Oracle);
//! let err = factory
//!     .route(DatabaseType::Oracle, &ShardingRule::new(), &mut stream, &TableMetaData::new(), sql)
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("Unsupported SQL syntax: START"));
//! ```

pub mod ast;
pub mod category;
pub mod dialect;
pub mod engine;
pub mod lexer;
pub mod metadata;
pub mod parser;
pub mod router;
pub mod rule;

pub use ast::SqlStatement;
pub use category::StatementCategory;
pub use dialect::{DatabaseType, Dialect, UnknownDatabaseType};
pub use engine::{ShapeEngine, UnifiedEngine};
pub use lexer::{Keyword, Lexer, Token, TokenKind, TokenStream};
pub use metadata::TableMetaData;
pub use parser::{ClauseGuard, LegacyKind, ParseError};
pub use router::{
    AmbiguousTcl, NoAmbiguousTcl, RoutingDecision, SqlParser, SqlParserFactory, Strategy,
    UnifiedParser,
};
pub use rule::{EncryptRule, RuleSet, ShardingRule, TableRule};
