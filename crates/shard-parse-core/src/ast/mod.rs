//! Parsed statement types.

mod statement;

pub use statement::{
    DeleteStatement, DescribeStatement, InsertStatement, SelectStatement, SetStatement,
    ShowStatement, ShowTarget, SqlStatement, TableRef, UnifiedStatement, UpdateStatement,
    UseStatement,
};
