//! PostgreSQL dialect.

use serde::Serialize;

use super::Dialect;
use crate::category::StatementCategory;
use crate::lexer::Keyword;

/// Keywords reserved only by PostgreSQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PostgreSqlKeyword {
    Show,
    Returning,
    Only,
    Ilike,
    Conflict,
    Do,
    Nothing,
}

impl PostgreSqlKeyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "SHOW" => Some(Self::Show),
            "RETURNING" => Some(Self::Returning),
            "ONLY" => Some(Self::Only),
            "ILIKE" => Some(Self::Ilike),
            "CONFLICT" => Some(Self::Conflict),
            "DO" => Some(Self::Do),
            "NOTHING" => Some(Self::Nothing),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Show => "SHOW",
            Self::Returning => "RETURNING",
            Self::Only => "ONLY",
            Self::Ilike => "ILIKE",
            Self::Conflict => "CONFLICT",
            Self::Do => "DO",
            Self::Nothing => "NOTHING",
        }
    }

    /// Returns the leading-statement role.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Show => Some(StatementCategory::Dal),
            _ => None,
        }
    }
}

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgreSqlDialect;

impl Dialect for PostgreSqlDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn dialect_keyword(&self, upper: &str) -> Option<Keyword> {
        PostgreSqlKeyword::from_str(upper).map(Keyword::PostgreSql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgresql_dialect() {
        let dialect = PostgreSqlDialect;
        assert_eq!(dialect.name(), "postgresql");
        assert_eq!(dialect.identifier_quote(), '"');
        assert!(!dialect.hash_comments());
        assert_eq!(
            dialect.keyword("returning"),
            Some(Keyword::PostgreSql(PostgreSqlKeyword::Returning))
        );
        assert_eq!(dialect.keyword("replace"), None);
        assert_eq!(dialect.replace_keyword(), None);
    }
}
