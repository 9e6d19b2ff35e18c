//! SQL Server dialect.

use serde::Serialize;

use super::Dialect;
use crate::category::StatementCategory;
use crate::lexer::Keyword;

/// Keywords reserved only by SQL Server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SqlServerKeyword {
    Top,
    Output,
    Merge,
    Nolock,
    Percent,
}

impl SqlServerKeyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "TOP" => Some(Self::Top),
            "OUTPUT" => Some(Self::Output),
            "MERGE" => Some(Self::Merge),
            "NOLOCK" => Some(Self::Nolock),
            "PERCENT" => Some(Self::Percent),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Output => "OUTPUT",
            Self::Merge => "MERGE",
            Self::Nolock => "NOLOCK",
            Self::Percent => "PERCENT",
        }
    }

    /// Returns the leading-statement role.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Merge => Some(StatementCategory::Dml),
            _ => None,
        }
    }
}

/// SQL Server dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn identifier_quote(&self) -> char {
        '['
    }

    fn dialect_keyword(&self, upper: &str) -> Option<Keyword> {
        SqlServerKeyword::from_str(upper).map(Keyword::SqlServer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlserver_dialect() {
        let dialect = SqlServerDialect;
        assert_eq!(dialect.name(), "sqlserver");
        assert_eq!(dialect.identifier_quote(), '[');
        assert_eq!(dialect.keyword("top"), Some(Keyword::SqlServer(SqlServerKeyword::Top)));
    }
}
