//! H2 dialect.

use serde::Serialize;

use super::Dialect;
use crate::category::StatementCategory;
use crate::lexer::Keyword;

/// Keywords reserved only by H2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum H2Keyword {
    Replace,
    Merge,
}

impl H2Keyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "REPLACE" => Some(Self::Replace),
            "MERGE" => Some(Self::Merge),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "REPLACE",
            Self::Merge => "MERGE",
        }
    }

    /// Returns the leading-statement role.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Merge => Some(StatementCategory::Dml),
            Self::Replace => None,
        }
    }
}

/// H2 dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct H2Dialect;

impl Dialect for H2Dialect {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn dialect_keyword(&self, upper: &str) -> Option<Keyword> {
        H2Keyword::from_str(upper).map(Keyword::H2)
    }

    fn replace_keyword(&self) -> Option<Keyword> {
        Some(Keyword::H2(H2Keyword::Replace))
    }
}
