//! Oracle dialect.

use serde::Serialize;

use super::Dialect;
use crate::category::StatementCategory;
use crate::lexer::Keyword;

/// Keywords reserved only by Oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OracleKeyword {
    Connect,
    Start,
    Prior,
    Nocycle,
    Siblings,
    Minus,
    Merge,
    Rownum,
    Pivot,
    Unpivot,
}

impl OracleKeyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "CONNECT" => Some(Self::Connect),
            "START" => Some(Self::Start),
            "PRIOR" => Some(Self::Prior),
            "NOCYCLE" => Some(Self::Nocycle),
            "SIBLINGS" => Some(Self::Siblings),
            "MINUS" => Some(Self::Minus),
            "MERGE" => Some(Self::Merge),
            "ROWNUM" => Some(Self::Rownum),
            "PIVOT" => Some(Self::Pivot),
            "UNPIVOT" => Some(Self::Unpivot),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Start => "START",
            Self::Prior => "PRIOR",
            Self::Nocycle => "NOCYCLE",
            Self::Siblings => "SIBLINGS",
            Self::Minus => "MINUS",
            Self::Merge => "MERGE",
            Self::Rownum => "ROWNUM",
            Self::Pivot => "PIVOT",
            Self::Unpivot => "UNPIVOT",
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

/// Oracle dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn dialect_keyword(&self, upper: &str) -> Option<Keyword> {
        OracleKeyword::from_str(upper).map(Keyword::Oracle)
    }
}
