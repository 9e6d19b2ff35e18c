//! MySQL dialect.

use serde::Serialize;

use super::Dialect;
use crate::category::StatementCategory;
use crate::lexer::Keyword;

/// Keywords reserved only by MySQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MySqlKeyword {
    Replace,
    Show,
    Describe,
    Tables,
    Databases,
    Columns,
    Fields,
    Indexes,
    Keys,
    Status,
    Variables,
    Duplicate,
    Ignore,
    Autocommit,
}

impl MySqlKeyword {
    /// Looks up an upper-case lexeme.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(upper: &str) -> Option<Self> {
        match upper {
            "REPLACE" => Some(Self::Replace),
            "SHOW" => Some(Self::Show),
            "DESCRIBE" => Some(Self::Describe),
            "TABLES" => Some(Self::Tables),
            "DATABASES" => Some(Self::Databases),
            "COLUMNS" => Some(Self::Columns),
            "FIELDS" => Some(Self::Fields),
            "INDEXES" => Some(Self::Indexes),
            "KEYS" => Some(Self::Keys),
            "STATUS" => Some(Self::Status),
            "VARIABLES" => Some(Self::Variables),
            "DUPLICATE" => Some(Self::Duplicate),
            "IGNORE" => Some(Self::Ignore),
            "AUTOCOMMIT" => Some(Self::Autocommit),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "REPLACE",
            Self::Show => "SHOW",
            Self::Describe => "DESCRIBE",
            Self::Tables => "TABLES",
            Self::Databases => "DATABASES",
            Self::Columns => "COLUMNS",
            Self::Fields => "FIELDS",
            Self::Indexes => "INDEXES",
            Self::Keys => "KEYS",
            Self::Status => "STATUS",
            Self::Variables => "VARIABLES",
            Self::Duplicate => "DUPLICATE",
            Self::Ignore => "IGNORE",
            Self::Autocommit => "AUTOCOMMIT",
        }
    }

    /// `SHOW` and `DESCRIBE` announce administrative statements. `REPLACE`
    /// has no role: the router checks it by identity.
    #[must_use]
    pub const fn role(&self) -> Option<StatementCategory> {
        match self {
            Self::Show | Self::Describe => Some(StatementCategory::Dal),
            _ => None,
        }
    }
}

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn hash_comments(&self) -> bool {
        true
    }

    fn backslash_escapes(&self) -> bool {
        true
    }

    fn dialect_keyword(&self, upper: &str) -> Option<Keyword> {
        MySqlKeyword::from_str(upper).map(Keyword::MySql)
    }

    fn replace_keyword(&self) -> Option<Keyword> {
        Some(Keyword::MySql(MySqlKeyword::Replace))
    }
}
