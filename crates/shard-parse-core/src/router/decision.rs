//! The outcome of classifying a statement.

use std::fmt;

use serde::Serialize;

use crate::category::StatementCategory;
use crate::parser::LegacyKind;

/// Which parser handles a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The unified grammar engine.
    Unified,
    /// A hand-written legacy sub-factory.
    Legacy(LegacyKind),
}

impl Strategy {
    /// Returns true for the unified engine.
    #[must_use]
    pub const fn is_unified(&self) -> bool {
        matches!(self, Self::Unified)
    }

    /// The legacy parser kind, if any.
    #[must_use]
    pub const fn legacy_kind(&self) -> Option<LegacyKind> {
        match self {
            Self::Unified => None,
            Self::Legacy(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unified => f.write_str("unified"),
            Self::Legacy(kind) => write!(f, "legacy {kind}"),
        }
    }
}

/// A routing decision and the cursor position it left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    /// The selected parser.
    pub strategy: Strategy,
    /// The statement category the decision was made on.
    pub category: StatementCategory,
    /// Tokens consumed from the stream: one, or two when the second token
    /// was needed to decide.
    pub tokens_consumed: usize,
}

impl fmt::Display for RoutingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} tokens consumed)",
            self.category, self.strategy, self.tokens_consumed
        )
    }
}
