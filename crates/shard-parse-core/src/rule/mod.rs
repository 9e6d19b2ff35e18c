//! Rule sets that select which rewriting capability a parser serves.

mod encrypt;
mod sharding;

use std::fmt;

pub use encrypt::{EncryptRule, EncryptTable};
pub use sharding::{ShardingRule, TableRule};

/// The rule set a parser is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet<'r> {
    /// Sharding-aware rewriting.
    Sharding(&'r ShardingRule),
    /// Encrypt-aware rewriting.
    Encrypt(&'r EncryptRule),
}

impl RuleSet<'_> {
    /// Returns the rule set's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sharding(_) => "sharding",
            Self::Encrypt(_) => "encrypt",
        }
    }
}

impl fmt::Display for RuleSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
