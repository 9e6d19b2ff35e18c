//! Parser error types.

use crate::dialect::DatabaseType;
use crate::lexer::{Span, Token, TokenKind};

/// Errors raised while routing or parsing a statement.
///
/// Every error is final for the statement: there is no partial result and
/// no recovery.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The statement, or one of its clauses, is outside what the selected
    /// parser supports.
    #[error("Unsupported SQL syntax: {found} at position {span}")]
    UnsupportedSyntax {
        /// The offending token.
        found: TokenKind,
        /// Where it was found.
        span: Span,
    },

    /// The entry point does not support this database at all.
    #[error("Can not support {0}")]
    UnsupportedDialect(DatabaseType),

    /// Malformed input.
    #[error("{message} at position {span}")]
    Syntax {
        /// The error message.
        message: String,
        /// The location of the error.
        span: Span,
        /// Expected tokens (if applicable).
        expected: Option<String>,
        /// The actual token found.
        found: Option<TokenKind>,
    },
}

impl ParseError {
    /// Creates an `UnsupportedSyntax` error for `token`.
    #[must_use]
    pub fn unsupported(token: &Token) -> Self {
        Self::UnsupportedSyntax {
            found: token.kind.clone(),
            span: token.span,
        }
    }

    /// Creates a syntax error with a plain message.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self::Syntax {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        let expected: String = expected.into();
        let message = if found.is_eof() {
            format!("Unexpected end of input: expected {expected}")
        } else {
            format!("Unexpected token: expected {expected}, found {}", found.kind)
        };
        Self::Syntax {
            message,
            span: found.span,
            expected: Some(expected),
            found: Some(found.kind.clone()),
        }
    }

    /// Returns true for the unsupported-syntax family of errors.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSyntax { .. } | Self::UnsupportedDialect(_)
        )
    }

    /// The token kind the error points at, if any.
    #[must_use]
    pub const fn found(&self) -> Option<&TokenKind> {
        match self {
            Self::UnsupportedSyntax { found, .. } => Some(found),
            Self::Syntax { found, .. } => found.as_ref(),
            Self::UnsupportedDialect(_) => None,
        }
    }
}
