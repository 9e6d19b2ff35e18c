//! Forward-only token cursor shared by the router and legacy parsers.

use tracing::trace;

use crate::dialect::DatabaseType;
use crate::parser::ParseError;

use super::{Keyword, Lexer, Token};

/// A forward-only cursor over the tokens of one statement.
///
/// The stream is tokenized eagerly so that clause guards can look several
/// tokens ahead without consuming anything. The token list always ends
/// with `Eof`; advancing past it keeps returning `Eof` without moving.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    source: &'a str,
    database_type: DatabaseType,
    tokens: Vec<Token>,
    /// Number of tokens consumed so far.
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Tokenizes `source` with the keyword table of `database_type`.
    #[must_use]
    pub fn new(source: &'a str, database_type: DatabaseType) -> Self {
        let tokens = Lexer::new(source, database_type).tokenize();
        Self {
            source,
            database_type,
            tokens,
            pos: 0,
        }
    }

    /// The dialect this stream was tokenized for.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The statement text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Consumes the next token and returns it.
    pub fn advance(&mut self) -> &Token {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        let token = &self.tokens[self.pos - 1];
        trace!(position = self.pos, token = %token.kind, "advance");
        token
    }

    /// The most recently consumed token, `None` before the first advance.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|i| &self.tokens[i])
    }

    /// The next unconsumed token.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// The unconsumed token `n` positions ahead; `Eof` past the end.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// All unconsumed tokens, ending with `Eof`.
    #[must_use]
    pub fn upcoming(&self) -> &[Token] {
        &self.tokens[self.pos.min(self.tokens.len() - 1)..]
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once nothing but `Eof` is left.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// The original text of a token.
    #[must_use]
    pub fn text(&self, token: &Token) -> &'a str {
        token.span.slice(self.source)
    }

    /// Returns true if the upcoming tokens start with `pattern`.
    #[must_use]
    pub fn starts_with(&self, pattern: &[Keyword]) -> bool {
        let upcoming = self.upcoming();
        !pattern.is_empty()
            && pattern.len() <= upcoming.len()
            && pattern
                .iter()
                .zip(upcoming)
                .all(|(keyword, token)| token.is_keyword(*keyword))
    }

    /// Fails with `UnsupportedSyntax` if the upcoming tokens start with
    /// any of `patterns`. Never consumes a token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedSyntax`] naming the first upcoming
    /// token when a pattern matches.
    pub fn guard(&self, patterns: &[&[Keyword]]) -> Result<(), ParseError> {
        if patterns.iter().any(|pattern| self.starts_with(pattern)) {
            return Err(ParseError::unsupported(self.peek()));
        }
        Ok(())
    }

    /// Consumes the next token if it is `keyword`.
    pub fn skip_if(&mut self, keyword: impl Into<Keyword>) -> bool {
        if self.peek().is_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }
}
