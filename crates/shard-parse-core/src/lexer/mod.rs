//! SQL lexer and token stream.
//!
//! The lexer is dialect-aware: each [`DatabaseType`](crate::DatabaseType)
//! resolves bare words against its own keyword table, so the same lexeme
//! can produce different [`Keyword`] tags in different dialects.

mod keyword;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use keyword::{DefaultKeyword, Keyword};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
