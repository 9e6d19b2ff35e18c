//! Dialect-aware SQL tokenizer.

use crate::dialect::{DatabaseType, Dialect};

use super::{Span, Token, TokenKind};

/// A lexer that tokenizes SQL input using one dialect's keyword table.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Keyword table and quoting rules.
    dialect: &'static dyn Dialect,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input and dialect.
    #[must_use]
    pub fn new(input: &'a str, database_type: DatabaseType) -> Self {
        Self {
            input,
            dialect: database_type.dialect(),
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // MySQL also accepts # line comments
            if self.peek() == Some('#') && self.dialect.hash_comments() {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Scans a bare word and resolves it against the keyword table.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(Self::is_word_char) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        match self.dialect.keyword(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a delimited identifier. A doubled closing delimiter is an
    /// escaped delimiter.
    fn scan_quoted_identifier(&mut self, close: char) -> Token {
        self.advance(); // opening delimiter
        let mut name = String::new();

        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if self.peek() == Some(close) {
                        name.push(close);
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => name.push(c),
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated quoted identifier",
                    )));
                }
            }
        }

        self.make_token(TokenKind::Identifier(name))
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E')
            && self
                .peek_next()
                .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-')
        {
            is_float = true;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(f) => self.make_token(TokenKind::Float(f)),
                Err(e) => self.make_token(TokenKind::Error(format!("Invalid float: {e}"))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(i) => self.make_token(TokenKind::Integer(i)),
                Err(e) => self.make_token(TokenKind::Error(format!("Invalid integer: {e}"))),
            }
        }
    }

    /// Scans a single-quoted string literal.
    fn scan_string(&mut self) -> Token {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        value.push('\'');
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some('\\') if self.dialect.backslash_escapes() => match self.advance() {
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) => value.push(c),
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated string literal",
                    )));
                }
            }
        }

        self.make_token(TokenKind::String(value))
    }

    /// Scans `@name` or `@@name`.
    fn scan_variable(&mut self) -> Token {
        self.advance(); // @
        if self.peek() == Some('@') {
            self.advance();
        }
        let name_start = self.pos;
        while self.peek().is_some_and(|c| Self::is_word_char(c) || c == '.') {
            self.advance();
        }
        if self.pos == name_start {
            return self.make_token(TokenKind::Error(String::from("Empty variable name")));
        }
        // keeps the second @ of a system variable
        self.make_token(TokenKind::Variable(String::from(
            &self.input[self.start + 1..self.pos],
        )))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '\'' => return self.scan_string(),
            '"' => return self.scan_quoted_identifier('"'),
            '`' if self.dialect.identifier_quote() == '`' => {
                return self.scan_quoted_identifier('`');
            }
            '[' if self.dialect.identifier_quote() == '[' => {
                return self.scan_quoted_identifier(']');
            }
            '@' => return self.scan_variable(),
            c if c.is_ascii_digit() => return self.scan_number(),
            c if c.is_alphabetic() || c == '_' => return self.scan_word(),
            _ => {}
        }

        self.advance();
        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '?' => self.make_token(TokenKind::Question),
            '.' => self.make_token(TokenKind::Dot),
            '=' => self.make_token(TokenKind::Eq),
            ':' => {
                if self.peek() == Some(':') {
                    self.advance();
                    self.make_token(TokenKind::DoubleColon)
                } else {
                    self.make_token(TokenKind::Colon)
                }
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                self.make_token(TokenKind::NotEq)
            }
            '|' if self.peek() == Some('|') => {
                self.advance();
                self.make_token(TokenKind::Concat)
            }
            _ => self.make_token(TokenKind::Error(format!("Unexpected character: {c}"))),
        }
    }

    /// Tokenizes the entire input. The last token is always `Eof`.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySqlKeyword, OracleKeyword, PostgreSqlKeyword};
    use crate::lexer::{DefaultKeyword, Keyword};

    fn token_kinds(input: &str, database_type: DatabaseType) -> Vec<TokenKind> {
        Lexer::new(input, database_type)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn kw(keyword: DefaultKeyword) -> TokenKind {
        TokenKind::Keyword(Keyword::Default(keyword))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds("", DatabaseType::MySql), vec![TokenKind::Eof]);
        assert_eq!(token_kinds("  \n\t ", DatabaseType::Oracle), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- note\n /* block */ 1", DatabaseType::PostgreSql),
            vec![kw(DefaultKeyword::Select), TokenKind::Integer(1), TokenKind::Eof]
        );
    }

    #[test]
    fn test_hash_comment_is_mysql_only() {
        assert_eq!(
            token_kinds("COMMIT # done", DatabaseType::MySql),
            vec![kw(DefaultKeyword::Commit), TokenKind::Eof]
        );
        assert!(matches!(
            token_kinds("COMMIT # done", DatabaseType::PostgreSql)[1],
            TokenKind::Error(_)
        ));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe", DatabaseType::Oracle),
            vec![
                kw(DefaultKeyword::Select),
                kw(DefaultKeyword::From),
                kw(DefaultKeyword::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_dialect_keywords_resolve_per_table() {
        assert_eq!(
            token_kinds("SHOW", DatabaseType::MySql)[0],
            TokenKind::Keyword(Keyword::MySql(MySqlKeyword::Show))
        );
        assert_eq!(
            token_kinds("show", DatabaseType::PostgreSql)[0],
            TokenKind::Keyword(Keyword::PostgreSql(PostgreSqlKeyword::Show))
        );
        assert_eq!(
            token_kinds("SHOW", DatabaseType::Oracle)[0],
            TokenKind::Identifier(String::from("SHOW"))
        );
        assert_eq!(
            token_kinds("connect", DatabaseType::Oracle)[0],
            TokenKind::Keyword(Keyword::Oracle(OracleKeyword::Connect))
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(
            token_kinds("\"Order\" `line`", DatabaseType::MySql),
            vec![
                TokenKind::Identifier(String::from("Order")),
                TokenKind::Identifier(String::from("line")),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            token_kinds("[order id]", DatabaseType::SqlServer),
            vec![TokenKind::Identifier(String::from("order id")), TokenKind::Eof]
        );
        assert_eq!(
            token_kinds("[1]", DatabaseType::PostgreSql),
            vec![
                TokenKind::LeftBracket,
                TokenKind::Integer(1),
                TokenKind::RightBracket,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 3.5 1e3", DatabaseType::H2),
            vec![
                TokenKind::Integer(42),
                TokenKind::Float(3.5),
                TokenKind::Float(1e3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            token_kinds("'it''s'", DatabaseType::Oracle),
            vec![TokenKind::String(String::from("it's")), TokenKind::Eof]
        );
        assert_eq!(
            token_kinds(r"'a\'b'", DatabaseType::MySql),
            vec![TokenKind::String(String::from("a'b")), TokenKind::Eof]
        );
        assert!(matches!(
            token_kinds("'open", DatabaseType::MySql)[0],
            TokenKind::Error(_)
        ));
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            token_kinds("@@autocommit = @x", DatabaseType::MySql),
            vec![
                TokenKind::Variable(String::from("@autocommit")),
                TokenKind::Eq,
                TokenKind::Variable(String::from("x")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("= != <> < <= > >= || ::", DatabaseType::PostgreSql),
            vec![
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::DoubleColon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("SELECT id", DatabaseType::MySql).tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::new(9, 9));
    }
}
