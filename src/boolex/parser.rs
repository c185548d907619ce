//! Recursive-descent recognizer for boolex programs
//!
//! Grammar (terminals in capitals, `id` and `bool_value` are lexical classes):
//!
//! ```text
//! StmtList      -> Stmt StmtList | ε
//! Stmt          -> id = Expr | PRINT Expr
//! Expr          -> Term TermTail
//! TermTail      -> OR Term TermTail | ε
//! Term          -> Factor FactorTail
//! FactorTail    -> AND Factor FactorTail | ε
//! Factor        -> Statement StatementTail
//! Statement     -> NOT Statement | ε
//! StatementTail -> ( Expr ) | id | bool_value
//! ```
//!
//! The grammar is LL(1): one token of lookahead picks every alternative, so the
//! recognizer never backtracks. It builds no tree. A run either accepts the
//! whole program or stops at the first token that does not fit.
//!
//! Recursion depth grows with the nesting of the input, which the user controls.
//! [`RecognizerConfig::max_depth`] bounds it and turns runaway nesting into
//! [`ParseError::DepthExceeded`] instead of a stack overflow.

pub mod config;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod rules;

pub use config::{RecognizerConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use cursor::Cursor;
pub use error::{ErrorKind, Expected, ParseError, SyntaxError};
pub use grammar::NonTerminal;

use crate::boolex::lexer::{Scanner, Token, TokenSource};

/// Recognizes boolex programs under a fixed configuration
///
/// Holds no parse state: every call builds its own scanner and cursor, so one
/// recognizer can serve any number of runs, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Accept or reject a program given as text
    pub fn recognize(&self, source: &str) -> Result<(), ParseError> {
        self.recognize_tokens(Scanner::new(source))
    }

    /// Accept or reject the token stream produced by `tokens`
    pub fn recognize_tokens<S: TokenSource>(&self, tokens: S) -> Result<(), ParseError> {
        self.run(tokens, NonTerminal::StmtList, |cursor| {
            rules::stmt_list(cursor)?;
            // StmtList only returns on end of input
            debug_assert!(cursor.peek().is_end());
            Ok(())
        })
    }

    /// Accept or reject a lone expression, starting from `Expr` instead of
    /// `StmtList`. Anything after the expression is an error.
    pub fn recognize_expression(&self, source: &str) -> Result<(), ParseError> {
        self.run(Scanner::new(source), NonTerminal::Expr, |cursor| {
            rules::expr(cursor)?;
            cursor.expect(Token::EndOfInput, NonTerminal::Expr)
        })
    }

    fn run<S, F>(&self, tokens: S, start: NonTerminal, body: F) -> Result<(), ParseError>
    where
        S: TokenSource,
        F: FnOnce(&mut Cursor<S>) -> Result<(), ParseError>,
    {
        tracing::debug!(start = %start, max_depth = self.config.max_depth(), "parse started");

        let result = Cursor::new(tokens, self.config.max_depth())
            .map_err(ParseError::from)
            .and_then(|mut cursor| body(&mut cursor));

        match &result {
            Ok(()) => tracing::debug!("parse accepted"),
            Err(err) => tracing::debug!(kind = %err.kind(), error = %err, "parse rejected"),
        }
        result
    }
}

/// Accept or reject a program with the default configuration
pub fn parse(source: &str) -> Result<(), ParseError> {
    Recognizer::default().recognize(source)
}

/// Accept or reject a lone expression with the default configuration
pub fn parse_expression(source: &str) -> Result<(), ParseError> {
    Recognizer::default().recognize_expression(source)
}

/// Accept or reject a program with the given configuration
pub fn parse_with_config(source: &str, config: &RecognizerConfig) -> Result<(), ParseError> {
    Recognizer::new(*config).recognize(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolex::lexer::Position;

    #[test]
    fn test_empty_program_is_accepted() {
        assert_eq!(parse(""), Ok(()));
        assert_eq!(parse("  \n\t"), Ok(()));
        assert_eq!(parse("#"), Ok(()));
    }

    #[test]
    fn test_assignment() {
        assert_eq!(parse("x = 1"), Ok(()));
    }

    #[test]
    fn test_multiple_statements() {
        assert_eq!(parse("x = 1\ny = x AND t\nprint NOT (x OR y)"), Ok(()));
    }

    #[test]
    fn test_end_marker_stops_the_run() {
        assert_eq!(parse("print x # anything $ goes"), Ok(()));
    }

    #[test]
    fn test_missing_expression() {
        let err = parse("x =").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError {
                non_terminal: NonTerminal::Expr,
                found: Token::EndOfInput,
                expected: Expected::OneOf(NonTerminal::Expr.expected()),
                position: Position::new(1, 3),
            })
        );
    }

    #[test]
    fn test_lexical_error_wins_over_syntax() {
        let err = parse("x = $").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert_eq!(err.position(), Position::new(1, 4));
    }

    #[test]
    fn test_error_in_first_token() {
        let err = parse("= x").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError {
                non_terminal: NonTerminal::StmtList,
                found: Token::Equals,
                ..
            })
        ));
    }

    #[test]
    fn test_recognizer_is_reusable() {
        let recognizer = Recognizer::new(RecognizerConfig::new().with_max_depth(16));
        assert_eq!(recognizer.config().max_depth(), 16);
        assert!(recognizer.recognize("x = (y)").is_ok());
        assert!(recognizer.recognize("x = (y").is_err());
        assert!(recognizer.recognize("x = (y)").is_ok());
    }

    #[test]
    fn test_parse_with_config_applies_limit() {
        let config = RecognizerConfig::new().with_max_depth(3);
        assert_eq!(parse_with_config("x = y", &config), Ok(()));
        assert_eq!(
            parse_with_config("x = (y)", &config).unwrap_err().kind(),
            ErrorKind::Depth
        );
    }
}
