//! Single-token lookahead over a [`TokenSource`]
//!
//! The cursor owns the scanner and the one current token. It is passed by
//! mutable reference into every grammar procedure; nothing else holds parse
//! state, so independent runs never share anything.

use super::config::MAX_SUPPORTED_DEPTH;
use super::error::{Expected, ParseError, SyntaxError};
use super::grammar::NonTerminal;
use crate::boolex::lexer::{Lexeme, LexicalError, Token, TokenSource};

pub struct Cursor<S: TokenSource> {
    source: S,
    current: Lexeme,
    depth: usize,
    max_depth: usize,
}

impl<S: TokenSource> Cursor<S> {
    /// Prime the cursor with the first lookahead. `max_depth` is clamped to
    /// [`MAX_SUPPORTED_DEPTH`].
    pub fn new(mut source: S, max_depth: usize) -> Result<Self, LexicalError> {
        let current = source.next_lexeme()?;
        tracing::trace!(token = %current.token, position = %current.position, "lookahead");
        Ok(Self {
            source,
            current,
            depth: 0,
            max_depth: max_depth.min(MAX_SUPPORTED_DEPTH),
        })
    }

    /// Kind of the current lookahead. Never consumes.
    pub fn peek(&self) -> Token {
        self.current.token
    }

    /// Replace the lookahead with the next token from the source
    pub fn advance(&mut self) -> Result<(), LexicalError> {
        self.current = self.source.next_lexeme()?;
        tracing::trace!(
            token = %self.current.token,
            position = %self.current.position,
            "lookahead"
        );
        Ok(())
    }

    /// Consume the lookahead if it is `expected`, otherwise fail naming the
    /// procedure that wanted it
    pub fn expect(&mut self, expected: Token, within: NonTerminal) -> Result<(), ParseError> {
        if self.current.token == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(SyntaxError {
                non_terminal: within,
                found: self.current.token,
                expected: Expected::Terminal(expected),
                position: self.current.position,
            }
            .into())
        }
    }

    /// The error for a lookahead outside every alternative of `within`
    pub fn no_alternative(&self, within: NonTerminal) -> ParseError {
        SyntaxError {
            non_terminal: within,
            found: self.current.token,
            expected: Expected::OneOf(within.expected()),
            position: self.current.position,
        }
        .into()
    }

    /// Run `body` one nesting level deeper, failing instead if the limit is
    /// already reached
    pub fn nested<F>(&mut self, within: NonTerminal, body: F) -> Result<(), ParseError>
    where
        F: FnOnce(&mut Self) -> Result<(), ParseError>,
    {
        if self.depth >= self.max_depth {
            return Err(ParseError::DepthExceeded {
                non_terminal: within,
                limit: self.max_depth,
                position: self.current.position,
            });
        }

        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Number of nesting levels currently active
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolex::lexer::{Position, Scanner};

    fn cursor(source: &str) -> Cursor<Scanner<'_>> {
        Cursor::new(Scanner::new(source), 4).unwrap()
    }

    #[test]
    fn test_primed_with_first_token() {
        let cursor = cursor("print x");
        assert_eq!(cursor.peek(), Token::Print);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = cursor("x");
        assert_eq!(cursor.peek(), Token::Identifier);
        assert_eq!(cursor.peek(), Token::Identifier);
    }

    #[test]
    fn test_expect_advances_on_match() {
        let mut cursor = cursor("x = 1");
        cursor.expect(Token::Identifier, NonTerminal::Stmt).unwrap();
        assert_eq!(cursor.peek(), Token::Equals);
        cursor.expect(Token::Equals, NonTerminal::Stmt).unwrap();
        assert_eq!(cursor.peek(), Token::One);
    }

    #[test]
    fn test_expect_mismatch_leaves_lookahead() {
        let mut cursor = cursor("x 1");
        cursor.expect(Token::Identifier, NonTerminal::Stmt).unwrap();
        let err = cursor.expect(Token::Equals, NonTerminal::Stmt).unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError {
                non_terminal: NonTerminal::Stmt,
                found: Token::One,
                expected: Expected::Terminal(Token::Equals),
                position: Position::new(1, 2),
            })
        );
        assert_eq!(cursor.peek(), Token::One);
    }

    #[test]
    fn test_advance_reports_lexical_error() {
        let mut cursor = cursor("x %");
        let err = cursor.advance().unwrap_err();
        assert_eq!(err.position, Position::new(1, 2));
    }

    #[test]
    fn test_priming_reports_lexical_error() {
        let err = Cursor::new(Scanner::new("@"), 4).err().unwrap();
        assert_eq!(err.position, Position::new(1, 0));
    }

    #[test]
    fn test_nested_tracks_depth() {
        let mut cursor = cursor("x");
        cursor
            .nested(NonTerminal::Expr, |cursor| {
                assert_eq!(cursor.depth(), 1);
                cursor.nested(NonTerminal::Factor, |cursor| {
                    assert_eq!(cursor.depth(), 2);
                    Ok(())
                })
            })
            .unwrap();
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        fn descend<S: TokenSource>(cursor: &mut Cursor<S>) -> Result<(), ParseError> {
            cursor.nested(NonTerminal::Expr, descend)
        }

        // Unbounded descent still stops at the supported maximum
        let mut cursor = Cursor::new(Scanner::new("x"), usize::MAX).unwrap();
        assert!(matches!(
            descend(&mut cursor),
            Err(ParseError::DepthExceeded { limit: MAX_SUPPORTED_DEPTH, .. })
        ));
    }

    #[test]
    fn test_nested_enforces_limit() {
        let mut cursor = Cursor::new(Scanner::new("x"), 1).unwrap();
        let err = cursor
            .nested(NonTerminal::Expr, |cursor| {
                cursor.nested(NonTerminal::Factor, |_| Ok(()))
            })
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::DepthExceeded {
                non_terminal: NonTerminal::Factor,
                limit: 1,
                position: Position::new(1, 0),
            }
        );
    }
}
