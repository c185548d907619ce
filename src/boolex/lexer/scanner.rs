//! Pull-based scanner over boolex source text
//!
//! The recognizer never sees the logos lexer directly. It pulls one [`Lexeme`] at
//! a time through the [`TokenSource`] trait, which is all it needs: the next token
//! and the position of the last one read.

use super::location::{Position, SourceLocation};
use super::tokens::Token;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// A token together with its matched text and where it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub position: Position,
}

impl Lexeme {
    pub fn new(token: Token, text: impl Into<String>, position: Position) -> Self {
        Self {
            token,
            text: text.into(),
            position,
        }
    }
}

/// The remaining input could not be classified as any token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub position: Position,
    /// The offending text, empty if it could not be sliced out
    pub text: String,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized input {:?} at {}", self.text, self.position)
    }
}

impl std::error::Error for LexicalError {}

/// The interface the recognizer consumes
pub trait TokenSource {
    /// Scan the next token. After end of input, keeps returning end of input.
    fn next_lexeme(&mut self) -> Result<Lexeme, LexicalError>;

    /// Position of the most recently scanned token or failure
    fn position(&self) -> Position;
}

/// Scanner backed by the logos lexer
pub struct Scanner<'source> {
    source: &'source str,
    lexer: logos::Lexer<'source, Token>,
    location: SourceLocation<'source>,
    position: Position,
    /// Set once end of input has been scanned; nothing past it is read
    end: Option<Lexeme>,
    /// Set once the iterator has yielded its last item
    done: bool,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
            location: SourceLocation::new(source),
            position: Position::default(),
            end: None,
            done: false,
        }
    }
}

impl TokenSource for Scanner<'_> {
    fn next_lexeme(&mut self) -> Result<Lexeme, LexicalError> {
        if let Some(end) = &self.end {
            return Ok(end.clone());
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                let span = self.lexer.span();
                self.position = self.location.byte_to_position(span.start);
                let lexeme = Lexeme::new(token, self.lexer.slice(), self.position);
                if token.is_end() {
                    self.end = Some(lexeme.clone());
                }
                Ok(lexeme)
            }
            Some(Err(())) => {
                let span = self.lexer.span();
                self.position = self.location.byte_to_position(span.start);
                Err(LexicalError {
                    position: self.position,
                    text: self.source.get(span).unwrap_or_default().to_string(),
                })
            }
            None => {
                self.position = self.location.end();
                let lexeme = Lexeme::new(Token::EndOfInput, "", self.position);
                self.end = Some(lexeme.clone());
                Ok(lexeme)
            }
        }
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Yields every lexeme up to and including end of input, or up to the first
/// lexical error.
impl Iterator for Scanner<'_> {
    type Item = Result<Lexeme, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_lexeme();
        self.done = match &result {
            Ok(lexeme) => lexeme.token.is_end(),
            Err(_) => true,
        };
        Some(result)
    }
}
