//! Error types for the recognizer
//!
//! Parsing stops at the first failure, so a run produces at most one of these.

use super::grammar::{describe_tokens, NonTerminal};
use crate::boolex::lexer::{LexicalError, Position, Token};
use serde::Serialize;
use std::fmt;

/// What a failing procedure was prepared to accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A dispatch found no alternative for the lookahead
    OneOf(Vec<Token>),
    /// A terminal of the production being matched did not appear
    Terminal(Token),
}

impl Expected {
    /// Every acceptable token
    pub fn tokens(&self) -> Vec<Token> {
        match self {
            Expected::OneOf(tokens) => tokens.clone(),
            Expected::Terminal(token) => vec![*token],
        }
    }
}

/// The lookahead does not fit the grammar at this point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub non_terminal: NonTerminal,
    pub found: Token,
    pub expected: Expected,
    pub position: Position,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Expected::OneOf(tokens) => write!(
                f,
                "in {}: found {}, expected one of {}",
                self.non_terminal,
                self.found,
                describe_tokens(tokens)
            ),
            Expected::Terminal(token) => write!(
                f,
                "in {}: found {} instead of {}",
                self.non_terminal, self.found, token
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Broad classification of a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Depth,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical"),
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Depth => write!(f, "depth"),
        }
    }
}

/// Errors that can stop a parse run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner could not classify the remaining input
    Lexical(LexicalError),
    /// A procedure found no way to continue
    Syntax(SyntaxError),
    /// Expression nesting went past the configured limit
    DepthExceeded {
        non_terminal: NonTerminal,
        limit: usize,
        position: Position,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Lexical(_) => ErrorKind::Lexical,
            ParseError::Syntax(_) => ErrorKind::Syntax,
            ParseError::DepthExceeded { .. } => ErrorKind::Depth,
        }
    }

    /// Where the run failed
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lexical(err) => err.position,
            ParseError::Syntax(err) => err.position,
            ParseError::DepthExceeded { position, .. } => *position,
        }
    }

    /// The failure without its position, as shown in diagnostics
    pub fn message(&self) -> String {
        match self {
            ParseError::Lexical(err) => format!("unrecognized input {:?}", err.text),
            ParseError::Syntax(err) => err.to_string(),
            ParseError::DepthExceeded {
                non_terminal,
                limit,
                ..
            } => format!(
                "in {}: nesting depth exceeds the limit of {}",
                non_terminal, limit
            ),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.position())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(err) => Some(err),
            ParseError::Syntax(err) => Some(err),
            ParseError::DepthExceeded { .. } => None,
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(err: LexicalError) -> Self {
        ParseError::Lexical(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}
