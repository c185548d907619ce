//! User-visible diagnostics
//!
//! A rejected run produces exactly one line:
//!
//! ```text
//! Scanner Error: at line 2 char 5
//! Parser Error: in Expr: found end of input, expected one of NOT, (, id, bool_value at line 1 char 4
//! ```
//!
//! Lines are 1-based. `char` is the 0-based column of the failure plus one.

use crate::boolex::parser::{ErrorKind, ParseError};
use serde::Serialize;
use std::fmt;

/// The single report of a rejected run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    /// What went wrong; absent for scanner failures, which only report a place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub line: usize,
    #[serde(rename = "char")]
    pub character: usize,
}

impl Diagnostic {
    pub fn from_error(error: &ParseError) -> Self {
        let position = error.position();
        let message = match error.kind() {
            ErrorKind::Lexical => None,
            ErrorKind::Syntax | ErrorKind::Depth => Some(error.message()),
        };

        Self {
            kind: error.kind(),
            message,
            line: position.line,
            character: position.char_number(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            None => write!(
                f,
                "Scanner Error: at line {} char {}",
                self.line, self.character
            ),
            Some(message) => write!(
                f,
                "Parser Error: {} at line {} char {}",
                message, self.line, self.character
            ),
        }
    }
}
