//! Token definitions for boolex programs
//!
//! This module defines every token the boolex scanner can produce. The tokens are
//! defined using the logos derive macro.
//!
//! Keywords and boolean literals are recognized by the lexer, not by the parser:
//! each spelling gets its own kind, and the longest match wins, so `tx`, `10` and
//! `printer` are plain identifiers while `t`, `1` and `print` are not. All
//! spellings are case-sensitive (`and` is an identifier, `AND` is the operator).
//!
//! `#` is the explicit end-of-input marker of the grammar. Running out of text
//! produces the same kind, synthesized by the [`Scanner`](super::Scanner).
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in a boolex program
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[logos(skip r"[ \t\n]+")]
pub enum Token {
    // Keywords
    #[token("print")]
    Print,
    #[token("AND")]
    And,
    #[token("OR")]
    Or,
    #[token("NOT")]
    Not,

    // Boolean literals, one kind per spelling. The one-character spellings
    // would tie with the identifier regex, so they carry an explicit priority.
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("t", priority = 3)]
    T,
    #[token("f", priority = 3)]
    F,
    #[token("0", priority = 3)]
    Zero,
    #[token("1", priority = 3)]
    One,

    // Single-character operators
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("=")]
    Equals,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("#")]
    EndOfInput,

    // Letters and digits; lower priority than the fixed spellings above
    #[regex(r"[A-Za-z0-9]+")]
    Identifier,
}

/// Expands to a pattern matching every boolean literal kind.
///
/// Dispatch on `bool_value` is literal-kind exact, so the grammar procedures use
/// this wherever the grammar names the `bool_value` class.
macro_rules! bool_value {
    () => {
        $crate::boolex::lexer::Token::True
            | $crate::boolex::lexer::Token::False
            | $crate::boolex::lexer::Token::T
            | $crate::boolex::lexer::Token::F
            | $crate::boolex::lexer::Token::Zero
            | $crate::boolex::lexer::Token::One
    };
}
pub(crate) use bool_value;

impl Token {
    /// Every boolean literal kind, in grammar-table order
    pub const BOOL_VALUES: [Token; 6] = [
        Token::True,
        Token::False,
        Token::T,
        Token::F,
        Token::Zero,
        Token::One,
    ];

    /// Every token kind the scanner can produce
    pub const ALL: [Token; 17] = [
        Token::Print,
        Token::And,
        Token::Or,
        Token::Not,
        Token::True,
        Token::False,
        Token::T,
        Token::F,
        Token::Zero,
        Token::One,
        Token::LeftParen,
        Token::RightParen,
        Token::Equals,
        Token::Bang,
        Token::Question,
        Token::EndOfInput,
        Token::Identifier,
    ];

    /// Check if this token is one of the boolean literals
    pub fn is_bool_value(&self) -> bool {
        matches!(self, bool_value!())
    }

    /// Check if this token marks the end of the program
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Print => "print",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Not => "NOT",
            Token::True => "true",
            Token::False => "false",
            Token::T => "t",
            Token::F => "f",
            Token::Zero => "0",
            Token::One => "1",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Equals => "=",
            Token::Bang => "!",
            Token::Question => "?",
            Token::EndOfInput => "end of input",
            Token::Identifier => "id",
        };
        f.write_str(name)
    }
}
