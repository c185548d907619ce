//! Lexer module for boolex programs
//!
//! This module contains the scanner the recognizer pulls tokens from: the token
//! definitions, the pull-based [`Scanner`] with line/column tracking, and
//! convenience functions for tokenizing whole programs.
//!
//! Lexicon
//!
//! Identifiers are runs of ASCII letters and digits. The single-character
//! operators are `! ? ( ) = #`. Spaces, tabs and newlines separate tokens and are
//! otherwise ignored. Any other character is a lexical error.

pub mod lexer_impl;
pub mod location;
pub mod scanner;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_positions};
pub use location::{Position, SourceLocation};
pub use scanner::{Lexeme, LexicalError, Scanner, TokenSource};
pub(crate) use tokens::bool_value;
pub use tokens::Token;
