//! # boolex
//!
//! A recognizer for a small boolean-expression language with assignment and
//! print statements.
//!
//! The recognizer validates a program against a fixed LL(1) grammar using one
//! token of lookahead. It builds no tree and evaluates nothing: a program is
//! either accepted, or rejected with a single diagnostic naming the first
//! mismatch. See [`boolex::parser`] for the grammar.

pub mod boolex;

pub use boolex::parser::{
    parse, parse_expression, parse_with_config, ParseError, Recognizer, RecognizerConfig,
};
