//! Main module for boolex library functionality

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod processor;
