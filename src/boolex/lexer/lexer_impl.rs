//! Convenience functions for tokenizing whole boolex programs

use super::scanner::{Lexeme, LexicalError, Scanner};
use super::tokens::Token;
use logos::Logos;

/// Tokenize a program and collect the token kinds, ending with end of input.
///
/// Unrecognized characters are dropped rather than reported.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for token in Token::lexer(source).filter_map(|result| result.ok()) {
        tokens.push(token);
        if token.is_end() {
            return tokens;
        }
    }

    tokens.push(Token::EndOfInput);
    tokens
}

/// Tokenize a program keeping text and positions, stopping at the first error
pub fn tokenize_with_positions(source: &str) -> Result<Vec<Lexeme>, LexicalError> {
    Scanner::new(source).collect()
}
