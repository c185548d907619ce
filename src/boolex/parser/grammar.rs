//! Non-terminals of the boolex grammar and their FIRST/FOLLOW sets
//!
//! The tables here feed error messages and tests. Dispatch itself is done by the
//! exhaustive matches in [`rules`](super::rules), which must agree with them; the
//! tests below recompute both sets from the productions to keep the tables honest.

use crate::boolex::lexer::Token;
use serde::Serialize;
use std::fmt;

/// Tokens that can start an expression: NOT, (, id, bool_value
const EXPR_FIRST: [Token; 9] = [
    Token::Not,
    Token::LeftParen,
    Token::Identifier,
    Token::True,
    Token::False,
    Token::T,
    Token::F,
    Token::Zero,
    Token::One,
];
/// Tokens that can start an operand: (, id, bool_value
const OPERAND_FIRST: [Token; 8] = [
    Token::LeftParen,
    Token::Identifier,
    Token::True,
    Token::False,
    Token::T,
    Token::F,
    Token::Zero,
    Token::One,
];
const STMT_FIRST: [Token; 2] = [Token::Identifier, Token::Print];
const STMT_FOLLOW: [Token; 3] = [Token::Identifier, Token::Print, Token::EndOfInput];
/// ), id, print, end of input
const EXPR_FOLLOW: [Token; 4] = [
    Token::RightParen,
    Token::Identifier,
    Token::Print,
    Token::EndOfInput,
];
/// OR, ), id, print, end of input
const TERM_FOLLOW: [Token; 5] = [
    Token::Or,
    Token::RightParen,
    Token::Identifier,
    Token::Print,
    Token::EndOfInput,
];
/// AND, OR, ), id, print, end of input
const FACTOR_FOLLOW: [Token; 6] = [
    Token::And,
    Token::Or,
    Token::RightParen,
    Token::Identifier,
    Token::Print,
    Token::EndOfInput,
];

/// One procedure of the recognizer per non-terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NonTerminal {
    StmtList,
    Stmt,
    Expr,
    TermTail,
    Term,
    FactorTail,
    Factor,
    Statement,
    StatementTail,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 9] = [
        NonTerminal::StmtList,
        NonTerminal::Stmt,
        NonTerminal::Expr,
        NonTerminal::TermTail,
        NonTerminal::Term,
        NonTerminal::FactorTail,
        NonTerminal::Factor,
        NonTerminal::Statement,
        NonTerminal::StatementTail,
    ];

    /// Terminals that can begin a non-empty derivation
    pub fn first(self) -> &'static [Token] {
        match self {
            NonTerminal::StmtList | NonTerminal::Stmt => &STMT_FIRST,
            NonTerminal::Expr | NonTerminal::Term | NonTerminal::Factor => &EXPR_FIRST,
            NonTerminal::TermTail => &[Token::Or],
            NonTerminal::FactorTail => &[Token::And],
            NonTerminal::Statement => &[Token::Not],
            NonTerminal::StatementTail => &OPERAND_FIRST,
        }
    }

    /// Terminals that can appear right after the non-terminal
    pub fn follow(self) -> &'static [Token] {
        match self {
            NonTerminal::StmtList => &[Token::EndOfInput],
            NonTerminal::Stmt => &STMT_FOLLOW,
            NonTerminal::Expr | NonTerminal::TermTail => &EXPR_FOLLOW,
            NonTerminal::Term | NonTerminal::FactorTail => &TERM_FOLLOW,
            NonTerminal::Factor | NonTerminal::StatementTail => &FACTOR_FOLLOW,
            NonTerminal::Statement => &OPERAND_FIRST,
        }
    }

    /// Whether ε is in FIRST
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            NonTerminal::StmtList
                | NonTerminal::TermTail
                | NonTerminal::FactorTail
                | NonTerminal::Statement
        )
    }

    /// Every token that lets this non-terminal make progress or return: FIRST,
    /// plus FOLLOW when it is nullable
    pub fn expected(self) -> Vec<Token> {
        let mut expected = self.first().to_vec();
        if self.is_nullable() {
            for token in self.follow() {
                if !expected.contains(token) {
                    expected.push(*token);
                }
            }
        }
        expected
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Render a token set the way the grammar tables write it, folding the six
/// boolean literals into `bool_value` when they all appear.
pub fn describe_tokens(tokens: &[Token]) -> String {
    let all_literals = Token::BOOL_VALUES.iter().all(|b| tokens.contains(b));
    let mut names = Vec::new();
    let mut literals_written = false;

    for token in tokens {
        if all_literals && token.is_bool_value() {
            if !literals_written {
                names.push("bool_value".to_string());
                literals_written = true;
            }
        } else {
            names.push(token.to_string());
        }
    }

    names.join(", ")
}
