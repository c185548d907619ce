//! Grammar procedures, one per non-terminal
//!
//! Each procedure makes a single dispatch decision on the lookahead:
//! - lookahead in FIRST of an alternative: descend into that alternative
//! - nullable and lookahead in FOLLOW: take ε and return without consuming
//! - otherwise: fail naming the procedure and what it would have accepted
//!
//! Every `match` lists all token kinds with no wildcard arm, so a new token kind
//! does not compile until each dispatch decision accounts for it.
//!
//! The right-recursive tails (`StmtList`, `TermTail`, `FactorTail`) are written as
//! loops: each iteration is one application of the recursive alternative, and the
//! call stack stays flat no matter how many statements or operators there are.
//! Stack growth therefore comes only from `Expr`, `Factor` and `Statement`, which
//! run under the cursor's depth guard.

use super::cursor::Cursor;
use super::error::ParseError;
use super::grammar::NonTerminal;
use crate::boolex::lexer::{bool_value, Token, TokenSource};

type Outcome = Result<(), ParseError>;

/// StmtList -> Stmt StmtList | ε
pub fn stmt_list<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    loop {
        tracing::trace!(lookahead = %cursor.peek(), "StmtList");
        match cursor.peek() {
            Token::Identifier | Token::Print => stmt(cursor)?,
            Token::EndOfInput => return Ok(()),
            Token::And
            | Token::Or
            | Token::Not
            | bool_value!()
            | Token::LeftParen
            | Token::RightParen
            | Token::Equals
            | Token::Bang
            | Token::Question => return Err(cursor.no_alternative(NonTerminal::StmtList)),
        }
    }
}

/// Stmt -> id = Expr | print Expr
pub fn stmt<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    tracing::trace!(lookahead = %cursor.peek(), "Stmt");
    match cursor.peek() {
        Token::Identifier => {
            cursor.expect(Token::Identifier, NonTerminal::Stmt)?;
            cursor.expect(Token::Equals, NonTerminal::Stmt)?;
            expr(cursor)
        }
        Token::Print => {
            cursor.expect(Token::Print, NonTerminal::Stmt)?;
            expr(cursor)
        }
        Token::And
        | Token::Or
        | Token::Not
        | bool_value!()
        | Token::LeftParen
        | Token::RightParen
        | Token::Equals
        | Token::Bang
        | Token::Question
        | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::Stmt)),
    }
}

/// Expr -> Term TermTail
pub fn expr<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    cursor.nested(NonTerminal::Expr, |cursor| {
        tracing::trace!(lookahead = %cursor.peek(), depth = cursor.depth(), "Expr");
        match cursor.peek() {
            Token::Not | Token::LeftParen | Token::Identifier | bool_value!() => {
                term(cursor)?;
                term_tail(cursor)
            }
            Token::Print
            | Token::And
            | Token::Or
            | Token::RightParen
            | Token::Equals
            | Token::Bang
            | Token::Question
            | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::Expr)),
        }
    })
}

/// TermTail -> OR Term TermTail | ε
pub fn term_tail<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    loop {
        tracing::trace!(lookahead = %cursor.peek(), "TermTail");
        match cursor.peek() {
            Token::Or => {
                cursor.expect(Token::Or, NonTerminal::TermTail)?;
                term(cursor)?;
            }
            Token::RightParen | Token::Identifier | Token::Print | Token::EndOfInput => {
                return Ok(())
            }
            Token::And
            | Token::Not
            | bool_value!()
            | Token::LeftParen
            | Token::Equals
            | Token::Bang
            | Token::Question => return Err(cursor.no_alternative(NonTerminal::TermTail)),
        }
    }
}

/// Term -> Factor FactorTail
pub fn term<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    tracing::trace!(lookahead = %cursor.peek(), "Term");
    match cursor.peek() {
        Token::Not | Token::LeftParen | Token::Identifier | bool_value!() => {
            factor(cursor)?;
            factor_tail(cursor)
        }
        Token::Print
        | Token::And
        | Token::Or
        | Token::RightParen
        | Token::Equals
        | Token::Bang
        | Token::Question
        | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::Term)),
    }
}

/// FactorTail -> AND Factor FactorTail | ε
pub fn factor_tail<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    loop {
        tracing::trace!(lookahead = %cursor.peek(), "FactorTail");
        match cursor.peek() {
            Token::And => {
                cursor.expect(Token::And, NonTerminal::FactorTail)?;
                factor(cursor)?;
            }
            Token::Or
            | Token::RightParen
            | Token::Identifier
            | Token::Print
            | Token::EndOfInput => return Ok(()),
            Token::Not
            | bool_value!()
            | Token::LeftParen
            | Token::Equals
            | Token::Bang
            | Token::Question => return Err(cursor.no_alternative(NonTerminal::FactorTail)),
        }
    }
}

/// Factor -> Statement StatementTail
pub fn factor<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    cursor.nested(NonTerminal::Factor, |cursor| {
        tracing::trace!(lookahead = %cursor.peek(), depth = cursor.depth(), "Factor");
        match cursor.peek() {
            Token::Not | Token::LeftParen | Token::Identifier | bool_value!() => {
                statement(cursor)?;
                statement_tail(cursor)
            }
            Token::Print
            | Token::And
            | Token::Or
            | Token::RightParen
            | Token::Equals
            | Token::Bang
            | Token::Question
            | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::Factor)),
        }
    })
}

/// Statement -> NOT Statement | ε
pub fn statement<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    cursor.nested(NonTerminal::Statement, |cursor| {
        tracing::trace!(lookahead = %cursor.peek(), depth = cursor.depth(), "Statement");
        match cursor.peek() {
            Token::Not => {
                cursor.expect(Token::Not, NonTerminal::Statement)?;
                statement(cursor)
            }
            Token::LeftParen | Token::Identifier | bool_value!() => Ok(()),
            Token::Print
            | Token::And
            | Token::Or
            | Token::RightParen
            | Token::Equals
            | Token::Bang
            | Token::Question
            | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::Statement)),
        }
    })
}

/// StatementTail -> ( Expr ) | id | bool_value
pub fn statement_tail<S: TokenSource>(cursor: &mut Cursor<S>) -> Outcome {
    tracing::trace!(lookahead = %cursor.peek(), "StatementTail");
    match cursor.peek() {
        Token::LeftParen => {
            cursor.expect(Token::LeftParen, NonTerminal::StatementTail)?;
            expr(cursor)?;
            cursor.expect(Token::RightParen, NonTerminal::StatementTail)
        }
        Token::Identifier => cursor.expect(Token::Identifier, NonTerminal::StatementTail),
        bool_value!() => {
            let literal = cursor.peek();
            cursor.expect(literal, NonTerminal::StatementTail)
        }
        Token::Print
        | Token::And
        | Token::Or
        | Token::Not
        | Token::RightParen
        | Token::Equals
        | Token::Bang
        | Token::Question
        | Token::EndOfInput => Err(cursor.no_alternative(NonTerminal::StatementTail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolex::lexer::{Lexeme, LexicalError, Position, Scanner};
    use crate::boolex::parser::error::{Expected, SyntaxError};

    /// Replays a fixed token sequence, then end of input
    struct Canned {
        tokens: std::vec::IntoIter<Token>,
        column: usize,
    }

    impl Canned {
        fn new(tokens: Vec<Token>) -> Self {
            Self {
                tokens: tokens.into_iter(),
                column: 0,
            }
        }
    }

    impl TokenSource for Canned {
        fn next_lexeme(&mut self) -> Result<Lexeme, LexicalError> {
            let token = self.tokens.next().unwrap_or(Token::EndOfInput);
            self.column += 1;
            Ok(Lexeme::new(token, token.to_string(), Position::new(1, self.column - 1)))
        }

        fn position(&self) -> Position {
            Position::new(1, self.column.saturating_sub(1))
        }
    }

    fn run<F>(tokens: Vec<Token>, procedure: F) -> (Outcome, Token)
    where
        F: FnOnce(&mut Cursor<Canned>) -> Outcome,
    {
        let mut cursor = Cursor::new(Canned::new(tokens), 64).unwrap();
        let outcome = procedure(&mut cursor);
        (outcome, cursor.peek())
    }

    #[test]
    fn test_every_bool_literal_is_an_operand() {
        for literal in Token::BOOL_VALUES {
            let (outcome, rest) = run(vec![literal], statement_tail);
            assert_eq!(outcome, Ok(()), "{}", literal);
            assert_eq!(rest, Token::EndOfInput);
        }
    }

    #[test]
    fn test_epsilon_consumes_nothing() {
        // Each nullable procedure returns on a FOLLOW token and leaves it in place
        let (outcome, rest) = run(vec![Token::RightParen], term_tail);
        assert_eq!((outcome, rest), (Ok(()), Token::RightParen));

        let (outcome, rest) = run(vec![Token::Or], factor_tail);
        assert_eq!((outcome, rest), (Ok(()), Token::Or));

        let (outcome, rest) = run(vec![Token::LeftParen], statement);
        assert_eq!((outcome, rest), (Ok(()), Token::LeftParen));

        let (outcome, rest) = run(vec![], stmt_list);
        assert_eq!((outcome, rest), (Ok(()), Token::EndOfInput));
    }

    #[test]
    fn test_procedures_stop_at_follow_tokens() {
        // Expr leaves the cursor on the token after it
        let tokens = vec![Token::Identifier, Token::Or, Token::One, Token::Print];
        let (outcome, rest) = run(tokens, expr);
        assert_eq!((outcome, rest), (Ok(()), Token::Print));
    }

    #[test]
    fn test_every_token_is_dispatched_consistently_with_tables() {
        // A lone token is accepted by a procedure's first step exactly when it
        // lies in FIRST, or in FOLLOW for a nullable procedure
        type Procedure = fn(&mut Cursor<Canned>) -> Outcome;
        let procedures: [(NonTerminal, Procedure); 9] = [
            (NonTerminal::StmtList, stmt_list),
            (NonTerminal::Stmt, stmt),
            (NonTerminal::Expr, expr),
            (NonTerminal::TermTail, term_tail),
            (NonTerminal::Term, term),
            (NonTerminal::FactorTail, factor_tail),
            (NonTerminal::Factor, factor),
            (NonTerminal::Statement, statement),
            (NonTerminal::StatementTail, statement_tail),
        ];

        for (non_terminal, procedure) in procedures {
            for token in Token::ALL {
                let (outcome, _) = run(vec![token], procedure);
                let rejected_here = matches!(
                    &outcome,
                    Err(ParseError::Syntax(SyntaxError { non_terminal: nt, found, .. }))
                        if *nt == non_terminal && *found == token
                );
                assert_eq!(
                    rejected_here,
                    !non_terminal.expected().contains(&token),
                    "{} on {}",
                    non_terminal,
                    token
                );
            }
        }
    }

    #[test]
    fn test_stmt_requires_equals() {
        let (outcome, _) = run(vec![Token::Identifier, Token::Identifier], stmt);
        assert_eq!(
            outcome,
            Err(ParseError::Syntax(SyntaxError {
                non_terminal: NonTerminal::Stmt,
                found: Token::Identifier,
                expected: Expected::Terminal(Token::Equals),
                position: Position::new(1, 1),
            }))
        );
    }

    #[test]
    fn test_unclosed_paren() {
        let mut cursor = Cursor::new(Scanner::new("(x"), 64).unwrap();
        let err = statement_tail(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError {
                non_terminal: NonTerminal::StatementTail,
                found: Token::EndOfInput,
                expected: Expected::Terminal(Token::RightParen),
                position: Position::new(1, 2),
            })
        );
    }

    #[test]
    fn test_long_operator_chains_do_not_recurse() {
        // 10_000 operands joined by OR/AND stay within a tiny depth limit
        let mut source = String::from("x = a");
        for i in 0..10_000 {
            source.push_str(if i % 2 == 0 { " OR a" } else { " AND a" });
        }
        let mut cursor = Cursor::new(Scanner::new(&source), 8).unwrap();
        assert_eq!(stmt_list(&mut cursor), Ok(()));
    }

    #[test]
    fn test_negation_chain_counts_depth() {
        // Expr + Factor + one Statement per NOT + the final ε Statement
        let tokens = vec![Token::Not, Token::Not, Token::Not, Token::Identifier];
        let mut cursor = Cursor::new(Canned::new(tokens.clone()), 6).unwrap();
        assert_eq!(expr(&mut cursor), Ok(()));

        let mut cursor = Cursor::new(Canned::new(tokens), 5).unwrap();
        assert!(matches!(
            expr(&mut cursor),
            Err(ParseError::DepthExceeded {
                non_terminal: NonTerminal::Statement,
                limit: 5,
                ..
            })
        ));
    }
}
