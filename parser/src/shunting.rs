//! FILENAME: parser/src/shunting.rs
//! PURPOSE: Shunting-yard translator that converts a token stream from infix
//! to postfix (Reverse Polish) order.
//! CONTEXT: This is the second stage of the evaluation pipeline. It resolves
//! operator precedence and associativity against an injected OperatorTable
//! and binds functions to their parenthesized argument, producing a sequence
//! the evaluator can consume with a single value stack.
//!
//! ALGORITHM (per token):
//!   Number    --> append to output
//!   Function  --> push onto the operator stack
//!   Operator  --> pop stacked operators that outrank it, then push
//!   LParen    --> push onto the operator stack
//!   RParen    --> pop to output until the matching LParen; then pop a
//!                 function if one sits beneath the parenthesis
//! At end of input the stack drains to output; a leftover LParen means the
//! parentheses never balanced.

use crate::ops::{Associativity, OperatorTable};
use crate::token::{Operator, Token};

/// Errors raised while reordering tokens into postfix form.
#[derive(Debug, PartialEq, Clone)]
pub enum TranslateError {
    /// An unmatched `)` or an unclosed `(`.
    UnmatchedParen,
    /// An operator with no entry in the injected table. Unreachable with the
    /// standard table.
    UnknownOperator(Operator),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::UnmatchedParen => {
                write!(f, "Translate error: unmatched parenthesis")
            }
            TranslateError::UnknownOperator(op) => {
                write!(f, "Translate error: no table entry for operator '{}'", op)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// The translator holds the operator table it resolves precedence against.
pub struct ShuntingYard<'a> {
    ops: &'a OperatorTable,
}

impl<'a> ShuntingYard<'a> {
    pub fn new(ops: &'a OperatorTable) -> Self {
        ShuntingYard { ops }
    }

    /// Reorders an infix token sequence into postfix order.
    ///
    /// On success the output contains only Number, Operator, and Function
    /// tokens; parentheses are consumed by the reordering.
    pub fn translate(&self, tokens: &[Token]) -> TranslateResult<Vec<Token>> {
        let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(_) => output.push(token.clone()),

                Token::Function(_) => stack.push(token.clone()),

                Token::Operator(op) => {
                    self.pop_outranking(*op, &mut stack, &mut output)?;
                    stack.push(token.clone());
                }

                Token::LParen => stack.push(Token::LParen),

                Token::RParen => {
                    loop {
                        match stack.pop() {
                            Some(Token::LParen) => break,
                            Some(entry) => output.push(entry),
                            None => return Err(TranslateError::UnmatchedParen),
                        }
                    }

                    // A function directly beneath the parenthesis belongs to
                    // the argument that just closed.
                    if let Some(Token::Function(func)) = stack.last() {
                        output.push(Token::Function(*func));
                        stack.pop();
                    }
                }
            }
        }

        while let Some(entry) = stack.pop() {
            if entry == Token::LParen {
                return Err(TranslateError::UnmatchedParen);
            }
            output.push(entry);
        }

        Ok(output)
    }

    /// Pops stacked operators that bind at least as tightly as `incoming`.
    ///
    /// Left-associative operators pop equal precedence (`<=`); right-
    /// associative operators do not (`<`), which is what lets `2^3^2` group
    /// as `2^(3^2)`. Functions and parentheses on the stack never outrank an
    /// operator.
    fn pop_outranking(
        &self,
        incoming: Operator,
        stack: &mut Vec<Token>,
        output: &mut Vec<Token>,
    ) -> TranslateResult<()> {
        let spec = self
            .ops
            .get(incoming)
            .ok_or(TranslateError::UnknownOperator(incoming))?;

        loop {
            let top = match stack.last() {
                Some(Token::Operator(top)) => *top,
                _ => break,
            };

            let top_spec = self
                .ops
                .get(top)
                .ok_or(TranslateError::UnknownOperator(top))?;

            let outranked = match spec.associativity {
                Associativity::Left => spec.precedence <= top_spec.precedence,
                Associativity::Right => spec.precedence < top_spec.precedence,
            };

            if !outranked {
                break;
            }

            stack.pop();
            output.push(Token::Operator(top));
        }

        Ok(())
    }
}

/// Convenience function to translate against the standard operator table.
pub fn to_postfix(tokens: &[Token]) -> TranslateResult<Vec<Token>> {
    ShuntingYard::new(OperatorTable::shared()).translate(tokens)
}
