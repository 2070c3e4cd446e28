//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates postfix token sequences to compute a numeric result.
//! CONTEXT: After the shunting-yard translator reorders an expression into
//! postfix form, this module consumes it left to right with a single value
//! stack. It handles the arithmetic operators, the unary math functions, and
//! every numeric failure mode: division by zero, domain violations, overflow
//! past the finite f64 range, and malformed sequences.
//!
//! SUPPORTED OPERATIONS:
//! - Operators: + - * / ^
//! - Functions: sin, cos, tan, log (base 10), ln, sqrt
//!
//! The evaluator never returns NaN or an infinity; every kernel result is
//! checked before it is pushed.

use parser::token::{Function, Operator, Token};
use serde::{Deserialize, Serialize};

/// Errors raised while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalError {
    /// An operator or function ran out of operands. Should not occur for
    /// sequences produced by a successful translation, but is guarded.
    StackUnderflow,
    /// Division with a divisor of exactly zero.
    DivisionByZero,
    /// A function applied outside its domain (e.g. sqrt of a negative), or
    /// any kernel producing NaN.
    Domain,
    /// A kernel result past the finite f64 range (e.g. 2^10000).
    Overflow,
    /// Evaluation finished with zero or more than one residual value.
    MalformedExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::StackUnderflow => {
                write!(f, "Eval error: operator is missing an operand")
            }
            EvalError::DivisionByZero => write!(f, "Eval error: division by zero"),
            EvalError::Domain => {
                write!(f, "Eval error: argument outside the function's domain")
            }
            EvalError::Overflow => {
                write!(f, "Eval error: result exceeds the finite number range")
            }
            EvalError::MalformedExpression => {
                write!(f, "Eval error: expression does not reduce to one value")
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence to a single finite number.
///
/// The pop order matters for `-`, `/`, and `^`: the second-popped value is
/// the left operand.
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(*n),

            Token::Operator(op) => {
                let b = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let a = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(apply_operator(*op, a, b)?);
            }

            Token::Function(func) => {
                let x = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(apply_function(*func, x)?);
            }

            // Parentheses cannot survive translation; a sequence carrying one
            // was never a valid postfix expression.
            Token::LParen | Token::RParen => return Err(EvalError::MalformedExpression),
        }
    }

    if stack.len() == 1 {
        Ok(stack[0])
    } else {
        Err(EvalError::MalformedExpression)
    }
}

/// Applies a binary operator kernel. `a` is the left operand.
fn apply_operator(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    let value = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operator::Power => a.powf(b),
    };

    finite(value)
}

/// Applies a unary function kernel.
fn apply_function(func: Function, x: f64) -> EvalResult<f64> {
    let value = match func {
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
        Function::Log => {
            if x <= 0.0 {
                return Err(EvalError::Domain);
            }
            x.log10()
        }
        Function::Ln => {
            if x <= 0.0 {
                return Err(EvalError::Domain);
            }
            x.ln()
        }
        Function::Sqrt => {
            if x < 0.0 {
                return Err(EvalError::Domain);
            }
            x.sqrt()
        }
    };

    finite(value)
}

/// Rejects NaN and infinite kernel results so they never reach the stack.
fn finite(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        Err(EvalError::Domain)
    } else if value.is_infinite() {
        Err(EvalError::Overflow)
    } else {
        Ok(value)
    }
}
