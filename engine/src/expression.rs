//! FILENAME: engine/src/expression.rs
//! PURPOSE: Single-call façade over the full evaluation pipeline.
//! CONTEXT: The UI layer hands this module a plain expression string and gets
//! back either a finite number or one typed error. Tokenization, translation,
//! and evaluation each report their own failure kind; this module folds them
//! into `ExpressionError` without recovery or partial evaluation.

use crate::evaluator::{evaluate, EvalError};
use parser::lexer::{tokenize, TokenizeError};
use parser::shunting::{to_postfix, TranslateError};

/// Any failure from any stage of the pipeline, carrying the original cause.
#[derive(Debug, PartialEq, Clone)]
pub enum ExpressionError {
    Tokenize(TokenizeError),
    Translate(TranslateError),
    Eval(EvalError),
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionError::Tokenize(err) => write!(f, "{}", err),
            ExpressionError::Translate(err) => write!(f, "{}", err),
            ExpressionError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionError::Tokenize(err) => Some(err),
            ExpressionError::Translate(err) => Some(err),
            ExpressionError::Eval(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for ExpressionError {
    fn from(err: TokenizeError) -> Self {
        ExpressionError::Tokenize(err)
    }
}

impl From<TranslateError> for ExpressionError {
    fn from(err: TranslateError) -> Self {
        ExpressionError::Translate(err)
    }
}

impl From<EvalError> for ExpressionError {
    fn from(err: EvalError) -> Self {
        ExpressionError::Eval(err)
    }
}

/// Evaluates an infix expression string to a single finite number.
///
/// This is the engine's entire external surface: the caller owns the input
/// buffer and decides how an error is displayed.
pub fn evaluate_expression(expr: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expr)?;
    let postfix = to_postfix(&tokens)?;
    let value = evaluate(&postfix)?;
    Ok(value)
}
