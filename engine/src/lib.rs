//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod evaluator;
pub mod expression;

// Re-export commonly used types at the crate root
pub use evaluator::{evaluate, EvalError, EvalResult};
pub use expression::{evaluate_expression, ExpressionError};

// The parser stages, re-exported so façade callers can match on causes
// without a separate dependency.
pub use parser::lexer::TokenizeError;
pub use parser::shunting::TranslateError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_evaluates_a_plain_number() {
        assert_eq!(evaluate_expression("4"), Ok(4.0));
    }

    #[test]
    fn it_respects_precedence() {
        assert_eq!(evaluate_expression("3+4*2"), Ok(11.0));
        assert_eq!(evaluate_expression("(3+4)*2"), Ok(14.0));
    }

    #[test]
    fn it_groups_power_right_associatively() {
        // 2^(3^2), not (2^3)^2
        assert_eq!(evaluate_expression("2^3^2"), Ok(512.0));
    }

    #[test]
    fn it_binds_functions_to_their_argument() {
        assert_eq!(evaluate_expression("sqrt(16)"), Ok(4.0));
        assert_eq!(evaluate_expression("sin(0)"), Ok(0.0));
    }

    #[test]
    fn integration_test_full_pipeline() {
        // (1+2)*sqrt(9)-4/2 = 3*3-2 = 7
        assert_eq!(evaluate_expression("(1+2)*sqrt(9)-4/2"), Ok(7.0));
    }

    #[test]
    fn integration_test_nested_functions_and_constants() {
        let result = evaluate_expression("ln(e)").unwrap();
        assert!((result - 1.0).abs() < 1e-12);

        let result = evaluate_expression("cos(2*pi)").unwrap();
        assert!((result - 1.0).abs() < 1e-12);

        let result = evaluate_expression("sin(π)").unwrap();
        assert!(result.abs() < 1e-12);
    }

    #[test]
    fn integration_test_whitespace_is_ignored_between_tokens() {
        assert_eq!(evaluate_expression(" 3 + 4 * 2 "), Ok(11.0));
    }

    #[test]
    fn it_reports_division_by_zero() {
        assert_eq!(
            evaluate_expression("5/0"),
            Err(ExpressionError::Eval(EvalError::DivisionByZero))
        );
    }

    #[test]
    fn it_reports_domain_errors() {
        assert_eq!(
            evaluate_expression("sqrt(-4)"),
            Err(ExpressionError::Eval(EvalError::Domain))
        );
    }

    #[test]
    fn it_reports_unmatched_parens_both_ways() {
        assert_eq!(
            evaluate_expression("(2+3"),
            Err(ExpressionError::Translate(TranslateError::UnmatchedParen))
        );
        assert_eq!(
            evaluate_expression("2+3)"),
            Err(ExpressionError::Translate(TranslateError::UnmatchedParen))
        );
    }

    #[test]
    fn it_reports_unrecognized_symbols() {
        assert_eq!(
            evaluate_expression("2 & 3"),
            Err(ExpressionError::Tokenize(TokenizeError::UnrecognizedSymbol(
                "&".to_string()
            )))
        );
    }

    #[test]
    fn it_reports_malformed_literals() {
        assert_eq!(
            evaluate_expression("1.2.3"),
            Err(ExpressionError::Tokenize(TokenizeError::MalformedNumber(
                "1.2.".to_string()
            )))
        );
    }

    #[test]
    fn it_rejects_empty_input() {
        assert_eq!(
            evaluate_expression(""),
            Err(ExpressionError::Eval(EvalError::MalformedExpression))
        );
    }

    #[test]
    fn integration_test_result_reevaluates_to_itself() {
        // A result rendered back to text and resubmitted gives the same value
        let first = evaluate_expression("2+2").unwrap();
        let again = evaluate_expression(&first.to_string()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn integration_test_never_returns_non_finite() {
        for expr in ["2^10000", "1/0", "0-1", "ln(0)", "sqrt(-1)", "5*/3", "2e3"] {
            match evaluate_expression(expr) {
                Ok(value) => assert!(value.is_finite(), "{} produced {}", expr, value),
                Err(_) => {}
            }
        }
    }

    #[test]
    fn integration_test_error_display_names_the_cause() {
        let err = evaluate_expression("5/0").unwrap_err();
        assert!(err.to_string().contains("division by zero"));

        let err = evaluate_expression("(1+2").unwrap_err();
        assert!(err.to_string().contains("parenthesis"));
    }
}
