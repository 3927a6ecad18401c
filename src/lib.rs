//! # tally
//!
//! tally is an infix arithmetic calculator. It evaluates whitespace-separated
//! expressions made of numbers, `+ - * /` and parentheses, honoring operator
//! precedence and left associativity, and can draw the result in a text box.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Provides the error type returned by evaluation.
///
/// Every failure is a local, recoverable condition described by one
/// [`EvalError`](error::EvalError) value with a human-readable message.
pub mod error;
/// Tokenizes and evaluates expressions.
///
/// # Responsibilities
/// - Splits input on whitespace and classifies each word.
/// - Evaluates the token stream with an operator stack and a value stack.
/// - Defines the supported operators and their precedence.
pub mod interpreter;
/// Text presentation of an expression and its result.
pub mod render;

pub use error::EvalError;
pub use interpreter::evaluator::core::EvalResult;

/// Evaluates an infix expression and returns its value.
///
/// Tokens must be separated by whitespace. An empty or whitespace-only
/// expression yields `Ok(None)`.
///
/// # Errors
/// Returns an [`EvalError`] if the expression contains an unknown token,
/// unbalanced parentheses, an operator without two operands, or does not
/// reduce to exactly one value.
///
/// # Examples
/// ```
/// use tally::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2 * 3 - 8 / 2 + 5"), Ok(Some(7.0)));
/// assert_eq!(evaluate("( 2 * ( 3 + 4 ) ) - 5"), Ok(Some(9.0)));
/// assert_eq!(evaluate("   "), Ok(None));
///
/// let err = evaluate("$ 3 5").unwrap_err();
/// assert_eq!(err, EvalError::InvalidToken { token: "$".to_string() });
/// assert_eq!(err.to_string(), "invalid token: $");
/// ```
pub fn evaluate(expression: &str) -> EvalResult<Option<f64>> {
    interpreter::evaluator::core::evaluate(expression)
}
