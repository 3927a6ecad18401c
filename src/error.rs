/// Evaluation errors.
///
/// Defines every way an expression can fail to evaluate: unbalanced
/// parentheses, unrecognized tokens, operators missing operands, and token
/// sequences that do not reduce to a single value.
pub mod eval_error;

pub use eval_error::EvalError;
