use crate::interpreter::{lexer::Paren, operator::Operator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant aborts evaluation immediately; there is never a partial
/// result.
pub enum EvalError {
    /// A `)` without a matching `(`, or a `(` still open at end of input.
    UnmatchedParenthesis {
        /// The parenthesis that was left unmatched.
        paren: Paren,
    },
    /// A token that is neither a parenthesis, an operator nor a number.
    InvalidToken {
        /// The offending token, exactly as it appeared in the input.
        token: String,
    },
    /// An operator was applied with fewer than two pending values.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// The input did not reduce to exactly one value.
    InvalidExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedParenthesis { paren } => write!(f, "unmatched '{paren}'"),
            Self::InvalidToken { token } => write!(f, "invalid token: {token}"),
            Self::InsufficientOperands { operator } => {
                write!(f, "not enough operands for operator {operator}")
            },
            Self::InvalidExpression => write!(f, "invalid expression"),
        }
    }
}

impl std::error::Error for EvalError {}
