use crate::{
    error::EvalError,
    interpreter::{
        lexer::{Paren, Token, tokenize},
        operator::Operator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack: either an operator waiting for its right
/// operand to be complete, or the marker left by an open parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Marker pushed by `(` and removed by the matching `)`.
    Open,
    /// An operator whose application has been deferred.
    Operator(Operator),
}

/// Two-stack shunting-yard evaluator.
///
/// Tokens are fed one at a time with [`Evaluator::feed`]. Operators are held
/// back on the operator stack until an operator of lower precedence, a
/// closing parenthesis or the end of input forces them to be applied to the
/// value stack. [`Evaluator::finish`] drains what is left and yields the
/// single remaining value.
///
/// An `Evaluator` lives for exactly one expression.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::core::Evaluator, lexer::Token};
///
/// let mut evaluator = Evaluator::new();
/// for word in "2 * ( 3 + 4 )".split_whitespace() {
///     evaluator.feed(Token::classify(word).unwrap()).unwrap();
/// }
/// assert_eq!(evaluator.finish().unwrap(), 14.0);
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    pub(crate) operators: Vec<Pending>,
    pub(crate) values:    Vec<f64>,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one token.
    ///
    /// - `(` is pushed onto the operator stack.
    /// - `)` applies pending operators back to the matching `(`, then drops
    ///   the marker.
    /// - An operator first applies every pending operator of greater or equal
    ///   precedence, then waits on the stack itself.
    /// - A number goes straight onto the value stack.
    ///
    /// # Errors
    /// [`EvalError::UnmatchedParenthesis`] for a `)` with no open `(`, or
    /// [`EvalError::InsufficientOperands`] if an operator that had to be
    /// applied lacks operands.
    pub fn feed(&mut self, token: Token) -> EvalResult<()> {
        match token {
            Token::Paren(Paren::Open) => {
                self.operators.push(Pending::Open);
                Ok(())
            },
            Token::Paren(Paren::Close) => self.close_paren(),
            Token::Operator(op) => self.push_operator(op),
            Token::Number(value) => {
                self.values.push(value);
                Ok(())
            },
        }
    }

    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last().copied() {
                Some(Pending::Open) => {
                    self.operators.pop();
                    return Ok(());
                },
                Some(Pending::Operator(_)) => self.apply()?,
                None => return Err(EvalError::UnmatchedParenthesis { paren: Paren::Close }),
            }
        }
    }

    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        // Ties apply the pending operator first: left associativity.
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.apply()?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    /// Applies every remaining operator and returns the result.
    ///
    /// # Errors
    /// - [`EvalError::UnmatchedParenthesis`] if a `(` is still open.
    /// - [`EvalError::InsufficientOperands`] if an operator lacks operands.
    /// - [`EvalError::InvalidExpression`] if anything other than exactly one
    ///   value is left, e.g. for `3 5`.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(&top) = self.operators.last() {
            if top == Pending::Open {
                return Err(EvalError::UnmatchedParenthesis { paren: Paren::Open });
            }
            self.apply()?;
        }

        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

/// Evaluates a whitespace-separated infix expression.
///
/// Returns `Ok(None)` when `expression` is empty or only whitespace. This is
/// a valid outcome, not a failure.
///
/// # Errors
/// Any [`EvalError`] raised while classifying or evaluating the tokens. The
/// first failure aborts evaluation.
pub fn evaluate(expression: &str) -> EvalResult<Option<f64>> {
    if expression.trim().is_empty() {
        return Ok(None);
    }

    let mut evaluator = Evaluator::new();
    for token in tokenize(expression) {
        evaluator.feed(token?)?;
    }
    evaluator.finish().map(Some)
}
