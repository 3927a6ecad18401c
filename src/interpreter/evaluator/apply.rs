use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Pending},
        lexer::Paren,
        operator::Operator,
    },
};

impl Evaluator {
    /// Pops the top of the operator stack and combines the top two values
    /// with it.
    ///
    /// An empty operator stack is a no-op. The open-parenthesis marker can
    /// never be applied and is reported as left open.
    pub(crate) fn apply(&mut self) -> EvalResult<()> {
        match self.operators.pop() {
            None => Ok(()),
            Some(Pending::Open) => Err(EvalError::UnmatchedParenthesis { paren: Paren::Open }),
            Some(Pending::Operator(op)) => self.combine(op),
        }
    }

    /// Replaces the top two values `left right` with `left <op> right`.
    ///
    /// `right` is the most recently pushed value.
    fn combine(&mut self, op: Operator) -> EvalResult<()> {
        let [.., left, right] = self.values[..] else {
            return Err(EvalError::InsufficientOperands { operator: op });
        };
        self.values.truncate(self.values.len() - 2);
        self.values.push(op.apply(left, right));
        Ok(())
    }
}
