use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{Env, EvalResult},
};

impl Env {
    /// Evaluates a unary operation, reducing as far as the operand allows.
    ///
    /// The operand is evaluated first. If it reduces to an integer constant
    /// the operator's pure function is applied and a new constant returned.
    /// Otherwise the operand stayed symbolic, and the result is the same
    /// operator wrapped around whatever the operand reduced to; when the
    /// operand made no progress at all, that is structurally the original
    /// node, unchanged. Unary operations therefore evaluate partially where
    /// binary operations refuse to.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Expr,
                                resolving: &mut Vec<String>)
                                -> EvalResult<Expr> {
        let reduced = self.eval_guarded(operand, resolving)?;

        if let Expr::IntConst(value) = reduced {
            return Ok(Expr::IntConst(Self::apply_unary(op, value)?));
        }

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(reduced), })
    }

    /// Applies a unary operator to an integer constant.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` when the result does not fit in an
    /// `i64` (negating or taking the absolute value of `i64::MIN`).
    ///
    /// # Example
    /// ```
    /// use symcalc::{ast::UnaryOperator, interpreter::evaluator::core::Env};
    ///
    /// assert_eq!(Env::apply_unary(UnaryOperator::Neg, 5).unwrap(), -5);
    /// assert_eq!(Env::apply_unary(UnaryOperator::Abs, -5).unwrap(), 5);
    /// ```
    pub fn apply_unary(op: UnaryOperator, value: i64) -> EvalResult<i64> {
        match op {
            UnaryOperator::Neg => value.checked_neg().ok_or(RuntimeError::Overflow),
            UnaryOperator::Abs => value.checked_abs().ok_or(RuntimeError::Overflow),
        }
    }
}
