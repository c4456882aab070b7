use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Env, EvalResult},
    util::num::floor_div,
};

impl Env {
    /// Evaluates a binary operation.
    ///
    /// Binary semantics are strict: both operands must reduce to integer
    /// constants before the operator's pure function is applied. An operand
    /// that stays symbolic (for example an unbound variable) is an
    /// `OperandType` error, not a partial result; there is no symbolic binary
    /// reduction.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 resolving: &mut Vec<String>)
                                 -> EvalResult<Expr> {
        let left = self.eval_guarded(left, resolving)?;
        let right = self.eval_guarded(right, resolving)?;

        match (&left, &right) {
            (Expr::IntConst(a), Expr::IntConst(b)) => {
                Ok(Expr::IntConst(Self::apply_binary(op, *a, *b)?))
            },
            (Expr::IntConst(_), symbolic) | (symbolic, _) => {
                Err(RuntimeError::OperandType { op,
                                                found: symbolic.to_string(), })
            },
        }
    }

    /// Applies a binary operator to two integer constants.
    ///
    /// Division is floor division, rounding towards negative infinity like
    /// the original calculator.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `op` is `Div` and `right` is 0.
    /// - `RuntimeError::Overflow` when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use symcalc::{ast::BinaryOperator, interpreter::evaluator::core::Env};
    ///
    /// assert_eq!(Env::apply_binary(BinaryOperator::Plus, 8, 9).unwrap(), 17);
    /// assert_eq!(Env::apply_binary(BinaryOperator::Div, -7, 2).unwrap(), -4);
    /// ```
    pub fn apply_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        match op {
            BinaryOperator::Plus => left.checked_add(right).ok_or(RuntimeError::Overflow),
            BinaryOperator::Minus => left.checked_sub(right).ok_or(RuntimeError::Overflow),
            BinaryOperator::Times => left.checked_mul(right).ok_or(RuntimeError::Overflow),
            BinaryOperator::Div => floor_div(left, right),
        }
    }
}
