use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Floor division of two `i64` values, rounding towards negative infinity.
///
/// Rust's `/` truncates towards zero; this calculator divides like the
/// classroom one it models, so `-7 / 2` is `-4`, not `-3`.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `divisor` is 0.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Parameters
/// - `dividend`: The value being divided.
/// - `divisor`: The value to divide by.
///
/// ## Returns
/// - `Ok(i64)`: The floored quotient.
///
/// ## Example
/// ```
/// use symcalc::util::num::floor_div;
///
/// assert_eq!(floor_div(9, 3).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2).unwrap(), -4);
/// assert_eq!(floor_div(7, -2).unwrap(), -4);
/// assert!(floor_div(1, 0).is_err());
/// ```
pub fn floor_div(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    let quotient = dividend.checked_div(divisor).ok_or(RuntimeError::Overflow)?;

    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
