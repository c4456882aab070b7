/// Integer arithmetic helpers.
///
/// This module provides the pure numeric routines the evaluator is built on
/// but that are not specific to any expression variant, currently floor
/// division with its zero-divisor and overflow checks.
///
/// All functions return a `Result`, which is `Ok` if the operation is defined
/// for the inputs, or a `RuntimeError` otherwise.
pub mod num;
