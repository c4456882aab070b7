/// Core evaluation logic and the variable environment.
///
/// Contains the `Env` type, the evaluation dispatch over expression variants,
/// variable resolution with cycle guarding, and the unbound-name policies.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and absolute value, including partial evaluation over
/// symbolic operands.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators with strict operand semantics:
/// both sides must reduce to integer constants.
pub mod binary;
