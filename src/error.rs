/// Parsing errors.
///
/// Defines all error types that can occur before evaluation: malformed input
/// the lexer rejects, stack underflow or imbalance in the RPN builder, and
/// structural mistakes in infix input. A parse error is always fatal to the
/// current input line; nothing is partially recovered.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree: division by zero, operands that do not reduce to integer constants,
/// strict-mode unbound variables, and typed-store rejections.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
