use crate::error::ParseError;

/// Postfix (RPN) parsing.
///
/// Builds expression trees from postfix token sequences with a single operand
/// stack, the way a postfix evaluator would compute numbers.
pub mod rpn;

/// Infix (LL) parsing.
///
/// A small recursive-descent parser over the classic two-level grammar with
/// `+ -` below `* /`, kept for parity with the postfix builder.
pub mod infix;

/// Result type used by both parsers.
pub type ParseResult<T> = Result<T, ParseError>;
