#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token the current parser cannot use, or input the lexer could
    /// not tokenize at all.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while a construct was still incomplete.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was seen with fewer operands on the stack than it needs.
    InsufficientOperands {
        /// The operator that could not be applied.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// More than one expression remained on the stack after all tokens were
    /// consumed.
    UnbalancedExpression {
        /// The number of expressions left on the stack.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input contained no expression at all.
    EmptyExpression,
    /// The target of an assignment was not a variable.
    InvalidAssignTarget {
        /// The expression found where a variable was required.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::InsufficientOperands { op, line } => {
                write!(f, "Error on line {line}: Insufficient operands for '{op}'.")
            },

            Self::UnbalancedExpression { count, line } => write!(f,
                                                                 "Error on line {line}: Unbalanced expression: {count} operands left over."),

            Self::EmptyExpression => write!(f, "Error: Empty expression."),

            Self::InvalidAssignTarget { found, line } => write!(f,
                                                                "Error on line {line}: Assignment target must be a variable, not {found}."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
