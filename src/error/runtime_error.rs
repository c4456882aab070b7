use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable. Only raised by environments built
    /// with the strict unbound policy; symbolic environments evaluate unbound
    /// variables to themselves instead.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator was applied to an operand that did not reduce to an
    /// integer constant.
    OperandType {
        /// The operator that was being applied.
        op:    BinaryOperator,
        /// The display form of the offending operand.
        found: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A typed store rejected a value that was not an integer constant.
    TypeMismatch {
        /// The name of the variable being bound.
        name:  String,
        /// The display form of the rejected value.
        found: String,
    },
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "Error: Variable '{name}' has not been assigned a value.")
            },
            Self::OperandType { op, found } => write!(f,
                                                      "Error: Operand of '{op}' must reduce to an integer constant, but found '{found}'."),
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::TypeMismatch { name, found } => write!(f,
                                                         "Error: Cannot store '{found}' in variable '{name}': this store only holds integer constants."),
            Self::Overflow => write!(f,
                                     "Error: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
