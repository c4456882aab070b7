/// An abstract syntax tree (AST) node representing an expression in the
/// calculator language.
///
/// `Expr` covers every construct the calculator understands: integer
/// constants, variables, unary and binary operations, and assignments.
/// Evaluation reduces an `Expr` towards an `IntConst` where possible; a `Var`
/// with no binding is itself a valid result, which is what makes the
/// calculator symbolic.
///
/// Equality is structural: two expressions are equal when they have the same
/// variant and equal operands, recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A 64-bit signed integer constant. Fully evaluated; evaluates to
    /// itself.
    IntConst(i64),
    /// Reference to a variable by name. Its value, if any, lives in the
    /// evaluation environment.
    Var(String),
    /// A unary operation (negation or absolute value).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// An assignment binding a variable name to the evaluated value of an
    /// expression. Evaluates to that value.
    Assign {
        /// The name of the variable being assigned.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
    },
}

impl Expr {
    /// Returns `true` if `self` is a fully reduced integer constant.
    ///
    /// ## Example
    /// ```
    /// use symcalc::ast::Expr;
    ///
    /// assert!(Expr::IntConst(7).is_const());
    /// assert!(!Expr::Var("x".to_string()).is_const());
    /// ```
    #[must_use]
    pub const fn is_const(&self) -> bool {
        matches!(self, Self::IntConst(_))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::IntConst(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Var(name.to_string())
    }
}

/// Represents a binary operator.
///
/// All binary operators are arithmetic; division is floor division, matching
/// the behaviour of a classroom integer calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Times,
    /// Floor division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`~`).
    Neg,
    /// Absolute value (`@`).
    Abs,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Neg => "~",
            Self::Abs => "@",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    /// Renders the expression in algebraic notation.
    ///
    /// Binary operations are fully parenthesized so the structure of the tree
    /// is unambiguous regardless of the notation it was parsed from.
    ///
    /// ## Example
    /// ```
    /// use symcalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::BinaryOp { op:    BinaryOperator::Plus,
    ///                            left:  Box::new(Expr::IntConst(5)),
    ///                            right: Box::new(Expr::Var("x".to_string())), };
    ///
    /// assert_eq!(sum.to_string(), "(5 + x)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntConst(value) => write!(f, "{value}"),
            Self::Var(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "{op} {expr}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assign { name, value } => write!(f, "{name} = {value}"),
        }
    }
}
