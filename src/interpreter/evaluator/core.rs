use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Policy applied when a variable is looked up but has no binding.
///
/// Snapshots of this calculator diverged on what an unbound name means; the
/// policy makes the choice explicit per environment instead of baking one in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OnUnbound {
    /// The variable evaluates to itself, unchanged. This is what makes the
    /// calculator symbolic: free variables are values.
    Symbolic,
    /// The variable evaluates to this default value. Environments with this
    /// policy are typed stores: `bind` only accepts integer constants.
    Default(i64),
    /// Evaluation fails with `RuntimeError::UnboundVariable`.
    Error,
}

/// Stores the variable bindings an evaluation session runs against.
///
/// An environment maps variable names to bound expressions. Bindings are
/// created by evaluating `Expr::Assign` nodes (or calling [`Env::bind`]
/// directly), always overwrite any previous binding for the same name, and
/// are only ever removed wholesale via [`Env::clear`].
///
/// A binding may reference other variables; `Var` evaluation re-evaluates the
/// bound expression lazily, so changing `y` later changes what `x` evaluates
/// to if `x` is bound to an expression over `y`. A per-call guard stack keeps
/// mutually referential bindings from recursing forever.
///
/// ## Usage
///
/// `Env` is created once per session and passed to every evaluation. There is
/// no global state; dropping the environment drops the session.
pub struct Env {
    bindings:   HashMap<String, Expr>,
    on_unbound: OnUnbound,
    /// The default value as an expression, present only in typed-store mode.
    default:    Option<Expr>,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    /// Creates an empty environment with the symbolic unbound policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(OnUnbound::Symbolic)
    }

    /// Creates an empty typed-store environment: unbound names evaluate to
    /// `default`, and only integer constants can be stored.
    #[must_use]
    pub fn with_default(default: i64) -> Self {
        Self::with_policy(OnUnbound::Default(default))
    }

    /// Creates an empty environment where evaluating an unbound variable is
    /// an error.
    #[must_use]
    pub fn strict() -> Self {
        Self::with_policy(OnUnbound::Error)
    }

    /// Creates an empty environment with the given unbound policy.
    #[must_use]
    pub fn with_policy(on_unbound: OnUnbound) -> Self {
        let default = match on_unbound {
            OnUnbound::Default(value) => Some(Expr::IntConst(value)),
            OnUnbound::Symbolic | OnUnbound::Error => None,
        };

        Self { bindings: HashMap::new(),
               on_unbound,
               default }
    }

    /// Returns the expression bound to `name`.
    ///
    /// This is the raw binding; it is not evaluated. In typed-store mode an
    /// unbound name yields the default value instead of `None`; other
    /// environments return `None` for unbound names.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name).or(self.default.as_ref())
    }

    /// Binds `name` to `value`, replacing any prior binding.
    ///
    /// # Errors
    /// In typed-store mode (`OnUnbound::Default`), returns
    /// `RuntimeError::TypeMismatch` if `value` is not an integer constant.
    /// Other environments accept any expression, including symbolic ones.
    pub fn bind(&mut self, name: &str, value: Expr) -> EvalResult<()> {
        if matches!(self.on_unbound, OnUnbound::Default(_)) && !value.is_const() {
            return Err(RuntimeError::TypeMismatch { name:  name.to_string(),
                                                    found: value.to_string(), });
        }

        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Removes every binding, like the 'Clear Memory' key on a calculator.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Returns all bindings as `(name, expression)` pairs, sorted by name.
    #[must_use]
    pub fn dump(&self) -> Vec<(String, Expr)> {
        let mut pairs: Vec<_> = self.bindings
                                    .iter()
                                    .map(|(name, value)| (name.clone(), value.clone()))
                                    .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }

    /// Evaluates an expression and returns the reduced result.
    ///
    /// This is the main entry point for evaluation. The result is itself an
    /// expression: fully numeric input reduces to an `IntConst`, while
    /// symbolic input may come back partially reduced or unchanged.
    ///
    /// Each call starts with a fresh cycle-guard stack, so no resolution
    /// state leaks between top-level evaluations.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if a binary operand stays symbolic, a
    /// division by zero occurs, arithmetic overflows, or the environment's
    /// unbound policy rejects a lookup.
    ///
    /// # Example
    /// ```
    /// use symcalc::{ast::Expr, interpreter::evaluator::core::Env};
    ///
    /// let mut env = Env::new();
    /// let expr = Expr::Assign { name:  "x".to_string(),
    ///                           value: Box::new(Expr::IntConst(5)), };
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), Expr::IntConst(5));
    /// assert_eq!(env.eval(&Expr::Var("x".to_string())).unwrap(), Expr::IntConst(5));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Expr> {
        let mut resolving = Vec::new();
        self.eval_guarded(expr, &mut resolving)
    }

    /// Evaluates an expression under an in-progress resolution stack.
    ///
    /// `resolving` holds the variable names currently being resolved, in
    /// order; it is how variable resolution detects cycles.
    pub(crate) fn eval_guarded(&mut self,
                               expr: &Expr,
                               resolving: &mut Vec<String>)
                               -> EvalResult<Expr> {
        match expr {
            Expr::IntConst(_) => Ok(expr.clone()),
            Expr::Var(name) => self.eval_variable(name, resolving),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr, resolving),
            Expr::BinaryOp { op, left, right } => {
                self.eval_binary_op(*op, left, right, resolving)
            },
            Expr::Assign { name, value } => {
                let value = self.eval_guarded(value, resolving)?;
                self.bind(name, value.clone())?;
                Ok(value)
            },
        }
    }

    /// Resolves a variable reference.
    ///
    /// A bound name re-evaluates its bound expression, with the name pushed
    /// onto the guard stack for the duration. If the name is already on the
    /// stack this resolution is part of a cycle, and the branch terminates by
    /// treating the variable as symbolic. An unbound name falls back to the
    /// environment's policy.
    fn eval_variable(&mut self, name: &str, resolving: &mut Vec<String>) -> EvalResult<Expr> {
        if resolving.iter().any(|n| n == name) {
            return Ok(Expr::Var(name.to_string()));
        }

        match self.bindings.get(name).cloned() {
            Some(bound) => {
                resolving.push(name.to_string());
                let result = self.eval_guarded(&bound, resolving);
                resolving.pop();
                result
            },
            None => match self.on_unbound {
                OnUnbound::Symbolic => Ok(Expr::Var(name.to_string())),
                OnUnbound::Default(value) => Ok(Expr::IntConst(value)),
                OnUnbound::Error => {
                    Err(RuntimeError::UnboundVariable { name: name.to_string() })
                },
            },
        }
    }
}
