//! # symcalc
//!
//! symcalc is a symbolic calculator written in Rust. It parses arithmetic
//! expressions, in either postfix (RPN) or infix notation, into expression
//! trees and evaluates them against a store of variable bindings. Variables
//! without a value are themselves values: `~ z` with `z` unbound evaluates to
//! `~ z`, not to an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::Env,
        lexer::{Token, tokenize},
        parser::{infix, rpn},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator tags that represent
/// the syntactic structure of calculator input as a tree. The AST is built by
/// either parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression variants: constants, variables, unary and binary
///   operations, and assignment.
/// - Implements structural equality and algebraic display forms.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating calculator input. Errors carry the details a caller needs to
/// report the failure; they are raised at the point of detection and
/// propagate unchanged, with no internal recovery.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parsers, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing in both notations, and tree
/// evaluation over a variable environment. It exposes the building blocks the
/// crate-level entry points compose.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parsers, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// This module provides pure arithmetic helpers used by the evaluator, kept
/// separate from any expression-specific logic.
///
/// # Responsibilities
/// - Implements floor division with overflow and zero-divisor checks.
pub mod util;

/// The notation an input line is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Postfix: operators follow their operands, as in `3 4 +`.
    Rpn,
    /// Infix with two precedence levels, as in `3 + 4`.
    Infix,
}

/// Tokenizes and parses a single line of input into an expression tree.
///
/// The line is not evaluated; combine with [`Env::eval`] to compute a result.
///
/// # Errors
/// Returns a `ParseError` if the line cannot be tokenized or does not form
/// exactly one well-formed expression in the given notation.
///
/// # Examples
/// ```
/// use symcalc::{Notation, parse_line};
///
/// let expr = parse_line("5 4 3 * + x =", Notation::Rpn).unwrap();
/// assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
///
/// let expr = parse_line("x = 5 + 4 * 3", Notation::Infix).unwrap();
/// assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
/// ```
pub fn parse_line(source: &str, notation: Notation) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens, notation)
}

/// Tokenizes, parses and evaluates a single line of input.
///
/// # Errors
/// Returns an error if parsing fails or if evaluation raises a runtime
/// error.
///
/// # Examples
/// ```
/// use symcalc::{Notation, ast::Expr, eval_line, interpreter::evaluator::core::Env};
///
/// let mut env = Env::new();
/// let result = eval_line("5 4 3 * + x =", Notation::Rpn, &mut env).unwrap();
///
/// assert_eq!(result, Expr::IntConst(17));
/// assert_eq!(env.lookup("x"), Some(&Expr::IntConst(17)));
/// ```
pub fn eval_line(source: &str,
                 notation: Notation,
                 env: &mut Env)
                 -> Result<Expr, Box<dyn std::error::Error>> {
    let expr = parse_line(source, notation)?;
    let value = env.eval(&expr)?;

    Ok(value)
}

/// Evaluates a whole script, one statement per line, and returns the last
/// result.
///
/// The script is tokenized once so error messages carry real line numbers;
/// tokens are then grouped by line into statements. Blank and comment-only
/// lines produce no tokens and are skipped. `Ok(None)` means the script
/// contained no statements at all.
///
/// # Errors
/// Returns the first parse or runtime error encountered; later lines are not
/// evaluated.
pub fn run_script(source: &str,
                  notation: Notation,
                  env: &mut Env)
                  -> Result<Option<Expr>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut result = None;
    let mut iter = tokens.into_iter().peekable();

    while let Some(&(_, line)) = iter.peek() {
        let mut statement = Vec::new();
        while let Some(&(_, l)) = iter.peek() {
            if l != line {
                break;
            }
            if let Some(pair) = iter.next() {
                statement.push(pair);
            }
        }

        let expr = parse_tokens(&statement, notation)?;
        result = Some(env.eval(&expr)?);
    }

    Ok(result)
}

fn parse_tokens(tokens: &[(Token, usize)], notation: Notation) -> Result<Expr, ParseError> {
    match notation {
        Notation::Rpn => rpn::parse(tokens),
        Notation::Infix => infix::parse(tokens),
    }
}
