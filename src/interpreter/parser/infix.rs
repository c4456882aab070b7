use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Token, parser::ParseResult},
};

/// Parses an infix token sequence into a single expression tree.
///
/// Grammar:
/// ```text
///     stmt    := expr [ '=' expr ]
///     expr    := term { ('+' | '-') term }
///     term    := primary { ('*' | '/') primary }
///     primary := INT | IDENT | '(' expr ')' | ('~' | '@') primary
/// ```
/// The two precedence levels mean `2 + 3 * 4` parses as `(2 + (3 * 4))`
/// without any lookahead beyond a single token. Assignment is written
/// `x = expr` and requires a plain variable on the left.
///
/// # Parameters
/// - `tokens`: The `(token, line)` sequence for one statement.
///
/// # Returns
/// The parsed expression.
///
/// # Errors
/// - `InvalidAssignTarget` if the left side of `=` is not a variable.
/// - `ExpectedClosingParen` if a `(` is never closed.
/// - `UnexpectedEndOfInput` if the input stops mid-construct.
/// - `UnexpectedTrailingTokens` if tokens remain after the statement.
/// - `EmptyExpression` if there are no tokens at all.
///
/// # Example
/// ```
/// use symcalc::interpreter::{lexer::tokenize, parser::infix::parse};
///
/// let tokens = tokenize("x = 5 + 4 * 3").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let Some((_, last_line)) = tokens.last() else {
        return Err(ParseError::EmptyExpression);
    };

    let mut iter = tokens.iter().peekable();
    let expr = parse_statement(&mut iter, *last_line)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }

    Ok(expr)
}

/// Parses `stmt := expr [ '=' expr ]`.
///
/// The assignment check happens here, at parse time: once `=` is seen, the
/// already-parsed left side must be a plain variable.
fn parse_statement<'a, I>(tokens: &mut Peekable<I>, last_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_expression(tokens, last_line)?;

    match tokens.peek() {
        Some((Token::Equals, line)) => {
            let line = *line;
            tokens.next();

            let Expr::Var(name) = left else {
                return Err(ParseError::InvalidAssignTarget { found: left.to_string(),
                                                             line });
            };

            let value = parse_expression(tokens, last_line)?;

            Ok(Expr::Assign { name,
                              value: Box::new(value), })
        },
        _ => Ok(left),
    }
}

/// Parses `expr := term { ('+' | '-') term }`, left-associative.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>, last_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_term(tokens, last_line)?;

    while let Some((token @ (Token::Plus | Token::Minus), _)) = tokens.peek() {
        let op = if matches!(token, Token::Plus) {
            BinaryOperator::Plus
        } else {
            BinaryOperator::Minus
        };
        tokens.next();

        let right = parse_term(tokens, last_line)?;

        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right), };
    }

    Ok(left)
}

/// Parses `term := primary { ('*' | '/') primary }`, left-associative.
fn parse_term<'a, I>(tokens: &mut Peekable<I>, last_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens, last_line)?;

    while let Some((token @ (Token::Star | Token::Slash), _)) = tokens.peek() {
        let op = if matches!(token, Token::Star) {
            BinaryOperator::Times
        } else {
            BinaryOperator::Div
        };
        tokens.next();

        let right = parse_primary(tokens, last_line)?;

        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right), };
    }

    Ok(left)
}

/// Parses `primary := INT | IDENT | '(' expr ')' | ('~' | '@') primary`.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, last_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), _)) => Ok(Expr::IntConst(*value)),

        Some((Token::Identifier(name), _)) => Ok(Expr::Var(name.clone())),

        Some((Token::LParen, line)) => {
            let nested = parse_expression(tokens, last_line)?;

            match tokens.next() {
                Some((Token::RParen, _)) => Ok(nested),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },

        Some((Token::Tilde, _)) => {
            let operand = parse_primary(tokens, last_line)?;

            Ok(Expr::UnaryOp { op:   UnaryOperator::Neg,
                               expr: Box::new(operand), })
        },

        Some((Token::At, _)) => {
            let operand = parse_primary(tokens, last_line)?;

            Ok(Expr::UnaryOp { op:   UnaryOperator::Abs,
                               expr: Box::new(operand), })
        },

        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),

        None => Err(ParseError::UnexpectedEndOfInput { line: last_line }),
    }
}
