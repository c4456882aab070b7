use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenCat},
        parser::ParseResult,
    },
};

/// Parses a postfix (RPN) token sequence into a single expression tree.
///
/// The builder walks the tokens left to right, maintaining one operand stack
/// of `Expr` nodes. Constants and identifiers push leaves; operators pop the
/// operands they need and push the combined node. Because postfix input
/// encodes structure in operand order, a single pass with no precedence or
/// grouping logic suffices.
///
/// For binary operators and assignment the right operand is popped first, so
/// the operand pushed earlier ends up on the left; stack order preserves
/// left-to-right source order. `parse("3 4 * x +")` therefore yields
/// `Plus(Times(3, 4), Var(x))`.
///
/// Assignment accepts its variable on either side, so `x 3 =` and `3 x =`
/// both bind `x`; when both operands are variables the earlier-pushed one is
/// the target.
///
/// # Parameters
/// - `tokens`: The classified `(token, line)` sequence for one expression.
///
/// # Returns
/// The single expression left on the stack once every token is consumed.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds fewer operands on the stack
///   than it needs.
/// - `InvalidAssignTarget` if neither operand of `=` is a variable.
/// - `UnexpectedToken` for tokens with no meaning in postfix notation, such
///   as parentheses.
/// - `UnbalancedExpression` if more than one expression remains at the end.
/// - `EmptyExpression` if no expression remains at the end.
///
/// # Example
/// ```
/// use symcalc::interpreter::{lexer::tokenize, parser::rpn::parse};
///
/// let tokens = tokenize("5 4 3 * + x =").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut stack: Vec<Expr> = Vec::new();
    let mut last_line = 1;

    for (token, line) in tokens {
        last_line = *line;

        match token.category() {
            Some(TokenCat::Const(value)) => stack.push(Expr::IntConst(value)),
            Some(TokenCat::Ident(name)) => stack.push(Expr::Var(name)),
            Some(TokenCat::Unop(op)) => {
                let operand = pop_operand(&mut stack, token, *line)?;

                stack.push(Expr::UnaryOp { op,
                                           expr: Box::new(operand), });
            },
            Some(TokenCat::Binop(op)) => {
                let (left, right) = pop_pair(&mut stack, token, *line)?;

                stack.push(Expr::BinaryOp { op,
                                            left: Box::new(left),
                                            right: Box::new(right), });
            },
            Some(TokenCat::Assign) => {
                let (left, right) = pop_pair(&mut stack, token, *line)?;

                // Both 'x 3 =' and '3 x =' assign 3 to x; the variable
                // operand is the target whichever side it was pushed on.
                // When both operands are variables, the earlier one wins.
                let (name, value) = match (left, right) {
                    (Expr::Var(name), value) | (value, Expr::Var(name)) => (name, value),
                    (left, _) => {
                        return Err(ParseError::InvalidAssignTarget { found: left.to_string(),
                                                                     line:  *line, });
                    },
                };

                stack.push(Expr::Assign { name,
                                          value: Box::new(value), });
            },
            None => {
                return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         line:  *line, });
            },
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::UnbalancedExpression { count: stack.len(),
                                                      line:  last_line, });
    }

    stack.pop().ok_or(ParseError::EmptyExpression)
}

/// Pops the single operand of a unary token.
fn pop_operand(stack: &mut Vec<Expr>, token: &Token, line: usize) -> ParseResult<Expr> {
    stack.pop()
         .ok_or_else(|| ParseError::InsufficientOperands { op: token.to_string(),
                                                           line })
}

/// Pops the two operands of a binary or assignment token.
///
/// The right operand is popped first, so the pair comes back in source order.
fn pop_pair(stack: &mut Vec<Expr>, token: &Token, line: usize) -> ParseResult<(Expr, Expr)> {
    let right = pop_operand(stack, token, line)?;
    let left = pop_operand(stack, token, line)?;

    Ok((left, right))
}
