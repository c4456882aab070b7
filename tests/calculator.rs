use symcalc::{
    Notation,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ParseError, RuntimeError},
    eval_line,
    interpreter::evaluator::core::Env,
    parse_line, run_script,
};

fn int(value: i64) -> Expr {
    Expr::from(value)
}

fn var(name: &str) -> Expr {
    Expr::from(name)
}

fn binop(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right), }
}

fn unop(op: UnaryOperator, expr: Expr) -> Expr {
    Expr::UnaryOp { op,
                    expr: Box::new(expr), }
}

fn assign(name: &str, value: Expr) -> Expr {
    Expr::Assign { name:  name.to_string(),
                   value: Box::new(value), }
}

fn eval(env: &mut Env, expr: &Expr) -> Expr {
    env.eval(expr)
       .unwrap_or_else(|e| panic!("Evaluation of '{expr}' failed: {e}"))
}

fn eval_err(env: &mut Env, expr: &Expr) -> RuntimeError {
    match env.eval(expr) {
        Ok(value) => panic!("Evaluation of '{expr}' succeeded with '{value}' but was expected to fail"),
        Err(e) => e,
    }
}

fn parse_rpn_err(src: &str) -> ParseError {
    match parse_line(src, Notation::Rpn) {
        Ok(expr) => panic!("Parsing '{src}' succeeded with '{expr}' but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn constant_arithmetic() {
    let mut env = Env::new();

    assert_eq!(eval(&mut env, &binop(BinaryOperator::Plus, int(8), int(9))), int(17));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Minus, int(8), int(9))), int(-1));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Times, int(3), int(4))), int(12));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Div, int(9), int(3))), int(3));

    // Nested trees reduce bottom-up.
    let nested = binop(BinaryOperator::Plus,
                       int(8),
                       binop(BinaryOperator::Plus, int(9), int(8)));
    assert_eq!(eval(&mut env, &nested), int(25));
}

#[test]
fn division_is_floor_division() {
    let mut env = Env::new();

    assert_eq!(eval(&mut env, &binop(BinaryOperator::Div, int(-7), int(2))), int(-4));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Div, int(7), int(-2))), int(-4));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Div, int(-7), int(-2))), int(3));
    assert_eq!(eval(&mut env, &binop(BinaryOperator::Div, int(9), int(4))), int(2));
}

#[test]
fn division_by_zero_fails() {
    let mut env = Env::new();

    for dividend in [-3, 0, 17] {
        let err = eval_err(&mut env, &binop(BinaryOperator::Div, int(dividend), int(0)));
        assert_eq!(err, RuntimeError::DivisionByZero);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let mut env = Env::new();

    for value in [-5, 0, 42] {
        assert_eq!(eval(&mut env, &int(value)), int(value));
    }

    // A reduced result evaluates to an equal node again.
    let reduced = eval(&mut env, &binop(BinaryOperator::Times, int(6), int(7)));
    assert_eq!(eval(&mut env, &reduced), reduced);
}

#[test]
fn assignment_round_trip_and_overwrite() {
    let mut env = Env::new();

    assert_eq!(eval(&mut env, &assign("x", int(5))), int(5));
    assert_eq!(eval(&mut env, &var("x")), int(5));

    // Re-assignment overwrites; it does not accumulate.
    assert_eq!(eval(&mut env, &assign("x", int(6))), int(6));
    assert_eq!(eval(&mut env, &var("x")), int(6));
}

#[test]
fn bound_expressions_reevaluate_lazily() {
    let mut env = Env::new();

    // x is bound to an expression over y; its value follows y around.
    env.bind("x", binop(BinaryOperator::Plus, var("y"), int(9))).unwrap();
    eval(&mut env, &assign("y", int(3)));

    let x_plus_4 = binop(BinaryOperator::Plus, var("x"), int(4));
    assert_eq!(eval(&mut env, &x_plus_4), int(16));

    eval(&mut env, &assign("y", int(6)));
    assert_eq!(eval(&mut env, &x_plus_4), int(19));
}

#[test]
fn self_cycle_falls_back_to_symbolic() {
    let mut env = Env::new();

    env.bind("x", var("x")).unwrap();
    assert_eq!(eval(&mut env, &var("x")), var("x"));
}

#[test]
fn mutual_cycle_terminates() {
    let mut env = Env::new();

    env.bind("x", binop(BinaryOperator::Plus, var("y"), int(3))).unwrap();
    env.bind("y", binop(BinaryOperator::Plus, var("x"), int(3))).unwrap();

    // The guard breaks the recursion; the inner variable stays symbolic, so
    // the strict binary operator reports it instead of looping forever.
    let err = eval_err(&mut env, &var("x"));
    assert!(matches!(err, RuntimeError::OperandType { .. }), "unexpected error: {err}");

    // The guard stack does not leak into later evaluations.
    eval(&mut env, &assign("z", int(1)));
    assert_eq!(eval(&mut env, &var("z")), int(1));
}

#[test]
fn unary_partial_evaluation_preserves_identity() {
    let mut env = Env::new();

    let neg_z = unop(UnaryOperator::Neg, var("z"));
    assert_eq!(eval(&mut env, &neg_z), neg_z);

    // Once z has a value the same node reduces fully.
    eval(&mut env, &assign("z", int(4)));
    assert_eq!(eval(&mut env, &neg_z), int(-4));
}

#[test]
fn unary_operators_reduce_constants() {
    let mut env = Env::new();

    assert_eq!(eval(&mut env, &unop(UnaryOperator::Neg, int(5))), int(-5));
    assert_eq!(eval(&mut env, &unop(UnaryOperator::Abs, int(-5))), int(5));
    assert_eq!(eval(&mut env, &unop(UnaryOperator::Abs, int(5))), int(5));
}

#[test]
fn symbolic_binary_operand_is_an_error() {
    let mut env = Env::new();

    let err = eval_err(&mut env, &binop(BinaryOperator::Plus, var("free"), int(1)));
    assert_eq!(err,
               RuntimeError::OperandType { op:    BinaryOperator::Plus,
                                           found: "free".to_string(), });
}

#[test]
fn rpn_round_trip() {
    let mut env = Env::new();

    let expr = parse_line("5 4 3 * + x =", Notation::Rpn).unwrap();
    assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
    assert_eq!(expr,
               assign("x",
                      binop(BinaryOperator::Plus,
                            int(5),
                            binop(BinaryOperator::Times, int(4), int(3)))));

    assert_eq!(eval(&mut env, &expr), int(17));
    assert_eq!(env.lookup("x"), Some(&int(17)));
}

#[test]
fn rpn_operand_order_is_source_order() {
    // The operand pushed earlier is the left operand.
    let expr = parse_line("8 3 -", Notation::Rpn).unwrap();
    assert_eq!(expr, binop(BinaryOperator::Minus, int(8), int(3)));
    assert_eq!(Env::new().eval(&expr).unwrap(), int(5));
}

#[test]
fn rpn_imbalance_errors() {
    assert_eq!(parse_rpn_err("3 +"),
               ParseError::InsufficientOperands { op:   "+".to_string(),
                                                  line: 1, });
    assert_eq!(parse_rpn_err("3 4"),
               ParseError::UnbalancedExpression { count: 2,
                                                  line:  1, });
    assert_eq!(parse_rpn_err(""), ParseError::EmptyExpression);
    assert_eq!(parse_rpn_err("~"),
               ParseError::InsufficientOperands { op:   "~".to_string(),
                                                  line: 1, });
}

#[test]
fn rpn_assignment_target_must_be_a_variable() {
    assert_eq!(parse_rpn_err("3 4 ="),
               ParseError::InvalidAssignTarget { found: "3".to_string(),
                                                 line:  1, });
}

#[test]
fn rpn_rejects_parentheses() {
    assert!(matches!(parse_rpn_err("( 3 4 + )"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn negative_literals_are_single_tokens() {
    let mut env = Env::new();

    assert_eq!(eval_line("-5 @", Notation::Rpn, &mut env).unwrap(), int(5));
    assert_eq!(parse_line("-5", Notation::Rpn).unwrap(), int(-5));
}

#[test]
fn infix_parity() {
    let mut env = Env::new();

    let expr = parse_line("x = 5 + 4 * 3", Notation::Infix).unwrap();
    assert_eq!(expr.to_string(), "x = (5 + (4 * 3))");
    assert_eq!(eval(&mut env, &expr), int(17));
    assert_eq!(env.lookup("x"), Some(&int(17)));
}

#[test]
fn infix_precedence_and_grouping() {
    let mut env = Env::new();

    assert_eq!(eval_line("2 + 3 * 4", Notation::Infix, &mut env).unwrap(), int(14));
    assert_eq!(eval_line("( 2 + 3 ) * 4", Notation::Infix, &mut env).unwrap(), int(20));
    assert_eq!(eval_line("10 - 2 - 3", Notation::Infix, &mut env).unwrap(), int(5));
}

#[test]
fn infix_errors() {
    let err = parse_line("2 +", Notation::Infix).unwrap_err();
    assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 1 });

    let err = parse_line("( 2 + 3", Notation::Infix).unwrap_err();
    assert_eq!(err, ParseError::ExpectedClosingParen { line: 1 });

    let err = parse_line("5 = x", Notation::Infix).unwrap_err();
    assert_eq!(err,
               ParseError::InvalidAssignTarget { found: "5".to_string(),
                                                 line:  1, });

    let err = parse_line("2 3", Notation::Infix).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn lexer_rejects_garbage() {
    let err = parse_line("3 $ +", Notation::Rpn).unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedToken { token: "$".to_string(),
                                             line:  1, });
}

#[test]
fn typed_store_uses_default_for_unbound_names() {
    let mut env = Env::with_default(0);

    assert_eq!(eval(&mut env, &var("a")), int(0));

    eval(&mut env, &assign("a", int(7)));
    assert_eq!(eval(&mut env, &var("a")), int(7));
}

#[test]
fn typed_store_lookup_yields_default_for_unbound_names() {
    let mut env = Env::with_default(0);

    // Unbound names read back as the default, not as absent.
    assert_eq!(env.lookup("a"), Some(&int(0)));

    eval(&mut env, &assign("a", int(7)));
    assert_eq!(env.lookup("a"), Some(&int(7)));

    // Only the typed store has that fallback.
    assert_eq!(Env::new().lookup("a"), None);
    assert_eq!(Env::strict().lookup("a"), None);
}

#[test]
fn typed_store_rejects_symbolic_values() {
    let mut env = Env::with_default(0);

    let err = env.bind("a", var("b")).unwrap_err();
    assert_eq!(err,
               RuntimeError::TypeMismatch { name:  "a".to_string(),
                                            found: "b".to_string(), });
}

#[test]
fn strict_mode_errors_on_unbound_names() {
    let mut env = Env::strict();

    let err = eval_err(&mut env, &var("missing"));
    assert_eq!(err, RuntimeError::UnboundVariable { name: "missing".to_string() });

    eval(&mut env, &assign("missing", int(1)));
    assert_eq!(eval(&mut env, &var("missing")), int(1));
}

#[test]
fn dump_is_sorted_and_clear_empties() {
    let mut env = Env::new();

    eval(&mut env, &assign("b", int(2)));
    eval(&mut env, &assign("a", int(1)));
    assert_eq!(env.dump(),
               vec![("a".to_string(), int(1)), ("b".to_string(), int(2))]);

    env.clear();
    assert!(env.dump().is_empty());
    assert_eq!(eval(&mut env, &var("a")), var("a"));
}

#[test]
fn overflow_is_reported() {
    let mut env = Env::new();

    let err = eval_err(&mut env, &binop(BinaryOperator::Plus, int(i64::MAX), int(1)));
    assert_eq!(err, RuntimeError::Overflow);

    let err = eval_err(&mut env, &unop(UnaryOperator::Neg, int(i64::MIN)));
    assert_eq!(err, RuntimeError::Overflow);
}

#[test]
fn scripts_run_line_by_line() {
    let mut env = Env::new();

    let script = "# doubling a stored value\n3 x =\nx x + y =\ny\n";
    let result = run_script(script, Notation::Rpn, &mut env).unwrap();

    assert_eq!(result, Some(int(6)));
    assert_eq!(env.lookup("y"), Some(&int(6)));
}

#[test]
fn script_errors_carry_line_numbers() {
    let mut env = Env::new();

    let script = "3 x =\n3 +\n";
    let err = run_script(script, Notation::Rpn, &mut env).unwrap_err();

    assert_eq!(err.to_string(), "Error on line 2: Insufficient operands for '+'.");
}

#[test]
fn empty_script_evaluates_to_nothing() {
    let mut env = Env::new();

    let result = run_script("# comments only\n\n", Notation::Rpn, &mut env).unwrap();
    assert_eq!(result, None);
}
