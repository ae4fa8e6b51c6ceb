use reckon::{
    Location,
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{evaluator::eval, lexer::tokenize, parser::parse},
};

fn eval_source(input: &str) -> Result<i64, RuntimeError> {
    let tokens = tokenize(input.as_bytes()).unwrap_or_else(|e| panic!("{input:?}: {e}"));
    let expr = parse(&tokens).unwrap_or_else(|e| panic!("{input:?}: {e}"));
    eval(&expr)
}

fn num(value: i64) -> Expr {
    Expr::number(value, Location::default())
}

#[test]
fn arithmetic_on_hand_built_trees() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    assert_eq!(eval(&num(42)), Ok(42));
    assert_eq!(eval(&Expr::binary(num(40), Add, num(2))), Ok(42));
    assert_eq!(eval(&Expr::binary(num(40), Sub, num(2))), Ok(38));
    assert_eq!(eval(&Expr::binary(num(6), Mul, num(7))), Ok(42));
    assert_eq!(eval(&Expr::binary(num(85), Div, num(2))), Ok(42));
    assert_eq!(eval(&Expr::negate(Location::default(), num(42))), Ok(-42));
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval_source("1 + 2 * 3"), Ok(7));
    assert_eq!(eval_source("(1 + 2) * 3"), Ok(9));
    assert_eq!(eval_source("1 - 2 - 3"), Ok(-4));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval_source("1 / 2"), Ok(0));
    assert_eq!(eval_source("(0 - 9) / 4"), Ok(-2));
    assert_eq!(eval_source("(1 + 2) * 3 / 4 + -7"), Ok(-5));
}

#[test]
fn negation_quirk_evaluates_as_parsed() {
    assert_eq!(eval_source("-1"), Ok(-1));
    assert_eq!(eval_source("-1 + 2"), Ok(-3));
}

#[test]
fn division_by_zero_reports_the_division() {
    assert_eq!(eval_source("1 + 8 / 0"),
               Err(RuntimeError::DivisionByZero { location: Location::new(0, 4) }));
    assert_eq!(eval_source("(2 - 2)\n/ (2 - 2)"),
               Err(RuntimeError::DivisionByZero { location: Location::new(0, 1) }));
}

#[test]
fn left_operand_is_evaluated_first() {
    assert_eq!(eval_source("1 / 0 + 2 / 0"),
               Err(RuntimeError::DivisionByZero { location: Location::new(0, 0) }));
}

#[test]
fn arithmetic_wraps_on_overflow() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    assert_eq!(eval(&Expr::binary(num(i64::MAX), Add, num(1))), Ok(i64::MIN));
    assert_eq!(eval(&Expr::binary(num(i64::MIN), Sub, num(1))), Ok(i64::MAX));
    assert_eq!(eval(&Expr::binary(num(i64::MAX), Mul, num(2))), Ok(-2));
    assert_eq!(eval(&Expr::binary(num(i64::MIN), Div, num(-1))), Ok(i64::MIN));
    assert_eq!(eval(&Expr::negate(Location::default(), num(i64::MIN))), Ok(i64::MIN));
}

#[test]
fn evaluation_is_deterministic() {
    let tokens = tokenize(b"(12 - 5) * 3 / 2").unwrap();
    let expr = parse(&tokens).unwrap();

    assert_eq!(eval(&expr), Ok(10));
    assert_eq!(eval(&expr), eval(&expr));
}

#[test]
fn runtime_error_display() {
    let error = RuntimeError::DivisionByZero { location: Location::new(3, 9) };

    assert_eq!(error.to_string(), "Error at 3:9: Division by zero.");
}
