use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_negate},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a syntax tree to a signed 64-bit integer.
///
/// Evaluation is a pure structural recursion: binary operands are evaluated
/// left first, then right. Arithmetic wraps on overflow and division
/// truncates toward zero.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if any divisor evaluates to
/// zero.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::eval, lexer::tokenize, parser::parse};
///
/// let tokens = tokenize(b"(1 + 2) * 3 / 4 + -7").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(eval(&expr).unwrap(), -5);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    let value = eval_node(expr)?;
    debug!("evaluated {expr} to {value}");
    Ok(value)
}

/// Evaluates one node and, recursively, its operands.
pub(super) fn eval_node(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp { left, op, right } => {
            let lhs = eval_node(left)?;
            let rhs = eval_node(right)?;
            eval_binary(*op, lhs, rhs, expr.location())
        },
        Expr::Negate { expr, .. } => Ok(eval_negate(eval_node(expr)?)),
    }
}
