use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    location::Location,
};

/// Applies a binary operator to two evaluated operands.
///
/// Addition, subtraction and multiplication wrap around on overflow.
/// Division truncates toward zero; `i64::MIN / -1` wraps to `i64::MIN`.
///
/// # Parameters
/// - `op`: Binary operator.
/// - `lhs`: Value of the left operand.
/// - `rhs`: Value of the right operand.
/// - `location`: Location of the operation, used for error reporting.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when dividing by zero.
///
/// # Example
/// ```
/// use reckon::{
///     Location,
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// let here = Location::default();
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2, here), Ok(-3));
/// assert_eq!(eval_binary(BinaryOperator::Add, i64::MAX, 1, here), Ok(i64::MIN));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0, here),
///            Err(RuntimeError::DivisionByZero { location: here }));
/// ```
pub const fn eval_binary(op: BinaryOperator,
                         lhs: i64,
                         rhs: i64,
                         location: Location)
                         -> EvalResult<i64> {
    match op {
        BinaryOperator::Add => Ok(lhs.wrapping_add(rhs)),
        BinaryOperator::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinaryOperator::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinaryOperator::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { location });
            }
            Ok(lhs.wrapping_div(rhs))
        },
    }
}
