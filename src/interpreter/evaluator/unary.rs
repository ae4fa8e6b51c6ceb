/// Negates an evaluated operand.
///
/// Negating `i64::MIN` wraps around to `i64::MIN`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::unary::eval_negate;
///
/// assert_eq!(eval_negate(3), -3);
/// assert_eq!(eval_negate(i64::MIN), i64::MIN);
/// ```
#[must_use]
pub const fn eval_negate(value: i64) -> i64 {
    value.wrapping_neg()
}
