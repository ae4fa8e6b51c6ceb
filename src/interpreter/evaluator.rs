/// Core evaluation logic.
///
/// Contains the [`core::eval`] entry point and the structural recursion
/// over the syntax tree.
pub mod core;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication and truncating
/// division on signed 64-bit integers.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements arithmetic negation.
pub mod unary;

pub use self::core::{EvalResult, eval};
