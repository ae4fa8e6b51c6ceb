/// Parser entry points and shared types.
///
/// Holds the [`core::Parser`], the [`core::ParseResult`] alias threaded
/// through every grammar rule, and the top-level `parse` functions that
/// require the whole token sequence to be consumed.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels, additive and
/// multiplicative.
pub mod binary;

/// Atom parsing.
///
/// Parses parenthesized expressions, unary negation and number literals.
pub mod unary;

/// Backtracking helpers shared by the grammar rules.
///
/// Provides single-token expectations and the ordered alternation that
/// aggregates the errors of every failed alternative.
pub mod utils;

pub use self::core::{parse, parse_with_config};
