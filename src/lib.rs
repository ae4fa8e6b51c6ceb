//! # reckon
//!
//! reckon is a small integer arithmetic expression interpreter.
//! It tokenizes, parses and evaluates expressions built from decimal
//! literals, `+`, `-`, `*`, `/`, unary minus and parentheses.
//!
//! The pipeline is `source bytes → tokens → syntax tree → i64`, and every
//! stage can be used on its own:
//!
//! ```
//! use reckon::interpreter::{evaluator::eval, lexer::tokenize, parser::parse};
//!
//! let tokens = tokenize(b"1 + 2 * 3").unwrap();
//! let expr = parse(&tokens).unwrap();
//! assert_eq!(eval(&expr).unwrap(), 7);
//! ```

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

use log::debug;

use crate::interpreter::{evaluator::eval, lexer::tokenize, parser::parse_with_config};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// expression as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines number literals, negation and the binary operators.
/// - Attaches source locations to nodes for error reporting.
pub mod ast;
/// Parser limits and how to load them.
pub mod config;
/// An append-only log of located errors and warnings.
///
/// Lets tools built on top of the interpreter collect messages in emission
/// order for later inspection.
pub mod diagnostics;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Every stage has its own error enum carrying the source location of the
/// failure. The crate-level [`Error`] wraps whichever stage failed first.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Keeps structured causes so errors compare exactly in tests.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Provides the lexer, parser and evaluator entry points.
/// - Keeps each stage independent so failures never cascade.
pub mod interpreter;
/// Line and column tracking for source text.
pub mod location;

pub use config::Config;
pub use diagnostics::Diagnostics;
pub use error::Error;
pub use location::Location;

/// Tokenizes, parses and evaluates `source` with the default [`Config`].
///
/// # Errors
/// Returns the failure of the first stage that fails; later stages do not
/// run.
///
/// # Examples
/// ```
/// use reckon::{Error, evaluate};
///
/// assert_eq!(evaluate(b"(1 + 2) * 3").unwrap(), 9);
/// assert_eq!(evaluate(b"1 - 2 - 3").unwrap(), -4);
///
/// // Negation applies to everything that follows it.
/// assert_eq!(evaluate(b"-1 + 2").unwrap(), -3);
///
/// assert!(matches!(evaluate(b"1 / 0"), Err(Error::Runtime(_))));
/// assert!(matches!(evaluate(b"1 +"), Err(Error::Parse(_))));
/// assert!(matches!(evaluate(b"1 ^ 2"), Err(Error::Tokenize(_))));
/// ```
pub fn evaluate(source: &[u8]) -> Result<i64, Error> {
    evaluate_with_config(source, &Config::default())
}

/// Tokenizes, parses and evaluates `source`.
///
/// # Errors
/// Returns the failure of the first stage that fails; later stages do not
/// run.
pub fn evaluate_with_config(source: &[u8], config: &Config) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    let expr = parse_with_config(&tokens, config)?;
    let value = eval(&expr)?;
    debug!("{} source bytes evaluated to {value}", source.len());
    Ok(value)
}
