/// Lexing errors.
///
/// Raised when the lexer meets input that is neither whitespace nor the
/// start of a token. Lexing halts at the first such error.
pub mod lex_error;
/// Parsing errors.
///
/// Defines every way the token sequence can fail to form an expression,
/// including the joined error produced when all alternatives of a grammar
/// rule fail.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a syntax tree.
pub mod runtime_error;

pub use lex_error::{LexError, TokenizeError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse, evaluate pipeline.
///
/// Each stage fails independently and the first failure is returned as-is;
/// later stages never run after an earlier one has failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// The tokens did not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Gets the source location the error refers to, if it has one.
    #[must_use]
    pub fn location(&self) -> Option<crate::location::Location> {
        match self {
            Self::Tokenize(error) => Some(error.error.location()),
            Self::Parse(error) => error.location(),
            Self::Runtime(error) => Some(error.location()),
        }
    }
}
