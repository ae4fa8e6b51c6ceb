use crate::{interpreter::lexer::Token, location::Location};

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A byte that does not start a valid UTF-8 sequence.
    #[error("Error at {location}: Unhandled byte {byte:#04x}.")]
    UnhandledByte {
        /// The offending byte.
        byte:     u8,
        /// Where the byte was found.
        location: Location,
    },
    /// A character that does not start any token.
    #[error("Error at {location}: Unhandled rune '{rune}'.")]
    UnhandledRune {
        /// The offending character.
        rune:     char,
        /// Where the character was found.
        location: Location,
    },
}

impl LexError {
    /// Gets the location of the offending input.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnhandledByte { location, .. } | Self::UnhandledRune { location, .. } => *location,
        }
    }
}

/// A failed tokenization, together with the tokens lexed before the
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct TokenizeError {
    /// Every token produced before lexing stopped.
    pub tokens: Vec<Token>,
    /// Why lexing stopped.
    #[source]
    pub error:  LexError,
}
