use crate::{
    interpreter::lexer::{Token, TokenKind},
    location::Location,
};

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The next token was not of the required kind. No input was consumed.
    #[error("Expected token {kind}.")]
    ExpectedToken {
        /// The kind that was required.
        kind: TokenKind,
    },
    /// A token that no grammar rule could make use of.
    #[error("Error at {}: Unhandled token {token}.", .token.location)]
    UnhandledToken {
        /// The token that blocked parsing.
        token: Token,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A number literal that does not fit in a signed 64-bit integer.
    #[error("Error at {}: Number literal {} is too large.", .token.location, .token.text)]
    InvalidNumber {
        /// The offending literal.
        token: Token,
    },
    /// Parentheses or negations nested deeper than the configured limit.
    #[error("Error at {location}: Expression nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// Where the nesting limit was hit.
        location: Location,
        /// The configured limit.
        limit:    usize,
    },
    /// Every alternative of a grammar rule failed.
    ///
    /// Holds each alternative's error in the order the alternatives were
    /// tried, followed by [`Self::UnexpectedEndOfInput`] or
    /// [`Self::UnhandledToken`] for the input that blocked them all.
    #[error("{}", join_causes(.causes))]
    Joined {
        /// The individual failures, in attempt order.
        causes: Vec<Self>,
    },
}

impl ParseError {
    /// Gets the first source location the error refers to, if any.
    ///
    /// For a joined error this is the first cause that has a location.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::UnhandledToken { token } | Self::InvalidNumber { token } => Some(token.location),
            Self::NestingTooDeep { location, .. } => Some(*location),
            Self::Joined { causes } => causes.iter().find_map(Self::location),
            Self::ExpectedToken { .. } | Self::UnexpectedEndOfInput => None,
        }
    }
}

/// Renders joined causes one per line.
fn join_causes(causes: &[ParseError]) -> String {
    causes.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
