use crate::location::Location;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at {location}: Division by zero.")]
    DivisionByZero {
        /// Location of the division, which is that of its left operand.
        location: Location,
    },
}

impl RuntimeError {
    /// Gets the location the error was raised at.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::DivisionByZero { location } => *location,
        }
    }
}
