use log::{error, warn};

use crate::location::Location;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A problem that prevents a result.
    Error,
    /// A problem worth reporting that does not prevent a result.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single located message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the message is.
    pub severity: Severity,
    /// Where in the source the message applies.
    pub location: Location,
    /// The message itself.
    pub message:  String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.location, self.message)
    }
}

/// An append-only log of diagnostics.
///
/// Entries are kept in the order they were emitted. Nothing is ever
/// deduplicated, reordered or removed. Every entry is also forwarded to the
/// `log` facade at the matching level.
///
/// ## Example
/// ```
/// use reckon::{
///     Diagnostics, Location,
///     diagnostics::Severity,
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.warning(Location::new(0, 4), "redundant parentheses");
/// diagnostics.error(Location::new(1, 0), "division by zero");
///
/// assert_eq!(diagnostics.len(), 2);
/// assert_eq!(diagnostics.entries()[0].severity, Severity::Warning);
/// assert!(diagnostics.has_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an error.
    pub fn error(&mut self, location: Location, message: impl Into<String>) {
        self.push(Severity::Error, location, message.into());
    }

    /// Appends a warning.
    pub fn warning(&mut self, location: Location, message: impl Into<String>) {
        self.push(Severity::Warning, location, message.into());
    }

    /// All entries, in emission order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, location: Location, message: String) {
        match severity {
            Severity::Error => error!("{location}: {message}"),
            Severity::Warning => warn!("{location}: {message}"),
        }
        self.entries.push(Diagnostic { severity,
                                       location,
                                       message });
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
