/// A zero-based position in the source text.
///
/// A `Location` is a running cursor: the lexer advances it over every
/// character it consumes, whether or not that character ends up in a token.
/// Every character moves the cursor by exactly one column, including tabs
/// and multi-byte characters. A newline moves it to the start of the next
/// line.
///
/// ## Example
/// ```
/// use reckon::Location;
///
/// let mut location = Location::default();
/// location.advance_str("12\n\té");
///
/// assert_eq!(location, Location::new(1, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column, counted in characters.
    pub column: usize,
}

impl Location {
    /// Creates a location at the given line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves the cursor past a single character.
    pub const fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Moves the cursor past every character of `text`.
    pub fn advance_str(&mut self, text: &str) {
        text.chars().for_each(|ch| self.advance(ch));
    }

    /// Moves the cursor past the UTF-8 encoded `bytes`.
    ///
    /// Invalid sequences count as one replacement character each; the lexer
    /// never hands such input to a location.
    pub fn advance_bytes(&mut self, bytes: &[u8]) {
        self.advance_str(&String::from_utf8_lossy(bytes));
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
