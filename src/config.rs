use log::warn;

/// Default limit on nested parentheses and negations.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Environment variable read by [`Config::from_env`].
pub const MAX_NESTING_DEPTH_VAR: &str = "RECKON_MAX_NESTING_DEPTH";

/// Parser limits.
///
/// The grammar recurses once per parenthesis or unary minus, so deeply
/// nested input would otherwise be bounded only by the call stack.
/// Expressions within the limit parse exactly as they would without it.
///
/// ## Example
/// ```
/// use reckon::{Config, config::DEFAULT_MAX_NESTING_DEPTH};
///
/// assert_eq!(Config::default().max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
/// assert_eq!(Config::default().with_max_nesting_depth(8).max_nesting_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many parentheses and negations may be open at once.
    pub max_nesting_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH }
    }
}

impl Config {
    /// Returns `self` with a different nesting limit.
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`MAX_NESTING_DEPTH_VAR`]. Unset variables keep the default; a
    /// value that is not a positive integer is logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_NESTING_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_nesting_depth = depth,
                _ => warn!("ignoring {MAX_NESTING_DEPTH_VAR}={raw:?}: expected a positive integer"),
            }
        }
        config
    }
}
