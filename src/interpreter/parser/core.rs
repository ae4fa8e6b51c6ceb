use log::debug;

use crate::{ast::Expr, config::Config, error::ParseError, interpreter::lexer::Token};

/// Result type used by the grammar rules.
///
/// A successful rule returns its value together with the tokens it left
/// unconsumed. A failed rule consumes nothing: the caller still holds the
/// slice it passed in and may retry another alternative on it.
pub type ParseResult<'a, T> = Result<(T, &'a [Token]), ParseError>;

/// A recursive-descent parser for arithmetic expressions.
///
/// Each grammar rule is one method; rules take the remaining tokens and the
/// current nesting depth and return a [`ParseResult`].
///
/// Grammar, lowest to highest precedence:
/// ```text
/// expression := additive
/// additive   := multiplicative (("+" | "-") multiplicative)*
/// multiplicative := atom (("*" | "/") atom)*
/// atom       := "(" expression ")" | "-" expression | NUMBER
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    pub(super) config: Config,
}

impl Parser {
    /// Creates a parser with the given limits.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar; it begins at the lowest
    /// precedence level.
    ///
    /// Grammar: `expression := additive`
    ///
    /// # Parameters
    /// - `tokens`: The remaining tokens.
    /// - `depth`: How many parentheses and negations enclose this
    ///   expression.
    ///
    /// # Returns
    /// The parsed expression and the tokens after it.
    pub fn parse_expression<'a>(&self, tokens: &'a [Token], depth: usize) -> ParseResult<'a, Expr> {
        self.parse_additive(tokens, depth)
    }
}

/// Parses a token sequence into a syntax tree using the default [`Config`].
///
/// See [`parse_with_config`].
///
/// # Errors
/// Returns a [`ParseError`] if the tokens do not form exactly one
/// expression.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize(b"-1 + 2").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// // Negation applies to the whole expression that follows it.
/// assert_eq!(expr.to_string(), "(-(1 + 2))");
/// ```
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    parse_with_config(tokens, &Config::default())
}

/// Parses a token sequence into a syntax tree.
///
/// The whole sequence must form a single expression.
///
/// # Errors
/// - [`ParseError::UnhandledToken`] naming the first leftover token if the
///   expression ends before the input does.
/// - [`ParseError::NestingTooDeep`] if the nesting limit of `config` is
///   exceeded.
/// - Any other [`ParseError`] raised by the grammar rules, typically a
///   [`ParseError::Joined`] listing every alternative that was tried.
pub fn parse_with_config(tokens: &[Token], config: &Config) -> Result<Expr, ParseError> {
    let parser = Parser::new(*config);
    let (expr, rest) = parser.parse_expression(tokens, 0)?;

    if let Some(token) = rest.first() {
        debug!("parse stopped at leftover {token}");
        return Err(ParseError::UnhandledToken { token: token.clone() });
    }

    debug!("parsed {} tokens into {expr}", tokens.len());
    Ok(expr)
}
