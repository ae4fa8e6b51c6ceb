use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// A grammar rule that can be tried as one alternative of
/// [`parse_one_of`].
pub type Alternative<'f, 'a, T> = &'f dyn Fn(&'a [Token]) -> ParseResult<'a, T>;

/// Consumes the next token if it is of the given kind.
///
/// # Returns
/// The matched token and the tokens after it.
///
/// # Errors
/// Returns [`ParseError::ExpectedToken`] if the input is empty or starts
/// with a different kind of token. Nothing is consumed in that case.
///
/// # Example
/// ```
/// use reckon::{
///     error::ParseError,
///     interpreter::{
///         lexer::{TokenKind, tokenize},
///         parser::utils::expect_token,
///     },
/// };
///
/// let tokens = tokenize(b"( 1").unwrap();
///
/// let (open, rest) = expect_token(&tokens, TokenKind::LeftParen).unwrap();
/// assert_eq!(open.text, "(");
/// assert_eq!(rest.len(), 1);
///
/// assert_eq!(expect_token(rest, TokenKind::RightParen).unwrap_err(),
///            ParseError::ExpectedToken { kind: TokenKind::RightParen });
/// ```
pub fn expect_token(tokens: &[Token], kind: TokenKind) -> ParseResult<'_, &Token> {
    match tokens.split_first() {
        Some((token, rest)) if token.kind == kind => Ok((token, rest)),
        _ => Err(ParseError::ExpectedToken { kind }),
    }
}

/// Tries each alternative against the same input and returns the first
/// success.
///
/// When every alternative fails, the failures are not discarded: the result
/// is a [`ParseError::Joined`] holding each alternative's error in the order
/// the alternatives were tried, followed by one final cause describing what
/// blocked them all:
/// - [`ParseError::UnexpectedEndOfInput`] if no tokens remain,
/// - [`ParseError::UnhandledToken`] naming the next token otherwise.
///
/// Errors that abort the whole parse, such as
/// [`ParseError::NestingTooDeep`], are returned as-is without trying the
/// remaining alternatives.
///
/// # Errors
/// Returns the joined error described above.
pub fn parse_one_of<'a, T>(tokens: &'a [Token],
                           alternatives: &[Alternative<'_, 'a, T>])
                           -> ParseResult<'a, T> {
    let mut causes = Vec::with_capacity(alternatives.len() + 1);

    for alternative in alternatives {
        match alternative(tokens) {
            Ok(parsed) => return Ok(parsed),
            Err(error @ ParseError::NestingTooDeep { .. }) => return Err(error),
            Err(error) => causes.push(error),
        }
    }

    causes.push(tokens.first()
                      .map_or(ParseError::UnexpectedEndOfInput, |token| {
                          ParseError::UnhandledToken { token: token.clone() }
                      }));
    Err(ParseError::Joined { causes })
}
