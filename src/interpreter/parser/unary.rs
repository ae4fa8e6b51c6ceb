use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::{Alternative, expect_token, parse_one_of},
        },
    },
    location::Location,
};

impl Parser {
    /// Parses the highest-precedence expressions.
    ///
    /// Tries, in this order, a parenthesized expression, a negation and a
    /// number literal. The first alternative that succeeds wins; if none
    /// does, the error lists why each one failed.
    ///
    /// Grammar: `atom := "(" expression ")" | "-" expression | NUMBER`
    ///
    /// # Parameters
    /// - `tokens`: The remaining tokens.
    /// - `depth`: The current nesting depth.
    ///
    /// # Returns
    /// The parsed atom and the tokens after it.
    pub fn parse_atom<'a>(&self, tokens: &'a [Token], depth: usize) -> ParseResult<'a, Expr> {
        let grouping = |input: &'a [Token]| self.parse_grouping(input, depth);
        let negate = |input: &'a [Token]| self.parse_negate(input, depth);
        let alternatives: [Alternative<'_, 'a, Expr>; 3] = [&grouping, &negate, &parse_number];
        parse_one_of(tokens, &alternatives)
    }

    /// Parses a parenthesized expression.
    ///
    /// Expected form `( expression )`. The parentheses produce no node of
    /// their own; the inner expression is returned as-is.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping<'a>(&self, tokens: &'a [Token], depth: usize) -> ParseResult<'a, Expr> {
        let (open, rest) = expect_token(tokens, TokenKind::LeftParen)?;
        let depth = self.enter(open.location, depth)?;
        let (expr, rest) = self.parse_expression(rest, depth)?;
        let (_, rest) = expect_token(rest, TokenKind::RightParen)?;
        Ok((expr, rest))
    }

    /// Parses a unary negation.
    ///
    /// The operand is a full expression, not an atom: `-1 + 2` parses as
    /// `-(1 + 2)`. The node is located at the `-` token.
    ///
    /// Grammar: `negate := "-" expression`
    fn parse_negate<'a>(&self, tokens: &'a [Token], depth: usize) -> ParseResult<'a, Expr> {
        let (minus, rest) = expect_token(tokens, TokenKind::Minus)?;
        let depth = self.enter(minus.location, depth)?;
        let (expr, rest) = self.parse_expression(rest, depth)?;
        Ok((Expr::negate(minus.location, expr), rest))
    }

    /// Returns the depth one level below `depth`, or an error if that would
    /// exceed the configured limit.
    const fn enter(&self, location: Location, depth: usize) -> Result<usize, ParseError> {
        let limit = self.config.max_nesting_depth;
        if depth >= limit {
            return Err(ParseError::NestingTooDeep { location, limit });
        }
        Ok(depth + 1)
    }
}

/// Parses a number literal.
///
/// # Errors
/// - [`ParseError::ExpectedToken`] if the next token is not a number.
/// - [`ParseError::InvalidNumber`] if the literal does not fit in an `i64`.
fn parse_number(tokens: &[Token]) -> ParseResult<'_, Expr> {
    let (token, rest) = expect_token(tokens, TokenKind::Number)?;
    let value = token.text
                     .parse::<i64>()
                     .map_err(|_| ParseError::InvalidNumber { token: token.clone() })?;
    Ok((Expr::number(value, token.location), rest))
}
