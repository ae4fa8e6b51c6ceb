use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles the left-associative binary operators `+` and `-`, so
    /// `1 - 2 - 3` parses as `(1 - 2) - 3`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Parameters
    /// - `tokens`: The remaining tokens.
    /// - `depth`: The current nesting depth.
    ///
    /// # Returns
    /// A left-leaning `Expr::BinaryOp` chain and the tokens after it.
    pub fn parse_additive<'a>(&self, tokens: &'a [Token], depth: usize) -> ParseResult<'a, Expr> {
        let (mut left, mut rest) = self.parse_multiplicative(tokens, depth)?;
        while let Some((token, after_op)) = rest.split_first()
              && let Some(op) = token_to_binary_operator(token.kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (right, after_right) = self.parse_multiplicative(after_op, depth)?;
            left = Expr::binary(left, op, right);
            rest = after_right;
        }
        Ok((left, rest))
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*` and `/`.
    ///
    /// The rule is: `multiplicative := atom (("*" | "/") atom)*`
    ///
    /// # Parameters
    /// - `tokens`: The remaining tokens.
    /// - `depth`: The current nesting depth.
    ///
    /// # Returns
    /// A binary expression tree combining atoms, and the tokens after it.
    pub fn parse_multiplicative<'a>(&self,
                                    tokens: &'a [Token],
                                    depth: usize)
                                    -> ParseResult<'a, Expr> {
        let (mut left, mut rest) = self.parse_atom(tokens, depth)?;
        while let Some((token, after_op)) = rest.split_first()
              && let Some(op) = token_to_binary_operator(token.kind)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (right, after_right) = self.parse_atom(after_op, depth)?;
            left = Expr::binary(left, op, right);
            rest = after_right;
        }
        Ok((left, rest))
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Number | TokenKind::LeftParen | TokenKind::RightParen => None,
    }
}
