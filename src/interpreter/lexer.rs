use std::iter::FusedIterator;

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{LexError, TokenizeError},
    location::Location,
};

/// The kind of a lexical token.
///
/// This enum doubles as the `logos` matcher definition: the derive compiles
/// the patterns below into a single DFA at build time, so there is no
/// runtime regex state to initialize or share. Whitespace (the ASCII class
/// `[ \t\n\f\r]`) is skipped between tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(source = [u8])]
#[logos(skip r"[ \t\n\f\r]+")]
pub enum TokenKind {
    /// Unsigned decimal literal such as `42`. Signs are handled by the parser.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
        };
        write!(f, "{name}")
    }
}

/// A classified, located piece of source text.
///
/// Tokens are created by the lexer and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// Where the token starts.
    pub location: Location,
    /// The matched source text.
    pub text:     String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, location: Location, text: impl Into<String>) -> Self {
        Self { kind,
               location,
               text: text.into() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {}, {})", self.kind, self.location, self.text)
    }
}

/// Streams located tokens out of a byte buffer.
///
/// The lexer wraps the generated `logos` lexer and keeps a [`Location`] in
/// step with it: before each token the cursor is advanced over the skipped
/// whitespace, and after it over the token text. The first unmatched input
/// yields a [`LexError`] and ends the stream; there is no resynchronization.
///
/// ## Example
/// ```
/// use reckon::{
///     Location,
///     interpreter::lexer::{Lexer, TokenKind},
/// };
///
/// let tokens: Vec<_> = Lexer::new(b"1 +\n 2").collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(tokens[1].kind, TokenKind::Plus);
/// assert_eq!(tokens[2].location, Location::new(1, 1));
/// ```
pub struct Lexer<'s> {
    source:   &'s [u8],
    inner:    logos::Lexer<'s, TokenKind>,
    cursor:   usize,
    location: Location,
    failed:   bool,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s [u8]) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               cursor: 0,
               location: Location::default(),
               failed: false }
    }

    /// Advances the location cursor to the byte `offset`.
    fn seek(&mut self, offset: usize) {
        self.location.advance_bytes(&self.source[self.cursor..offset]);
        self.cursor = offset;
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
         .field("cursor", &self.cursor)
         .field("location", &self.location)
         .field("failed", &self.failed)
         .finish_non_exhaustive()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.inner.next()?;
        let span = self.inner.span();
        self.seek(span.start);
        let location = self.location;

        if let Ok(kind) = result {
            let text = String::from_utf8_lossy(self.inner.slice()).into_owned();
            self.seek(span.end);
            Some(Ok(Token { kind,
                            location,
                            text }))
        } else {
            self.failed = true;
            Some(Err(unhandled_input(&self.source[span.start..], location)))
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Converts raw bytes into a flat sequence of located tokens.
///
/// Lexing stops at the first byte sequence that is neither whitespace, a
/// number, nor one of `+ - * / ( )`. In that case the returned
/// [`TokenizeError`] carries both the cause and every token produced before
/// it.
///
/// # Errors
/// - [`LexError::UnhandledByte`] if the offending input is not valid UTF-8.
/// - [`LexError::UnhandledRune`] for any other unrecognized character.
///
/// # Example
/// ```
/// use reckon::{
///     Location,
///     error::LexError,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize(b"(1 + 2)").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].kind, TokenKind::LeftParen);
///
/// let failure = tokenize("7 % 2".as_bytes()).unwrap_err();
/// assert_eq!(failure.tokens.len(), 1);
/// assert_eq!(failure.error,
///            LexError::UnhandledRune { rune:     '%',
///                                      location: Location::new(0, 2), });
/// ```
pub fn tokenize(input: &[u8]) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();

    for result in Lexer::new(input) {
        match result {
            Ok(token) => {
                trace!("lexed {token}");
                tokens.push(token);
            },
            Err(error) => {
                debug!("lexing stopped after {} tokens: {error}", tokens.len());
                return Err(TokenizeError { tokens, error });
            },
        }
    }

    debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    Ok(tokens)
}

/// Builds the error for input no token rule matched.
///
/// The first character of `rest` is decoded; if that fails the leading byte
/// itself is reported.
fn unhandled_input(rest: &[u8], location: Location) -> LexError {
    match decode_char(rest) {
        Ok(rune) => LexError::UnhandledRune { rune, location },
        Err(byte) => LexError::UnhandledByte { byte, location },
    }
}

/// Decodes the first UTF-8 character of `bytes`, or returns the leading
/// byte if it does not start a valid sequence.
fn decode_char(bytes: &[u8]) -> Result<char, u8> {
    let head = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(error) => std::str::from_utf8(&head[..error.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars()
         .next()
         .ok_or_else(|| bytes.first().copied().unwrap_or_default())
}
