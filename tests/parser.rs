use reckon::{
    Config, Location,
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{parse, parse_with_config},
    },
};

fn parse_source(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input.as_bytes()).unwrap_or_else(|e| panic!("{input:?}: {e}"));
    parse(&tokens)
}

const fn loc(column: usize) -> Location {
    Location::new(0, column)
}

const fn num(value: i64, column: usize) -> Expr {
    Expr::number(value, loc(column))
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::binary(left, op, right)
}

fn expected(kind: TokenKind) -> ParseError {
    ParseError::ExpectedToken { kind }
}

fn unhandled(kind: TokenKind, column: usize, text: &str) -> ParseError {
    ParseError::UnhandledToken { token: Token::new(kind, loc(column), text) }
}

/// The causes of a failed atom, before the final one.
fn atom_causes() -> Vec<ParseError> {
    vec![expected(TokenKind::LeftParen),
         expected(TokenKind::Minus),
         expected(TokenKind::Number),]
}

fn joined(mut causes: Vec<ParseError>, last: ParseError) -> ParseError {
    causes.push(last);
    ParseError::Joined { causes }
}

#[test]
fn parses_expressions() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let cases = [("1", num(1, 0)),
                 ("1 + 2", bin(num(1, 0), Add, num(2, 4))),
                 ("1 - 2", bin(num(1, 0), Sub, num(2, 4))),
                 ("1 * 2", bin(num(1, 0), Mul, num(2, 4))),
                 ("1 / 2", bin(num(1, 0), Div, num(2, 4))),
                 ("(1)", num(1, 1)),
                 ("-1", Expr::negate(loc(0), num(1, 1))),
                 ("(1 + 2) * 3 / 4 + -7",
                  bin(bin(bin(bin(num(1, 1), Add, num(2, 5)), Mul, num(3, 10)), Div, num(4, 14)),
                      Add,
                      Expr::negate(loc(18), num(7, 19)))),];

    for (input, expected) in cases {
        assert_eq!(parse_source(input), Ok(expected), "input = {input}");
    }
}

#[test]
fn same_precedence_operators_group_left() {
    use BinaryOperator::{Div, Mul, Sub};

    assert_eq!(parse_source("1 - 2 - 3"),
               Ok(bin(bin(num(1, 0), Sub, num(2, 4)), Sub, num(3, 8))));
    assert_eq!(parse_source("8/4*2"),
               Ok(bin(bin(num(8, 0), Div, num(4, 2)), Mul, num(2, 4))));
}

#[test]
fn negation_binds_the_whole_following_expression() {
    let expr = parse_source("-1 + 2").expect("valid expression");

    assert_eq!(expr,
               Expr::negate(loc(0), bin(num(1, 1), BinaryOperator::Add, num(2, 5))));
    assert_eq!(expr.to_string(), "(-(1 + 2))");
    assert_eq!(parse_source("2 * -3 + 1").unwrap().to_string(), "(2 * (-(3 + 1)))");
}

#[test]
fn node_locations() {
    let expr = parse_source("\n  (4 * 5) - -6").expect("valid expression");

    // The subtraction sits at its left operand, which sits at the literal 4.
    assert_eq!(expr.location(), Location::new(1, 3));
    let Expr::BinaryOp { right, .. } = expr else {
        panic!("expected a binary operation");
    };
    assert_eq!(right.location(), Location::new(1, 12));
}

#[test]
fn missing_operand_at_end_of_input() {
    assert_eq!(parse_source("1 /"),
               Err(joined(atom_causes(), ParseError::UnexpectedEndOfInput)));
}

#[test]
fn missing_operand_before_another_token() {
    assert_eq!(parse_source("1 / / 5"),
               Err(joined(atom_causes(), unhandled(TokenKind::Slash, 4, "/"))));
}

#[test]
fn empty_input() {
    assert_eq!(parse(&[]), Err(joined(atom_causes(), ParseError::UnexpectedEndOfInput)));
}

#[test]
fn unclosed_parenthesis() {
    let causes = vec![expected(TokenKind::RightParen),
                      expected(TokenKind::Minus),
                      expected(TokenKind::Number),];

    assert_eq!(parse_source("(1"),
               Err(joined(causes, unhandled(TokenKind::LeftParen, 0, "("))));
}

#[test]
fn nested_alternatives_keep_their_own_causes() {
    let inner = joined(atom_causes(), unhandled(TokenKind::RightParen, 4, ")"));
    let causes = vec![inner, expected(TokenKind::Minus), expected(TokenKind::Number)];

    assert_eq!(parse_source("(1 +)"),
               Err(joined(causes, unhandled(TokenKind::LeftParen, 0, "("))));
}

#[test]
fn leftover_tokens_are_unhandled() {
    assert_eq!(parse_source("1 2"), Err(unhandled(TokenKind::Number, 2, "2")));
    assert_eq!(parse_source("(3))"), Err(unhandled(TokenKind::RightParen, 3, ")")));
}

#[test]
fn oversized_literal_is_reported_among_the_alternatives() {
    let literal = Token::new(TokenKind::Number, loc(0), "9223372036854775808");
    let causes = vec![expected(TokenKind::LeftParen),
                      expected(TokenKind::Minus),
                      ParseError::InvalidNumber { token: literal.clone() },];

    assert_eq!(parse_source("9223372036854775808"),
               Err(joined(causes, ParseError::UnhandledToken { token: literal })));
    assert_eq!(parse_source("9223372036854775807"), Ok(num(i64::MAX, 0)));
}

#[test]
fn joined_error_display_lists_each_cause() {
    let error = parse_source("1 /").unwrap_err();

    assert_eq!(error.to_string(),
               "Expected token LEFT_PAREN.\nExpected token MINUS.\nExpected token \
                NUMBER.\nUnexpected end of input.");
    assert_eq!(error.location(), None);
}

#[test]
fn nesting_limit_is_enforced() {
    let config = Config::default().with_max_nesting_depth(2);
    let parse_limited = |input: &str| parse_with_config(&tokenize(input.as_bytes()).unwrap(), &config);

    assert_eq!(parse_limited("((1))"), Ok(num(1, 2)));
    assert_eq!(parse_limited("(((1)))"),
               Err(ParseError::NestingTooDeep { location: loc(2),
                                                limit:    2, }));
    assert_eq!(parse_limited("--1"),
               Ok(Expr::negate(loc(0), Expr::negate(loc(1), num(1, 2)))));
    assert_eq!(parse_limited("(--1)"),
               Err(ParseError::NestingTooDeep { location: loc(2),
                                                limit:    2, }));
}

#[test]
fn default_nesting_limit() {
    let within = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(parse_source(&within), Ok(num(1, 200)));

    let beyond = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(parse_source(&beyond),
               Err(ParseError::NestingTooDeep { location: loc(256),
                                                limit:    256, }));
}

#[test]
fn parsing_is_deterministic() {
    let tokens = tokenize(b"(1 + 2) * -3").unwrap();

    assert_eq!(parse(&tokens), parse(&tokens));
}
