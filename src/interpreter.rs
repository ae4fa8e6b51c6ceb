/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST produced by the parser and reduces it to a
/// single signed 64-bit integer.
///
/// # Responsibilities
/// - Evaluates number literals, negations and the four binary operators.
/// - Applies fixed-width wrapping arithmetic and truncating division.
/// - Reports division by zero as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source bytes and produces a flat sequence of tokens,
/// each tagged with its kind, its text and the line and column it starts
/// at. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Recognizes number literals and the operators `+ - * / ( )`.
/// - Skips whitespace while keeping locations accurate.
/// - Reports the first unrecognized byte or character and stops.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one method per grammar
/// rule. Alternatives are tried in order against the same input, and when
/// all of them fail their errors are combined rather than discarded.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes with the usual precedence and left
///   associativity.
/// - Requires the entire token sequence to be consumed.
/// - Bounds nesting depth according to the parser configuration.
pub mod parser;
