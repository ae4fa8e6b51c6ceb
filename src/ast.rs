use crate::location::Location;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed tree: every binary node owns both of its operands and
/// nodes are never shared. The tree is built once by the parser and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Location of the literal in the source.
        location: Location,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Arithmetic negation of the operand.
    Negate {
        /// The negated expression.
        expr:     Box<Self>,
        /// Location of the `-` token.
        location: Location,
    },
}

impl Expr {
    /// Creates a number literal node.
    #[must_use]
    pub const fn number(value: i64, location: Location) -> Self {
        Self::Number { value, location }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Creates a negation node for a `-` found at `location`.
    #[must_use]
    pub fn negate(location: Location, expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr),
                       location }
    }

    /// Gets the source location of `self`.
    ///
    /// A binary operation has no location of its own and reports that of its
    /// left operand. A negation reports the location of its `-` token, not
    /// that of its operand.
    ///
    /// ## Example
    /// ```
    /// use reckon::{
    ///     Location,
    ///     ast::{BinaryOperator, Expr},
    /// };
    ///
    /// let sum = Expr::binary(Expr::number(1, Location::new(0, 0)),
    ///                        BinaryOperator::Add,
    ///                        Expr::number(2, Location::new(0, 4)));
    /// assert_eq!(sum.location(), Location::new(0, 0));
    ///
    /// let negated = Expr::negate(Location::new(2, 3), Expr::number(7, Location::new(2, 4)));
    /// assert_eq!(negated.location(), Location::new(2, 3));
    /// ```
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Number { location, .. } | Self::Negate { location, .. } => *location,
            Self::BinaryOp { left, .. } => left.location(),
        }
    }
}

/// Prints the expression fully parenthesized, which makes the parsed
/// precedence and associativity explicit.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Negate { expr, .. } => write!(f, "(-{expr})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
