/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the two constructs the grammar produces: integer literals and
/// binary operations. Each variant records the source column of the construct
/// so that evaluation errors can point back into the input line. Children are
/// exclusively owned, so the tree can never share nodes or form cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal value.
    Literal {
        /// The constant value.
        value:  i64,
        /// Column of the literal's first digit in the input.
        column: usize,
    },
    /// A binary operation (addition, subtraction, multiplication or division).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator symbol in the input.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use intcalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:  7,
    ///                            column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. } | Self::BinaryOp { column, .. } => *column,
        }
    }
}

/// Represents a binary operator.
///
/// The grammar has exactly two precedence tiers: `Add`/`Sub` at the term
/// level and `Mul`/`Div` at the factor level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
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
