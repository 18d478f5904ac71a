use std::fmt;

/// Operators that combine two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// The same symbol is used in infix and postfix rendering.
    ///
    /// # Example
    /// ```
    /// use rdcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.symbol(), "/");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

impl UnaryOperator {
    /// Returns the prefix symbol as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Returns the symbol used for this operator in postfix output.
    ///
    /// Unary operators get their own words so that a postfix sequence can be
    /// read back without guessing the arity of `-`.
    #[must_use]
    pub const fn postfix_symbol(self) -> &'static str {
        match self {
            Self::Plus => "pos",
            Self::Minus => "neg",
        }
    }
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// The variant set is closed. Each child is owned exclusively by its parent
/// through a `Box`, so the tree is acyclic and has no shared subtrees. Once
/// built by the parser it is only ever read.
///
/// Behaviour over the tree lives in visitors (see
/// [`crate::interpreter::evaluator::core::Visitor`]), never in the nodes
/// themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant {
        /// The literal's value. Always integer-valued when produced by the
        /// parser.
        value: f64,
    },
    /// A binary operation such as `a - b`.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A sign applied to a single operand, such as `-a`.
    Unary {
        /// The sign operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Builds a constant leaf.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Builds a binary node that takes ownership of both operands.
    ///
    /// # Example
    /// ```
    /// use rdcalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::constant(2.0), Expr::constant(3.0));
    /// assert_eq!(sum.to_string(), "(2 + 3)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a unary node that takes ownership of its operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }
}

/// Renders the tree as fully parenthesised infix, which makes the grouping
/// chosen by the parser visible: `1-2-3` displays as `(1 - (2 - 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Binary { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
            Self::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
        }
    }
}
