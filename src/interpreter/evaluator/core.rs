use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// A strategy that processes each kind of [`Expr`] node.
///
/// Implementors decide whether and in which order to visit children by
/// calling [`Expr::accept`] on them. The AST never names a concrete
/// strategy, so new strategies need no change to the node definitions.
pub trait Visitor {
    /// Value produced for each visited node.
    type Output;

    /// Handles a numeric leaf.
    fn visit_constant(&mut self, value: f64) -> Self::Output;

    /// Handles a binary node.
    fn visit_binary(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> Self::Output;

    /// Handles a unary node.
    fn visit_unary(&mut self, op: UnaryOperator, operand: &Expr) -> Self::Output;
}

impl Expr {
    /// Dispatches to the visitor method for this node's variant.
    ///
    /// # Example
    /// ```
    /// use rdcalc::interpreter::{evaluator::tree::TreeEvaluator, parser::core::parse};
    ///
    /// let expr = parse("2+3*4").unwrap();
    /// assert_eq!(expr.accept(&mut TreeEvaluator), 14.0);
    /// ```
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Constant { value } => visitor.visit_constant(*value),
            Self::Binary { op, left, right } => visitor.visit_binary(*op, left, right),
            Self::Unary { op, operand } => visitor.visit_unary(*op, operand),
        }
    }
}

/// Applies a binary operator with IEEE semantics.
///
/// Division by zero is not an error: it yields an infinity, or NaN for
/// `0 / 0`.
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}

/// Applies a sign operator.
#[must_use]
pub fn apply_unary(op: UnaryOperator, operand: f64) -> f64 {
    match op {
        UnaryOperator::Plus => operand,
        UnaryOperator::Minus => -operand,
    }
}
