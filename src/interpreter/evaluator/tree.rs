use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::core::{Visitor, apply_binary, apply_unary},
};

/// Evaluates an expression by structural recursion.
///
/// Each node returns its value directly; the call stack holds all
/// intermediate results. The evaluator is stateless.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{evaluator::tree::TreeEvaluator, parser::core::parse};
///
/// let expr = parse("(2+3)*4").unwrap();
/// assert_eq!(TreeEvaluator::evaluate(&expr), 20.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeEvaluator;

impl TreeEvaluator {
    /// Evaluates `expr` to a single number.
    #[must_use]
    pub fn evaluate(expr: &Expr) -> f64 {
        expr.accept(&mut Self)
    }
}

impl Visitor for TreeEvaluator {
    type Output = f64;

    fn visit_constant(&mut self, value: f64) -> f64 {
        value
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> f64 {
        let left = left.accept(self);
        let right = right.accept(self);
        apply_binary(op, left, right)
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: &Expr) -> f64 {
        apply_unary(op, operand.accept(self))
    }
}
