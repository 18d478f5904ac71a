use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::core::Visitor,
};

/// Node totals gathered by [`NodeCounter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCount {
    /// Numeric leaves.
    pub leaves:    usize,
    /// Binary and unary operator nodes.
    pub operators: usize,
    /// Length of the longest root-to-leaf path, counting nodes.
    pub depth:     usize,
}

/// Counts the nodes of an expression tree.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{evaluator::counter::NodeCounter, parser::core::parse};
///
/// let count = NodeCounter::count(&parse("-1+2").unwrap());
/// assert_eq!((count.leaves, count.operators, count.depth), (2, 2, 3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeCounter {
    count: NodeCount,
}

impl NodeCounter {
    /// Counts the nodes in `expr`.
    #[must_use]
    pub fn count(expr: &Expr) -> NodeCount {
        let mut counter = Self::default();
        counter.count.depth = expr.accept(&mut counter);
        counter.count
    }
}

/// Each visit returns the depth of the visited subtree.
impl Visitor for NodeCounter {
    type Output = usize;

    fn visit_constant(&mut self, _value: f64) -> usize {
        self.count.leaves += 1;
        1
    }

    fn visit_binary(&mut self, _op: BinaryOperator, left: &Expr, right: &Expr) -> usize {
        self.count.operators += 1;
        let left = left.accept(self);
        let right = right.accept(self);
        1 + left.max(right)
    }

    fn visit_unary(&mut self, _op: UnaryOperator, operand: &Expr) -> usize {
        self.count.operators += 1;
        1 + operand.accept(self)
    }
}
