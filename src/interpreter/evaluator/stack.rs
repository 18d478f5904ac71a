use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Visitor, apply_binary, apply_unary},
};

/// Evaluates an expression on an explicit operand stack.
///
/// The tree is walked in post-order. Leaves push their value; a binary node
/// pops its right operand (on top, since it was visited last) and then its
/// left operand and pushes the result; a unary node pops one operand and
/// pushes the result. A complete evaluation leaves exactly one value behind.
///
/// The stack is private working state, so use a fresh evaluator for each
/// expression. [`StackEvaluator::evaluate`] does that for you.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{evaluator::stack::StackEvaluator, parser::core::parse};
///
/// let expr = parse("1-2-3").unwrap();
/// let mut evaluator = StackEvaluator::new();
/// expr.accept(&mut evaluator).unwrap();
/// assert_eq!(evaluator.depth(), 1);
/// assert_eq!(evaluator.finish().unwrap(), 2.0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StackEvaluator {
    stack: Vec<f64>,
}

impl StackEvaluator {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Evaluates `expr` with a fresh evaluator and returns the single result.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if the stack discipline is violated, which
    /// cannot happen for a tree built by the parser.
    pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
        let mut evaluator = Self::new();
        expr.accept(&mut evaluator)?;
        evaluator.finish()
    }

    /// Number of values currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consumes the evaluator and returns the final value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::StackImbalance`] unless exactly one value is
    /// left on the stack.
    pub fn finish(self) -> EvalResult<f64> {
        match self.stack.as_slice() {
            [value] => Ok(*value),
            values => Err(RuntimeError::StackImbalance { depth: values.len() }),
        }
    }

    fn pop(&mut self, operator: &str, needed: usize) -> EvalResult<f64> {
        let available = self.stack.len();
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::StackUnderflow { operator: operator.to_string(),
                                                          needed,
                                                          available })
    }
}

impl Visitor for StackEvaluator {
    type Output = EvalResult<()>;

    fn visit_constant(&mut self, value: f64) -> EvalResult<()> {
        self.stack.push(value);
        Ok(())
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<()> {
        left.accept(self)?;
        right.accept(self)?;

        let right = self.pop(op.symbol(), 2)?;
        let left = self.pop(op.symbol(), 2)?;
        self.stack.push(apply_binary(op, left, right));
        Ok(())
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: &Expr) -> EvalResult<()> {
        operand.accept(self)?;

        let operand = self.pop(op.postfix_symbol(), 1)?;
        self.stack.push(apply_unary(op, operand));
        Ok(())
    }
}
