use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::core::Visitor,
};

/// Renders an expression in reverse-Polish (postfix) order.
///
/// The walk is post-order: operands first, then the operator. Leaves emit
/// their literal value, binary operators their symbol, and unary operators
/// `pos` or `neg`. No arithmetic is performed.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{evaluator::postfix::PostfixPrinter, parser::core::parse};
///
/// let expr = parse("-(2+3)*4").unwrap();
/// assert_eq!(PostfixPrinter::render(&expr), "2 3 + neg 4 *");
/// ```
#[derive(Debug, Default, Clone)]
pub struct PostfixPrinter {
    tokens: Vec<String>,
}

impl PostfixPrinter {
    /// Creates a printer with no output yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Renders `expr` as a space-separated postfix string.
    #[must_use]
    pub fn render(expr: &Expr) -> String {
        let mut printer = Self::new();
        expr.accept(&mut printer);
        printer.into_tokens().join(" ")
    }

    /// The tokens emitted so far, in order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consumes the printer and returns the emitted tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl Visitor for PostfixPrinter {
    type Output = ();

    fn visit_constant(&mut self, value: f64) {
        self.tokens.push(value.to_string());
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) {
        left.accept(self);
        right.accept(self);
        self.tokens.push(op.symbol().to_string());
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: &Expr) {
        operand.accept(self);
        self.tokens.push(op.postfix_symbol().to_string());
    }
}
