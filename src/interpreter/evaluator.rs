/// Core evaluation scaffolding.
///
/// Declares the [`core::Visitor`] trait and [`crate::ast::Expr::accept`], the
/// single place that matches on node variants, plus the shared arithmetic
/// used by every numeric strategy.
pub mod core;

/// Recursive tree evaluation.
///
/// Computes the value of each node from the values of its children.
pub mod tree;

/// Explicit-stack evaluation.
///
/// Walks the tree in post-order and keeps intermediate results on an operand
/// stack instead of the call stack.
pub mod stack;

/// Postfix rendering.
///
/// Emits the reverse-Polish encoding of a tree.
pub mod postfix;

/// Node counting.
pub mod counter;

/// Postfix text evaluation.
///
/// Reads reverse-Polish text back and evaluates it, independent of any tree.
pub mod rpn;
