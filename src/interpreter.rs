/// The evaluator module runs strategies over the AST.
///
/// Every strategy is a visitor over the same three node kinds. None of them
/// modify the tree, and each owns whatever working state it needs.
///
/// # Responsibilities
/// - Defines the visitor trait and the variant dispatch.
/// - Provides tree, stack and postfix strategies plus a node counter.
/// - Evaluates postfix text produced by the postfix strategy.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw expression and hands out one token at a time:
/// operators, parentheses and digit runs. It is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Skips spaces and tabs.
/// - Produces number tokens from digit runs.
/// - Signals end of input repeatedly and flags illegal characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser pulls tokens from the lexer with one token of
/// lookahead and builds the tree bottom-up.
///
/// # Responsibilities
/// - Implements the `expr`, `term` and `factor` productions.
/// - Reports syntax errors with their source position.
/// - Guards against excessive nesting.
pub mod parser;
