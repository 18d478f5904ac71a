//! # rdcalc
//!
//! rdcalc parses arithmetic expressions over integer literals, `+ - * /`,
//! parentheses and unary signs into an abstract syntax tree, then runs
//! several independent strategies over that tree: recursive evaluation,
//! explicit-stack evaluation and postfix rendering.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use log::debug;

use crate::interpreter::evaluator::{
    postfix::PostfixPrinter, stack::StackEvaluator, tree::TreeEvaluator,
};
pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::parser::{
        core::{parse, parse_with},
        options::{Associativity, ParseOptions},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator types. The AST is
/// built by the parser and read by the evaluators.
///
/// # Responsibilities
/// - Defines the closed set of node kinds: constant, binary, unary.
/// - Gives every subtree a single owner.
/// - Renders trees as parenthesised infix for inspection.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or running a stack-based strategy. Each parse error carries the byte
/// position where it was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the pipeline from source text to results.
///
/// This module ties together lexing, parsing and the evaluation strategies.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluators.
/// - Provides entry points for parsing and evaluating expressions.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Check that literals were converted to `f64` exactly.
/// - Compare results across strategies with a tolerance.
pub mod util;

/// The output of every strategy for one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Result of the recursive tree evaluator.
    pub tree:    f64,
    /// Space-separated postfix rendering.
    pub postfix: String,
    /// Result of the stack evaluator.
    pub stack:   f64,
}

/// Three lines: tree result, postfix sequence, stack result.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tree)?;
        writeln!(f, "{}", self.postfix)?;
        write!(f, "{}", self.stack)
    }
}

/// Parses `source` once and runs every strategy over the resulting tree.
///
/// # Errors
/// Returns an error if parsing fails or the stack evaluator does not finish
/// with exactly one value.
///
/// # Examples
/// ```
/// use rdcalc::{ParseOptions, get_result};
///
/// let report = get_result("(2+3)*4", &ParseOptions::default()).unwrap();
/// assert_eq!(report.tree, 20.0);
/// assert_eq!(report.postfix, "2 3 + 4 *");
/// assert_eq!(report.stack, 20.0);
///
/// // Unterminated parenthesis.
/// assert!(get_result("(2+3", &ParseOptions::default()).is_err());
/// ```
pub fn get_result(source: &str, options: &ParseOptions) -> Result<Report, Box<dyn std::error::Error>> {
    let expr = parse_with(source, options)?;

    let report = Report { tree:    TreeEvaluator::evaluate(&expr),
                          postfix: PostfixPrinter::render(&expr),
                          stack:   StackEvaluator::evaluate(&expr)?, };

    debug!("{source:?} => tree {}, stack {}", report.tree, report.stack);
    Ok(report)
}

/// Parses `source` with default options and evaluates it recursively.
///
/// # Errors
/// Returns a [`ParseError`] for malformed input. Arithmetic never fails.
///
/// # Examples
/// ```
/// use rdcalc::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("8/4/2").unwrap(), 4.0);
/// assert!(evaluate("1/0").unwrap().is_infinite());
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    parse(source).map(|expr| TreeEvaluator::evaluate(&expr))
}
