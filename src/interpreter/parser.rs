/// Parser state and entry points.
///
/// Holds the [`core::Parser`] type, which owns the lexer and the current
/// lookahead token, together with the `parse` and `parse_with` functions.
pub mod core;

/// Binary operator productions.
///
/// Parses the `expr` (`+ -`) and `term` (`* /`) levels and maps tokens to
/// operators.
pub mod binary;

/// Factor production.
///
/// Parses numbers, parenthesised sub-expressions and sign prefixes.
pub mod unary;

/// Parser configuration.
pub mod options;
