/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: illegal characters, unexpected tokens, unbalanced parentheses,
/// trailing input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised by the stack-based evaluators. Plain
/// arithmetic never fails, so these only describe stack misuse and malformed
/// postfix input.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
