/// How chains of operators at the same precedence level are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `1 - 2 - 3` groups as `1 - (2 - 3)`.
    ///
    /// This is the grouping the classic form of this grammar produces,
    /// because each production recurses into itself on the right.
    #[default]
    Right,
    /// `1 - 2 - 3` groups as `(1 - 2) - 3`, the conventional reading.
    ///
    /// Selecting this changes results for chained `-` and `/`.
    Left,
}

/// Tunables for [`Parser`](crate::interpreter::parser::core::Parser).
///
/// # Example
/// ```
/// use rdcalc::interpreter::parser::options::{Associativity, ParseOptions};
///
/// let options = ParseOptions { associativity: Associativity::Left,
///                              ..ParseOptions::default() };
/// assert!(!options.allow_trailing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Grouping of `+ -` and `* /` chains.
    pub associativity:  Associativity,
    /// Accept and ignore tokens left over after a complete expression.
    pub allow_trailing: bool,
    /// Maximum recursion depth of the parser.
    pub max_depth:      usize,
}

/// Default recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 512;

impl Default for ParseOptions {
    fn default() -> Self {
        Self { associativity:  Associativity::default(),
               allow_trailing: false,
               max_depth:      DEFAULT_MAX_DEPTH, }
    }
}
