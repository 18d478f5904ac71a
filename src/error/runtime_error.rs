use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Arithmetic itself never fails: division by zero yields infinity or NaN.
/// These errors only arise from stack bookkeeping and from reading postfix
/// text back in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The evaluation stack did not hold exactly one value at the end.
    #[error("Evaluation finished with {depth} values on the stack, expected exactly one.")]
    StackImbalance {
        /// Number of values left on the stack.
        depth: usize,
    },
    /// An operator found fewer operands on the stack than it needs.
    #[error("Operator '{operator}' needs {needed} operand(s) but the stack holds {available}.")]
    StackUnderflow {
        /// The operator being applied.
        operator:  String,
        /// Operands the operator consumes.
        needed:    usize,
        /// Operands that were available.
        available: usize,
    },
    /// A postfix sequence contained a token that is neither a number nor an
    /// operator.
    #[error("Unknown postfix token '{token}' at index {index}.")]
    UnknownRpnToken {
        /// The unrecognized token.
        token: String,
        /// Index of the token within the sequence.
        index: usize,
    },
}
