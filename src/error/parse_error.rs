use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the byte offset in the source where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a character outside the expression alphabet.
    #[error("Error at position {position}: Illegal character '{character}'.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found a token that cannot start a factor.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset where the parenthesis was expected.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset where the limit was hit.
        position: usize,
    },
    /// A numeric literal cannot be represented exactly.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::IllegalCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }

    /// Returns `true` for errors raised by the lexer rather than the grammar.
    #[must_use]
    pub const fn is_lex_error(&self) -> bool {
        matches!(self, Self::IllegalCharacter { .. })
    }
}
