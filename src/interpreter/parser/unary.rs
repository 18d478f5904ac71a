use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    util::num::is_exact_integer,
};

impl Parser<'_> {
    /// Parses a factor: a number, a parenthesised expression, or a signed
    /// factor.
    ///
    /// Grammar:
    /// ```text
    ///     factor := number
    ///             | "(" expr ")"
    ///             | ("+" | "-") factor
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input stops where an operand belongs.
    /// - `UnexpectedToken` for any other token that cannot start a factor.
    /// - `ExpectedClosingParen` if a `(` is not matched.
    /// - `LiteralTooLarge` if a number cannot be held exactly.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| match parser.current {
                Token::Number(value) => parser.parse_number(value),
                Token::Open => parser.parse_parenthesised(),
                Token::Plus => parser.parse_signed(UnaryOperator::Plus),
                Token::Minus => parser.parse_signed(UnaryOperator::Minus),
                Token::End => {
                    Err(ParseError::UnexpectedEndOfInput { position: parser.position() })
                },
                token => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                           position: parser.position(), }),
            })
    }

    fn parse_number(&mut self, value: f64) -> ParseResult<Expr> {
        if !is_exact_integer(value) {
            return Err(ParseError::LiteralTooLarge { literal:  self.slice().to_string(),
                                                     position: self.position(), });
        }
        self.advance()?;
        Ok(Expr::constant(value))
    }

    fn parse_parenthesised(&mut self) -> ParseResult<Expr> {
        self.advance()?;
        let inner = self.parse_expression()?;

        if self.current != Token::Close {
            return Err(ParseError::ExpectedClosingParen { position: self.position() });
        }
        self.advance()?;
        Ok(inner)
    }

    fn parse_signed(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        self.advance()?;
        let operand = self.parse_factor()?;
        Ok(Expr::unary(op, operand))
    }
}
