use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::{ParseResult, Parser}, options::Associativity},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// The rule is: `expr := term (("+" | "-") expr)*`
    ///
    /// With [`Associativity::Right`] the right operand is a whole `expr`, so
    /// `1 - 2 - 3` becomes `1 - (2 - 3)`. With [`Associativity::Left`] the
    /// chain is folded from the left over `term`s instead.
    ///
    /// # Returns
    /// An `Expr::Binary` tree, or the single term if no operator follows.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| {
                let left = parser.parse_term()?;
                parser.parse_chain(left,
                                   is_additive,
                                   Self::parse_term,
                                   Self::parse_expression)
            })
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `term := factor (("*" | "/") term)*`
    ///
    /// Grouping follows the same associativity setting as
    /// [`Parser::parse_expression`]: `8 / 4 / 2` is `8 / (4 / 2)` by default.
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| {
                let left = parser.parse_factor()?;
                parser.parse_chain(left, is_multiplicative, Self::parse_factor, Self::parse_term)
            })
    }

    /// Consumes operators accepted by `accepts` that follow `left`.
    ///
    /// `operand` parses the next tighter level and is used when folding
    /// left; `same_level` re-enters the current production and is used for
    /// right grouping.
    ///
    /// A left fold does not recurse, but every operator it folds still adds
    /// a level to the tree, so each one counts against the depth limit until
    /// the chain ends.
    fn parse_chain(&mut self,
                   left: Expr,
                   accepts: fn(BinaryOperator) -> bool,
                   operand: fn(&mut Self) -> ParseResult<Expr>,
                   same_level: fn(&mut Self) -> ParseResult<Expr>)
                   -> ParseResult<Expr> {
        let mut folds = 0;
        let result = self.fold_chain(left, accepts, operand, same_level, &mut folds);
        self.leave(folds);
        result
    }

    fn fold_chain(&mut self,
                  mut left: Expr,
                  accepts: fn(BinaryOperator) -> bool,
                  operand: fn(&mut Self) -> ParseResult<Expr>,
                  same_level: fn(&mut Self) -> ParseResult<Expr>,
                  folds: &mut usize)
                  -> ParseResult<Expr> {
        while let Some(op) = token_to_binary_operator(&self.current)
              && accepts(op)
        {
            self.advance()?;
            let right = match self.options.associativity {
                Associativity::Right => same_level(self)?,
                Associativity::Left => {
                    self.enter()?;
                    *folds += 1;
                    operand(self)?
                },
            };
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }
}

const fn is_additive(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
}

const fn is_multiplicative(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use rdcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Open), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}
