use log::{debug, trace};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::{Lexer, Token}, parser::options::ParseOptions},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a single expression string.
///
/// The parser owns its [`Lexer`] and holds exactly one token of lookahead in
/// `current`. Tokens are pulled lazily as the grammar consumes them.
///
/// The productions live in sibling modules:
/// - `binary`: `expr` and `term`,
/// - `unary`: `factor`.
pub struct Parser<'a> {
    lexer:              Lexer<'a>,
    pub(crate) current: Token,
    pub(crate) options: ParseOptions,
    depth:              usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `source`. No input is consumed until
    /// [`Parser::parse`] is called.
    #[must_use]
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self { lexer: Lexer::new(source),
               current: Token::End,
               options,
               depth: 0 }
    }

    /// Parses the whole input into an expression tree.
    ///
    /// Unless [`ParseOptions::allow_trailing`] is set, any token after a
    /// complete expression is an error.
    ///
    /// # Errors
    /// Returns the first lexical or syntactic error encountered.
    pub fn parse(mut self) -> ParseResult<Expr> {
        self.advance()?;
        let expr = self.parse_expression()?;

        if !self.options.allow_trailing && self.current != Token::End {
            return Err(ParseError::UnexpectedTrailingTokens { token:    self.current.to_string(),
                                                              position: self.position(), });
        }

        debug!("parsed expression {expr}");
        Ok(expr)
    }

    /// Moves to the next token.
    ///
    /// Illegal characters are reported here, as soon as they are read, so
    /// the grammar functions never see [`Token::Illegal`].
    pub(crate) fn advance(&mut self) -> ParseResult<()> {
        let token = self.lexer.next_token();
        trace!("token {token} at {}", self.lexer.position());

        if token == Token::Illegal {
            let character = self.lexer
                                .slice()
                                .chars()
                                .next()
                                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::IllegalCharacter { character,
                                                      position: self.lexer.position() });
        }

        self.current = token;
        Ok(())
    }

    /// Byte offset of the current token.
    pub(crate) fn position(&self) -> usize {
        self.lexer.position()
    }

    /// Source text of the current token.
    pub(crate) fn slice(&self) -> &'a str {
        self.lexer.slice()
    }

    /// Runs `production` one level deeper, failing once the configured
    /// maximum depth would be exceeded.
    pub(crate) fn nested<T>(&mut self,
                            production: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        self.enter()?;
        let result = production(self);
        self.leave(1);
        result
    }

    /// Claims one more level of depth.
    pub(crate) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.options.max_depth,
                                                    position: self.position(), });
        }
        self.depth += 1;
        Ok(())
    }

    /// Releases `levels` previously claimed with [`Parser::enter`].
    pub(crate) fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }
}

/// Parses `source` with the default [`ParseOptions`].
///
/// # Errors
/// Returns a [`ParseError`] for illegal characters and malformed input.
///
/// # Example
/// ```
/// use rdcalc::{ast::Expr, interpreter::parser::core::parse};
///
/// let expr = parse("1-2-3").unwrap();
/// assert_eq!(expr.to_string(), "(1 - (2 - 3))");
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with(source, &ParseOptions::default())
}

/// Parses `source` with explicit options.
///
/// # Errors
/// Returns a [`ParseError`] for illegal characters and malformed input.
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseResult<Expr> {
    Parser::new(source, options.clone()).parse()
}
