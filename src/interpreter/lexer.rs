use std::{fmt, ops::Range};

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// `End` and `Illegal` are never matched by a pattern; the [`Lexer`] cursor
/// produces them for end of input and for unrecognized characters.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
    /// A run of decimal digits such as `42`, carried as a float.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// End of input.
    End,
    /// A character outside the expression alphabet.
    Illegal,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Mul => f.write_str("'*'"),
            Self::Div => f.write_str("'/'"),
            Self::Open => f.write_str("'('"),
            Self::Close => f.write_str("')'"),
            Self::Number(value) => write!(f, "number {value}"),
            Self::End => f.write_str("end of input"),
            Self::Illegal => f.write_str("illegal character"),
        }
    }
}

/// Parses a digit run from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The value of the digits. Very long runs round to the
///   nearest float; the parser decides whether that is acceptable.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A stateful cursor over an expression string.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. The cursor is
/// owned by whoever drives it, normally a single
/// [`Parser`](crate::interpreter::parser::core::Parser).
pub struct Lexer<'a> {
    inner:    logos::Lexer<'a, Token>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner:    Token::lexer(source),
               finished: false, }
    }

    /// Returns the next token.
    ///
    /// Spaces and tabs are skipped. Once the input is exhausted every call
    /// returns [`Token::End`]. An unrecognized character yields
    /// [`Token::Illegal`]; its text is then available through
    /// [`Lexer::slice`].
    ///
    /// # Example
    /// ```
    /// use rdcalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 +");
    /// assert_eq!(lexer.next_token(), Token::Number(12.0));
    /// assert_eq!(lexer.next_token(), Token::Plus);
    /// assert_eq!(lexer.next_token(), Token::End);
    /// assert_eq!(lexer.next_token(), Token::End);
    /// ```
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::End;
        }
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal,
            None => {
                self.finished = true;
                Token::End
            },
        }
    }

    /// Source text of the most recent token.
    ///
    /// Empty once the end of input has been reached.
    #[must_use]
    pub fn slice(&self) -> &'a str {
        if self.finished { "" } else { self.inner.slice() }
    }

    /// Byte range of the most recent token.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        if self.finished {
            let end = self.inner.source().len();
            end..end
        } else {
            self.inner.span()
        }
    }

    /// Byte offset where the most recent token starts.
    #[must_use]
    pub fn position(&self) -> usize {
        self.span().start
    }
}
