use crate::{error::EvalError, interpreter::operator::Operator};

/// A parenthesis token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl std::fmt::Display for Paren {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
                        Self::Open => "(",
                        Self::Close => ")",
                    })
    }
}

/// Represents a lexical token of an expression.
///
/// Tokens are the whitespace-delimited words of the input, each classified
/// on its own. Parentheses are the only characters that delimit themselves,
/// so `(3` is two tokens while `3+4` is a single invalid token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, such as `3`, `2.5`, `-4` or `1e3`.
    Number(f64),
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(` or `)`.
    Paren(Paren),
}

impl Token {
    /// Classifies a single whitespace-free word.
    ///
    /// The order is fixed: parentheses first, then operators, then numeric
    /// parsing. Anything left over is an [`EvalError::InvalidToken`].
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{
    ///     lexer::{Paren, Token},
    ///     operator::Operator,
    /// };
    ///
    /// assert_eq!(Token::classify("("), Ok(Token::Paren(Paren::Open)));
    /// assert_eq!(Token::classify("-"), Ok(Token::Operator(Operator::Sub)));
    /// assert_eq!(Token::classify("-2"), Ok(Token::Number(-2.0)));
    /// assert!(Token::classify("$").is_err());
    /// ```
    pub fn classify(word: &str) -> Result<Self, EvalError> {
        match word {
            "(" => return Ok(Self::Paren(Paren::Open)),
            ")" => return Ok(Self::Paren(Paren::Close)),
            _ => {},
        }

        if let Some(op) = Operator::from_symbol(word) {
            return Ok(Self::Operator(op));
        }

        word.parse::<f64>()
            .map(Self::Number)
            .map_err(|_| EvalError::InvalidToken { token: word.to_string() })
    }
}

/// Splits `source` into words and classifies each one lazily.
///
/// Words are separated by runs of whitespace, and every `(` or `)` is cut out
/// as a word of its own. Classification errors are yielded in position, so a
/// caller consuming the iterator in order sees failures in the same order as
/// the words appear.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Paren, Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("(-2 )").collect();
/// assert_eq!(tokens,
///            vec![Ok(Token::Paren(Paren::Open)),
///                 Ok(Token::Number(-2.0)),
///                 Ok(Token::Paren(Paren::Close))]);
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = Result<Token, EvalError>> + '_ {
    words(source).map(Token::classify)
}

/// Yields the words of `source`, with parentheses split off.
pub fn words(source: &str) -> impl Iterator<Item = &str> + '_ {
    source.split_whitespace().flat_map(|word| {
        word.split_inclusive(PARENS).flat_map(|piece| {
            let cut = if piece.ends_with(PARENS) { piece.len() - 1 } else { piece.len() };
            let (head, paren) = piece.split_at(cut);
            [head, paren].into_iter().filter(|part| !part.is_empty())
        })
    })
}

const PARENS: [char; 2] = ['(', ')'];
