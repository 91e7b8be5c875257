use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The raw digit run is kept as
    /// text; the parser converts it when building the literal node.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(digits) => write!(f, "{digits}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Tokenizes one input line into `(Token, column)` pairs.
///
/// The scan is a single left-to-right pass. Whitespace is skipped and never
/// produces a token; every other recognized lexeme is paired with the 1-based
/// column of its first character. The tokenizer performs no grouping or
/// precedence validation.
///
/// # Parameters
/// - `source`: The input line to tokenize.
///
/// # Returns
/// The token sequence in input order, or a [`LexError`] describing the first
/// character that belongs to no token.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Integer("1".to_string()), 1),
///                 (Token::Plus, 3),
///                 (Token::Integer("2".to_string()), 5),]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            let ch = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { ch, column });
        }
    }

    Ok(tokens)
}
