use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_term},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested parenthesized groups.
///
/// Parenthesis recursion is the only unbounded recursion in the pipeline, so
/// bounding it bounds the call stack for both parsing and evaluation. Input
/// nested deeper than this fails with [`ParseError::GroupingTooDeep`].
pub const MAX_GROUPING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, terms, and recursively descends
/// through the precedence hierarchy. The function parses the longest
/// expression it can and stops at the first token that cannot continue it;
/// the caller decides whether leftover tokens are an error.
///
/// Grammar: `expression := term`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Number of unclosed parentheses around the current position.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_term(tokens, depth)
}
