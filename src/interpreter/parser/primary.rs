use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_GROUPING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - parenthesized expressions
///
/// Exactly one token is consumed to decide the form. There is deliberately no
/// unary-minus production, so a `-` in primary position is an
/// `UnexpectedToken` error rather than a negation.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(digits), column)) => parse_literal(digits, *column),
        Some((Token::LParen, column)) => parse_grouping(tokens, *column, depth),
        Some((token, column)) => {
            Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                              column: *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses an integer literal from its raw digit run.
///
/// The digit run is converted to `i64` here, at the boundary between the
/// token text and the tree. A run whose value does not fit produces
/// `ParseError::LiteralTooLarge`.
///
/// # Parameters
/// - `digits`: The literal's digit run, as scanned.
/// - `column`: Column of the first digit.
///
/// # Returns
/// An [`Expr::Literal`] holding the converted value.
fn parse_literal(digits: &str, column: usize) -> ParseResult<Expr> {
    let value = digits.parse()
                      .map_err(|_| ParseError::LiteralTooLarge { column })?;
    Ok(Expr::Literal { value, column })
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The opening parenthesis has already been consumed. The function parses the
/// enclosed expression and then requires a closing `)`. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen` carrying the
/// opening parenthesis' column. Nesting deeper than [`MAX_GROUPING_DEPTH`]
/// yields `ParseError::GroupingTooDeep`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `column`: Column of the consumed `(`.
/// - `depth`: Parenthesis nesting depth outside this group.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, column: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth >= MAX_GROUPING_DEPTH {
        return Err(ParseError::GroupingTooDeep { column });
    }

    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column }),
    }
}
