use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
/// Each new operator attaches to the accumulated left-hand result, so
/// `a - b - c` parses as `(a - b) - c`. The first token that is neither `+`
/// nor `-` is left unconsumed for the caller.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let column = *column;
            tokens.next();
            let right = parse_factor(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`, one precedence
/// level tighter than [`parse_term`]. `a / b / c` parses as `(a / b) / c`.
///
/// The rule is: `factor := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// A binary expression tree combining primary-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let column = *column;
            tokens.next();
            let right = parse_primary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// binary operators (`+`, `-`, `*`, `/`). Returns `None` for all other
/// tokens, which is how the fold loops recognize the end of their level.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
