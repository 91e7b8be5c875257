//! # intcalc
//!
//! intcalc is an integer arithmetic expression calculator written in Rust.
//! It tokenizes, parses, and evaluates expressions built from the four binary
//! operators and parenthesized grouping, reducing one line of text to one
//! integer result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression and operator types of the language.
/// - Attaches source columns to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// the source column of each failure for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source columns and detailed messages for context.
/// - Wraps the stage errors in one `Error` type for callers.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from one line of text to one integer. Each stage
/// consumes the prior stage's complete output.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates one arithmetic expression to its integer result.
///
/// This is the single entry point of the pipeline. The input line is
/// tokenized, parsed into an expression tree, and reduced to one integer. The
/// first error from any stage aborts the remaining stages; nothing persists
/// across calls. Tokens left over after a complete expression are reported as
/// trailing-token errors, so the whole line must be one expression.
///
/// # Errors
/// Returns an [`Error`] wrapping the failing stage's error kind: a lexical
/// error for characters outside the language, a parse error for malformed
/// expressions, or a runtime error for division by zero.
///
/// # Examples
/// ```
/// use intcalc::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9);
///
/// // Division by zero is reported, not performed.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, column)) = iter.next() {
        return Err(Error::Parse(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                                       column: *column, }));
    }

    Ok(eval(&expr)?)
}
