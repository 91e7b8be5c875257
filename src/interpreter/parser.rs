/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers of the grammar, terms
/// (`+`, `-`) and factors (`*`, `/`), as peek-then-consume fold loops.
pub mod binary;

/// Core parsing logic.
///
/// Contains the expression entry point, the parse result alias, and the
/// parenthesis nesting limit.
pub mod core;

/// Primary expression parsing.
///
/// Parses the atoms of the grammar: integer literals and parenthesized
/// sub-expressions.
pub mod primary;
