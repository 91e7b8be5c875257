/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the expression tree produced by the parser and
/// reduces it to a single integer. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all four arithmetic operations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful language element: an integer
/// literal, an operator, or a parenthesis. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Skips whitespace without producing tokens.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an expression tree reflecting operator precedence and
/// left-associativity. This is the middle stage of the pipeline.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with column info.
/// - Enforces the parenthesis nesting limit.
pub mod parser;
