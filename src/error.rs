/// Lexing errors.
///
/// Defines the error raised while tokenizing an input line, namely
/// encountering a character that belongs to no token of the language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token sequence.
/// Parse errors include unexpected tokens, unterminated groupings, oversized
/// literals, and input that ends or continues where it should not.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating an expression
/// tree, such as division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// A failure from any stage of the evaluation pipeline.
///
/// Wraps the stage-specific errors so callers can handle the pipeline as one
/// fallible operation while still matching on the exact failure kind.
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// The evaluator failed to reduce the expression tree.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
