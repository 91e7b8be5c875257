#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is not part of the language.
    UnexpectedCharacter {
        /// The character encountered.
        ch:     char,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, column } => {
                write!(f, "Error at column {column}: Unexpected character '{ch}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
