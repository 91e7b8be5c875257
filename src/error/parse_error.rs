#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token where a primary expression was required.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the unmatched opening parenthesis.
        column: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses were nested deeper than the supported limit.
    GroupingTooDeep {
        /// The column of the opening parenthesis that exceeded the limit.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },

            Self::GroupingTooDeep { column } => {
                write!(f, "Error at column {column}: Parentheses are nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
