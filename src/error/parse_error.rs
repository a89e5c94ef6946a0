#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character in the input matches no recognized token.
    UnexpectedCharacter {
        /// The offending slice of the input.
        lexeme: String,
        /// Byte offset of the slice in the input.
        offset: usize,
    },
    /// Found an unexpected token where a value was required.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token in the input.
        offset: usize,
    },
    /// Reached the end of input where a value was required.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(` in the input.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the token in the input.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { lexeme, offset } => {
                write!(f, "Error at offset {offset}: Unrecognized character: '{lexeme}'.")
            },

            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at offset {offset}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
