#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that does not start any token.
    InvalidToken {
        /// The offending input text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A group was opened but its closing delimiter was not found.
    UnbalancedDelimiter {
        /// The closing delimiter that was expected, `)` or `}`.
        expected: char,
        /// The token found in its place.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot begin an operand was found.
    PrimaryExpected {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `let` was not followed by a variable name.
    NameExpected {
        /// The token found instead of a name.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The name in a declaration was not followed by `=`.
    AssignExpected {
        /// The name being declared.
        name:  String,
        /// The token found instead of `=`.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Brackets or unary signs were nested too deeply.
    TooDeeplyNested {
        /// The deepest nesting allowed.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, line } => {
                write!(f, "Error on line {line}: Invalid token '{token}'.")
            },
            Self::UnbalancedDelimiter { expected, found, line } => write!(f,
                                                                          "Error on line {line}: Expected '{expected}' but found {found}."),
            Self::PrimaryExpected { token, line } => write!(f,
                                                            "Error on line {line}: Expected a number, name or '(' but found {token}."),
            Self::NameExpected { token, line } => write!(f,
                                                         "Error on line {line}: Expected a name in declaration but found {token}."),
            Self::AssignExpected { name, token, line } => write!(f,
                                                                 "Error on line {line}: Expected '=' after '{name}' in declaration but found {token}."),
            Self::TooDeeplyNested { limit, line } => write!(f,
                                                            "Error on line {line}: Expression nests deeper than {limit} levels."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
