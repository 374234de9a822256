/// Parsing errors.
///
/// Defines all error types that can occur while reading tokens and matching
/// them against the statement grammar: unrecognized characters, missing
/// delimiters, malformed declarations and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value.
/// Runtime errors include division by zero, factorials of non-integers,
/// unknown or duplicated variables and failed integer narrowing.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure raised while evaluating a statement.
///
/// `Parse` and `Runtime` abort only the statement being evaluated; the
/// session reports them and carries on. `BufferFull` and `Io` end the
/// session.
#[derive(Debug)]
pub enum Error {
    /// The input did not match the grammar.
    Parse(ParseError),
    /// The input was well formed but could not be evaluated.
    Runtime(RuntimeError),
    /// A token was put back while another one was already buffered.
    BufferFull,
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns `true` for errors caused by user input.
    ///
    /// # Example
    /// ```
    /// use calq::error::{Error, RuntimeError};
    ///
    /// assert!(Error::from(RuntimeError::DivideByZero { line: 1 }).is_recoverable());
    /// assert!(!Error::BufferFull.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Runtime(_))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::BufferFull => write!(f, "Internal error: putback() into a full buffer."),
            Self::Io(e) => write!(f, "I/O error: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::BufferFull => None,
            Self::Io(e) => Some(e),
        }
    }
}
