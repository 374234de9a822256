#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable whose name is already taken.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division (or remainder) by zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Factorial of a negative or fractional value.
    ExpectedInteger {
        /// The operand of `!`.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value could not be narrowed to a 64-bit integer.
    NotAnInteger {
        /// The value that failed to narrow.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::AlreadyDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is already declared.")
            },
            Self::DivideByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ExpectedInteger { value, line } => write!(f,
                                                            "Error on line {line}: Factorial needs a non-negative integer, but found {value}."),
            Self::NotAnInteger { value, line } => write!(f,
                                                         "Error on line {line}: Value {value} cannot be converted to an integer."),
        }
    }
}

impl std::error::Error for RuntimeError {}
