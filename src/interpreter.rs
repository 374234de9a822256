/// The evaluator module parses and computes statements in a single pass.
///
/// Each grammar level is a function that reads tokens and returns the value
/// of what it recognized. There is no syntax tree: values are computed as
/// soon as a production is complete.
///
/// # Responsibilities
/// - Evaluates declarations and arithmetic expressions with the usual
///   precedence.
/// - Reads and declares variables through the variable table.
/// - Reports errors such as division by zero or unbalanced brackets.
pub mod evaluator;
/// The lexer module defines the tokens of the calculator language.
///
/// The lexer (tokenizer) classifies raw input text into numbers, names,
/// keywords and single-character operators.
pub mod lexer;
/// The session module drives the interactive statement loop.
///
/// # Responsibilities
/// - Prints the prompt and each result.
/// - Reports errors and resynchronizes at the next `;`.
/// - Stops on `q` or at the end of the input.
pub mod session;
/// The token stream module feeds tokens to the evaluator.
///
/// It reads input lazily, one line at a time, and offers one token of
/// pushback and skipping to a delimiter for error recovery.
pub mod token_stream;
/// The variables module stores named values.
pub mod variables;
