//! # calq
//!
//! calq is an interactive calculator written in Rust.
//! It reads statements from a character stream, evaluates them with the usual
//! operator precedence, and prints each result. Statements may declare
//! variables with `let` and use `+ - * / %`, factorial `!`, exponentiation `^`,
//! unary signs and `( )` / `{ }` grouping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::parse_statement, lexer::Token, token_stream::TokenStream,
        variables::VariableTable,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading or
/// evaluating a statement, together with the fatal conditions that end a
/// session. Every user-facing error carries the input line on which it was
/// detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Separates recoverable input errors from fatal ones.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates reading, evaluating and reporting statements.
///
/// This module ties together the lexer, the token stream, the variable table,
/// the evaluator and the interactive session.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for evaluating single statements or whole
///   sessions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Checked conversions between `f64` and integer types.
pub mod util;

/// Evaluates every statement in `source` and returns their values in order.
///
/// Statements are separated by `;`. Evaluation starts with `pi` and `e`
/// declared and stops early at `q`. Unlike an interactive session, the first
/// error ends evaluation.
///
/// # Errors
/// Returns the first parse or runtime error, or a fatal error.
///
/// # Examples
/// ```
/// use calq::get_results;
///
/// let values = get_results("let x = 10; x * 2; 5!").unwrap();
/// assert_eq!(values, vec![10.0, 20.0, 120.0]);
///
/// // 'y' is not declared.
/// assert!(get_results("y + 1").is_err());
/// ```
pub fn get_results(source: &str) -> Result<Vec<f64>, Error> {
    let mut tokens = TokenStream::new(source.as_bytes());
    let mut variables = VariableTable::with_constants();
    let mut results = Vec::new();

    loop {
        match tokens.next()? {
            Token::Semicolon => continue,
            Token::Quit | Token::End => break,
            token => tokens.putback(token)?,
        }
        results.push(parse_statement(&mut tokens, &mut variables)?);
    }

    Ok(results)
}
