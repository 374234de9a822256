use std::io::BufRead;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            binary::parse_expression,
            core::{EvalResult, reject},
        },
        lexer::Token,
        token_stream::TokenStream,
        variables::VariableTable,
    },
    util::num::f64_to_u64_checked,
};

/// Evaluates an optional postfix factorial.
///
/// Grammar: `factorial := power "!"?`
///
/// # Errors
/// Returns `ExpectedInteger` if `!` is applied to a negative or fractional
/// value.
pub fn parse_factorial<R: BufRead>(tokens: &mut TokenStream<R>,
                                   variables: &VariableTable)
                                   -> EvalResult<f64> {
    let left = parse_power(tokens, variables)?;
    match tokens.next()? {
        Token::Bang => Ok(factorial(left, tokens.line())?),
        token => {
            tokens.putback(token)?;
            Ok(left)
        },
    }
}

/// Evaluates an optional exponentiation.
///
/// Only a single `^` is accepted per level: `2^3^2` evaluates `2^3` and
/// leaves the second `^` for the caller.
///
/// Grammar: `power := primary ("^" primary)?`
pub fn parse_power<R: BufRead>(tokens: &mut TokenStream<R>,
                               variables: &VariableTable)
                               -> EvalResult<f64> {
    let base = parse_primary(tokens, variables)?;
    match tokens.next()? {
        Token::Caret => Ok(base.powf(parse_primary(tokens, variables)?)),
        token => {
            tokens.putback(token)?;
            Ok(base)
        },
    }
}

/// Evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - names of declared variables
/// - parenthesized or braced expressions
/// - a primary preceded by unary `-` or `+`
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "(" expression ")"
///              | "{" expression "}"
///              | "-" primary
///              | "+" primary
/// ```
/// # Errors
/// - `UndefinedVariable` for a name that was never declared.
/// - `UnbalancedDelimiter` if a group is not closed by its matching
///   delimiter.
/// - `TooDeeplyNested` if groups and signs nest past
///   [`MAX_NESTING`](crate::interpreter::token_stream::MAX_NESTING).
/// - `PrimaryExpected` for any other token.
pub fn parse_primary<R: BufRead>(tokens: &mut TokenStream<R>,
                                 variables: &VariableTable)
                                 -> EvalResult<f64> {
    tokens.descend()?;
    let result = parse_operand(tokens, variables);
    tokens.ascend();
    result
}

fn parse_operand<R: BufRead>(tokens: &mut TokenStream<R>,
                             variables: &VariableTable)
                             -> EvalResult<f64> {
    match tokens.next()? {
        Token::Number(value) => Ok(value),
        Token::Identifier(name) => Ok(variables.lookup(&name, tokens.line())?),
        Token::LParen => parse_group(tokens, variables, ')'),
        Token::LBrace => parse_group(tokens, variables, '}'),
        Token::Minus => Ok(-parse_primary(tokens, variables)?),
        Token::Plus => parse_primary(tokens, variables),
        token => {
            let error = ParseError::PrimaryExpected { token: token.to_string(),
                                                      line:  tokens.line(), };
            reject(tokens, token, error)
        },
    }
}

/// Evaluates the inside of a group whose opening delimiter has already been
/// consumed, then requires `closing`.
fn parse_group<R: BufRead>(tokens: &mut TokenStream<R>,
                           variables: &VariableTable,
                           closing: char)
                           -> EvalResult<f64> {
    let value = parse_expression(tokens, variables)?;
    match tokens.next()? {
        token if token.symbol() == Some(closing) => Ok(value),
        token => {
            let error = ParseError::UnbalancedDelimiter { expected: closing,
                                                          found:    token.to_string(),
                                                          line:     tokens.line(), };
            reject(tokens, token, error)
        },
    }
}

/// Largest `n` whose factorial is finite as an `f64`.
pub const LARGEST_FINITE_FACTORIAL: u64 = 170;

/// Computes `n!` for a non-negative whole number `n`.
///
/// The product saturates to infinity once it leaves the `f64` range, so any
/// `n` above [`LARGEST_FINITE_FACTORIAL`] is infinite without being
/// multiplied out.
///
/// # Errors
/// Returns `RuntimeError::ExpectedInteger` for negative or fractional
/// values.
///
/// # Example
/// ```
/// use calq::{error::RuntimeError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(5.0, 1).unwrap(), 120.0);
/// assert_eq!(factorial(0.0, 1).unwrap(), 1.0);
/// assert!(factorial(171.0, 1).unwrap().is_infinite());
/// assert!(factorial(1e300, 1).unwrap().is_infinite());
///
/// let err = factorial(4.5, 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::ExpectedInteger { line: 2, .. }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(value: f64, line: usize) -> Result<f64, RuntimeError> {
    if value.is_finite() && value > LARGEST_FINITE_FACTORIAL as f64 {
        return Ok(f64::INFINITY);
    }
    let n = f64_to_u64_checked(value, line)?;
    let mut product = 1.0_f64;
    for i in 2..=n {
        product *= i as f64;
        if product.is_infinite() {
            break;
        }
    }
    Ok(product)
}
