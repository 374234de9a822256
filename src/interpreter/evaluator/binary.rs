use std::io::BufRead;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, unary::parse_factorial},
        lexer::Token,
        token_stream::TokenStream,
        variables::VariableTable,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// Evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first operand.
/// - `variables`: Table used to resolve names.
///
/// # Returns
/// The value of the expression. The first token that is not part of it is
/// left in the pushback slot.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::parse_expression, token_stream::TokenStream,
///     variables::VariableTable,
/// };
///
/// let mut tokens = TokenStream::new("10 - 4 - 3;".as_bytes());
/// let value = parse_expression(&mut tokens, &VariableTable::new()).unwrap();
/// assert_eq!(value, 3.0);
/// ```
pub fn parse_expression<R: BufRead>(tokens: &mut TokenStream<R>,
                                    variables: &VariableTable)
                                    -> EvalResult<f64> {
    let mut left = parse_term(tokens, variables)?;
    loop {
        match tokens.next()? {
            Token::Plus => left += parse_term(tokens, variables)?,
            Token::Minus => left -= parse_term(tokens, variables)?,
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

/// Evaluates multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `term := factorial (("*" | "/" | "%") factorial)*`
///
/// # Errors
/// - `DivideByZero` if the right operand of `/` is zero, or the right operand
///   of `%` truncates to zero.
/// - `NotAnInteger` if an operand of `%` cannot be narrowed to an integer.
pub fn parse_term<R: BufRead>(tokens: &mut TokenStream<R>,
                              variables: &VariableTable)
                              -> EvalResult<f64> {
    let mut left = parse_factorial(tokens, variables)?;
    loop {
        match tokens.next()? {
            Token::Star => left *= parse_factorial(tokens, variables)?,
            Token::Slash => {
                let divisor = parse_factorial(tokens, variables)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivideByZero { line: tokens.line() }.into());
                }
                left /= divisor;
            },
            Token::Percent => {
                let divisor = parse_factorial(tokens, variables)?;
                left = remainder(left, divisor, tokens.line())?;
            },
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

/// Computes `left % right` on the operands truncated toward zero.
///
/// # Example
/// ```
/// use calq::interpreter::evaluator::binary::remainder;
///
/// assert_eq!(remainder(7.9, 2.0, 1).unwrap(), 1.0);
/// assert_eq!(remainder(-7.0, 2.0, 1).unwrap(), -1.0);
/// assert!(remainder(7.0, 0.5, 1).is_err());
/// ```
pub fn remainder(left: f64, right: f64, line: usize) -> Result<f64, RuntimeError> {
    let dividend = f64_to_i64_truncated(left, line)?;
    let divisor = f64_to_i64_truncated(right, line)?;
    if divisor == 0 {
        return Err(RuntimeError::DivideByZero { line });
    }
    // i64::MIN % -1 overflows; its remainder is 0.
    Ok(i64_to_f64(dividend.wrapping_rem(divisor)))
}
