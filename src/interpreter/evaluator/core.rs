use std::io::BufRead;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::binary::parse_expression, lexer::Token, token_stream::TokenStream,
        variables::VariableTable,
    },
};

/// Result type used by the evaluator.
///
/// All grammar levels return either a computed value or an [`Error`]
/// describing why the statement was abandoned.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates one statement and returns its value.
///
/// A statement is either a declaration, introduced by `let`, or an
/// expression. The token following the statement is left in the pushback
/// slot.
///
/// Grammar: `statement := declaration | expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
/// - `variables`: Table that declarations are added to and names are read
///   from.
///
/// # Returns
/// The value of the expression, or the value bound by the declaration.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::core::parse_statement, token_stream::TokenStream, variables::VariableTable,
/// };
///
/// let mut tokens = TokenStream::new("let x = 10; x * 2;".as_bytes());
/// let mut variables = VariableTable::new();
///
/// assert_eq!(parse_statement(&mut tokens, &mut variables).unwrap(), 10.0);
/// tokens.next().unwrap(); // ';'
/// assert_eq!(parse_statement(&mut tokens, &mut variables).unwrap(), 20.0);
/// ```
pub fn parse_statement<R: BufRead>(tokens: &mut TokenStream<R>,
                                   variables: &mut VariableTable)
                                   -> EvalResult<f64> {
    match tokens.next()? {
        Token::Let => parse_declaration(tokens, variables),
        token => {
            tokens.putback(token)?;
            parse_expression(tokens, variables)
        },
    }
}

/// Evaluates a declaration whose `let` keyword has already been consumed.
///
/// Grammar: `declaration := "let" identifier "=" expression`
///
/// # Errors
/// - `NameExpected` if `let` is not followed by an identifier.
/// - `AssignExpected` if the name is not followed by `=`.
/// - `AlreadyDeclared` if the name is already in the table.
/// - Any error raised while evaluating the right-hand side.
pub fn parse_declaration<R: BufRead>(tokens: &mut TokenStream<R>,
                                     variables: &mut VariableTable)
                                     -> EvalResult<f64> {
    let (name, line) = match tokens.next()? {
        Token::Identifier(name) => (name, tokens.line()),
        token => {
            let error = ParseError::NameExpected { token: token.to_string(),
                                                   line:  tokens.line(), };
            return reject(tokens, token, error);
        },
    };

    match tokens.next()? {
        Token::Equals => {},
        token => {
            let error = ParseError::AssignExpected { name,
                                                     token: token.to_string(),
                                                     line: tokens.line() };
            return reject(tokens, token, error);
        },
    }

    let value = parse_expression(tokens, variables)?;
    Ok(variables.declare(&name, value, line)?)
}

/// Returns `token` to the stream and fails with `error`.
///
/// A rejected [`Token::End`] is reported as an unexpected end of input.
pub(in crate::interpreter) fn reject<R: BufRead, T>(tokens: &mut TokenStream<R>,
                                                     token: Token,
                                                     error: ParseError)
                                                     -> EvalResult<T> {
    let error = match token {
        Token::End => ParseError::UnexpectedEndOfInput { line: tokens.line() },
        _ => error,
    };
    tokens.putback(token)?;
    Err(error.into())
}
