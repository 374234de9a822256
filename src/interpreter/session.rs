use std::io::{BufRead, Write};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{EvalResult, parse_statement},
        lexer::Token,
        token_stream::TokenStream,
        variables::VariableTable,
    },
};

/// Printed before each statement is read.
pub const PROMPT: &str = "> ";
/// Printed before each computed value.
pub const RESULT: &str = "= ";
/// Ends a statement; error recovery skips input up to this character.
pub const TERMINATOR: char = ';';

/// What the loop does after one pass.
enum Step {
    Continue,
    Quit,
}

/// An interactive evaluation session.
///
/// Repeatedly prompts, evaluates one statement and prints its value. Errors
/// in a statement are written to the error sink, the rest of the statement is
/// discarded up to the next `;`, and the session carries on. The session
/// ends on `q` or at the end of the input.
///
/// # Example
/// ```
/// use calq::interpreter::session::Session;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let input = "2 + 3 * 4; 1 / 0; (2 + 3) * 4; q";
///
/// Session::new(input.as_bytes(), &mut out, &mut err).run().unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "> = 14\n> > = 20\n> ");
/// assert_eq!(String::from_utf8(err).unwrap(), "Error on line 1: Division by zero.\n");
/// ```
pub struct Session<R, W, E> {
    tokens:    TokenStream<R>,
    variables: VariableTable,
    out:       W,
    err:       E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session over `input` with `pi` and `e` predeclared.
    pub fn new(input: R, out: W, err: E) -> Self {
        Self::with_variables(input, VariableTable::with_constants(), out, err)
    }

    /// Creates a session over `input` that starts from `variables`.
    pub const fn with_variables(input: R, variables: VariableTable, out: W, err: E) -> Self {
        Self { tokens: TokenStream::new(input),
               variables,
               out,
               err }
    }

    /// Returns the variables declared so far.
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Runs the session until `q` or the end of the input.
    ///
    /// # Errors
    /// Only conditions that make it impossible to continue are returned:
    /// `Error::Io` if reading or writing fails, and `Error::BufferFull` if
    /// the evaluator broke its one-token lookahead rule. Errors in user input
    /// are reported to the error sink instead.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            match self.step() {
                Ok(Step::Continue) => {},
                Ok(Step::Quit) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.err, "{e}")?;
                    self.tokens.discard_until(TERMINATOR)?;
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads and evaluates one statement.
    fn step(&mut self) -> EvalResult<Step> {
        match self.tokens.next()? {
            // An empty statement; prompt again.
            Token::Semicolon => return Ok(Step::Continue),
            Token::Quit | Token::End => return Ok(Step::Quit),
            token => self.tokens.putback(token)?,
        }

        let value = parse_statement(&mut self.tokens, &mut self.variables)?;
        writeln!(self.out, "{RESULT}{value}")?;

        // The statement left its lookahead in the buffer; a terminator there
        // belongs to this statement.
        match self.tokens.next()? {
            Token::Semicolon => {},
            token => self.tokens.putback(token)?,
        }
        Ok(Step::Continue)
    }
}
