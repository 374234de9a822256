use std::io::BufRead;

use logos::Logos;

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Pulls tokens from a line-oriented character stream.
///
/// Input is read one line at a time and only when the previous line has been
/// used up, so an interactive caller can print a prompt before the stream
/// blocks. Each call to [`TokenStream::next`] lexes exactly one token from
/// the unconsumed part of the current line.
///
/// The stream holds at most one token of pushback. A grammar level that reads
/// a token it cannot use hands it back with [`TokenStream::putback`] so the
/// level above sees it next.
pub struct TokenStream<R> {
    reader:    R,
    /// The current input line, including its line break.
    pending:   String,
    /// Byte offset of the first unconsumed character in `pending`.
    cursor:    usize,
    /// Number of lines read so far.
    line:      usize,
    buffer:    Option<Token>,
    exhausted: bool,
    /// Operands currently being read inside one another.
    nesting:   usize,
}

/// Deepest nesting of operands (brackets and unary signs) a statement may
/// have before it is rejected.
pub const MAX_NESTING: usize = 128;

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream that reads from `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               pending: String::new(),
               cursor: 0,
               line: 0,
               buffer: None,
               exhausted: false,
               nesting: 0 }
    }

    /// Returns the number of the line currently being tokenized (1-based).
    ///
    /// Before anything has been read this is `0`.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token.
    ///
    /// A token held in the pushback slot is returned first. Once the reader
    /// is exhausted, every call yields [`Token::End`].
    ///
    /// # Errors
    /// - `ParseError::InvalidToken` if the input at the cursor does not start
    ///   any token. The offending character is consumed.
    /// - `Error::Io` if reading from the underlying stream fails.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut tokens = TokenStream::new("let x2 = 1.5;".as_bytes());
    /// assert_eq!(tokens.next().unwrap(), Token::Let);
    /// assert_eq!(tokens.next().unwrap(), Token::Identifier("x2".to_string()));
    /// assert_eq!(tokens.next().unwrap(), Token::Equals);
    /// assert_eq!(tokens.next().unwrap(), Token::Number(1.5));
    /// assert_eq!(tokens.next().unwrap(), Token::Semicolon);
    /// assert_eq!(tokens.next().unwrap(), Token::End);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> EvalResult<Token> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        loop {
            if self.exhausted {
                return Ok(Token::End);
            }

            let (lexed, end) = {
                let mut lexer = Token::lexer(&self.pending[self.cursor..]);
                let lexed = lexer.next()
                                 .map(|result| result.map_err(|()| lexer.slice().to_string()));
                (lexed, lexer.span().end)
            };

            match lexed {
                Some(Ok(token)) => {
                    self.cursor += end;
                    return Ok(token);
                },
                Some(Err(text)) => {
                    self.cursor += end;
                    return Err(ParseError::InvalidToken { token: text,
                                                          line:  self.line, }.into());
                },
                None => self.fill_line()?,
            }
        }
    }

    /// Stores `token` so that the next call to [`TokenStream::next`] returns
    /// it.
    ///
    /// # Errors
    /// Returns `Error::BufferFull` if a token is already buffered. The grammar
    /// never reads more than one token ahead, so this signals a defect in the
    /// evaluator rather than bad input.
    ///
    /// # Example
    /// ```
    /// use calq::{
    ///     error::Error,
    ///     interpreter::{lexer::Token, token_stream::TokenStream},
    /// };
    ///
    /// let mut tokens = TokenStream::new("".as_bytes());
    /// tokens.putback(Token::Plus).unwrap();
    /// assert!(matches!(tokens.putback(Token::Minus), Err(Error::BufferFull)));
    /// assert_eq!(tokens.next().unwrap(), Token::Plus);
    /// ```
    pub fn putback(&mut self, token: Token) -> EvalResult<()> {
        if self.buffer.is_some() {
            return Err(Error::BufferFull);
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Skips input up to and including the next `delim`.
    ///
    /// If the buffered token is `delim` itself, only the buffer is cleared.
    /// Any other buffered token is dropped along with the skipped input.
    /// Stops silently at the end of input.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading from the underlying stream fails.
    pub fn discard_until(&mut self, delim: char) -> EvalResult<()> {
        if let Some(token) = self.buffer.take()
           && token.symbol() == Some(delim)
        {
            return Ok(());
        }

        while !self.exhausted {
            if let Some(offset) = self.pending[self.cursor..].find(delim) {
                self.cursor += offset + delim.len_utf8();
                return Ok(());
            }
            self.fill_line()?;
        }
        Ok(())
    }

    /// Records that an operand is about to be read inside the current one.
    ///
    /// Every successful call must be paired with [`TokenStream::ascend`].
    ///
    /// # Errors
    /// Returns `ParseError::TooDeeplyNested` once [`MAX_NESTING`] operands are
    /// open.
    pub fn descend(&mut self) -> EvalResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::TooDeeplyNested { limit: MAX_NESTING,
                                                     line:  self.line, }.into());
        }
        self.nesting += 1;
        Ok(())
    }

    /// Closes the operand opened by the last [`TokenStream::descend`].
    pub const fn ascend(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Replaces the consumed line with the next one from the reader, or marks
    /// the stream as exhausted.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, which the lexer rejects
    /// as an invalid token.
    fn fill_line(&mut self) -> EvalResult<()> {
        self.pending.clear();
        self.cursor = 0;
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            self.exhausted = true;
        } else {
            self.line += 1;
            self.pending.push_str(&String::from_utf8_lossy(&bytes));
        }
        Ok(())
    }
}
