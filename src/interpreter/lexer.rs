use logos::Logos;

/// Represents a lexical token in the input stream.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// `q`, only when it stands alone.
    #[token("q", priority = 3)]
    Quit,
    /// Variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`, the statement terminator.
    #[token(";")]
    Semicolon,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// End of the input stream. Produced by the token stream, never by the
    /// lexer.
    End,
}

impl Token {
    /// Returns the source character of a single-character token.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Semicolon.symbol(), Some(';'));
    /// assert_eq!(Token::Quit.symbol(), Some('q'));
    /// assert_eq!(Token::Number(1.0).symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Bang => Some('!'),
            Self::Caret => Some('^'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::LBrace => Some('{'),
            Self::RBrace => Some('}'),
            Self::Equals => Some('='),
            Self::Semicolon => Some(';'),
            Self::Quit => Some('q'),
            Self::Number(_) | Self::Let | Self::Identifier(_) | Self::Ignored | Self::End => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "'{symbol}'");
        }
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::Let => write!(f, "'let'"),
            Self::End => write!(f, "end of input"),
            _ => write!(f, "whitespace"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
