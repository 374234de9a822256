use calq::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, token_stream::TokenStream},
};

fn collect(input: &str) -> Vec<Token> {
    let mut tokens = TokenStream::new(input.as_bytes());
    let mut collected = Vec::new();
    loop {
        match tokens.next().unwrap() {
            Token::End => return collected,
            token => collected.push(token),
        }
    }
}

#[test]
fn numbers() {
    assert_eq!(collect("3.25 .5 2. 1e3 2.5E-2 007"),
               vec![Token::Number(3.25),
                    Token::Number(0.5),
                    Token::Number(2.0),
                    Token::Number(1000.0),
                    Token::Number(0.025),
                    Token::Number(7.0),]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(collect("let letter q quit x1 Q"),
               vec![Token::Let,
                    Token::Identifier("letter".to_string()),
                    Token::Quit,
                    Token::Identifier("quit".to_string()),
                    Token::Identifier("x1".to_string()),
                    Token::Identifier("Q".to_string()),]);
}

#[test]
fn operators() {
    assert_eq!(collect("+-*/%!^(){}=;"),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Percent,
                    Token::Bang,
                    Token::Caret,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Equals,
                    Token::Semicolon,]);
}

#[test]
fn adjacent_tokens_without_whitespace() {
    assert_eq!(collect("2x(3)"),
               vec![Token::Number(2.0),
                    Token::Identifier("x".to_string()),
                    Token::LParen,
                    Token::Number(3.0),
                    Token::RParen,]);
}

#[test]
fn invalid_character_is_consumed() {
    let mut tokens = TokenStream::new("1 @ 2".as_bytes());
    assert_eq!(tokens.next().unwrap(), Token::Number(1.0));
    match tokens.next() {
        Err(Error::Parse(ParseError::InvalidToken { token, line })) => {
            assert_eq!(token, "@");
            assert_eq!(line, 1);
        },
        other => panic!("expected an invalid token error, found {other:?}"),
    }
    assert_eq!(tokens.next().unwrap(), Token::Number(2.0));
}

#[test]
fn end_is_sticky() {
    let mut tokens = TokenStream::new("7".as_bytes());
    assert_eq!(tokens.next().unwrap(), Token::Number(7.0));
    assert_eq!(tokens.next().unwrap(), Token::End);
    assert_eq!(tokens.next().unwrap(), Token::End);
}

#[test]
fn lines_are_counted() {
    let mut tokens = TokenStream::new("1\n\n2\n".as_bytes());
    assert_eq!(tokens.line(), 0);
    tokens.next().unwrap();
    assert_eq!(tokens.line(), 1);
    tokens.next().unwrap();
    assert_eq!(tokens.line(), 3);
}

#[test]
fn putback_holds_one_token() {
    let mut tokens = TokenStream::new("2".as_bytes());
    tokens.putback(Token::Minus).unwrap();
    assert!(matches!(tokens.putback(Token::Plus), Err(Error::BufferFull)));
    assert_eq!(tokens.next().unwrap(), Token::Minus);
    assert_eq!(tokens.next().unwrap(), Token::Number(2.0));
}

#[test]
fn discard_until_skips_across_lines() {
    let mut tokens = TokenStream::new("1 2\n3 ; 4".as_bytes());
    tokens.next().unwrap();
    tokens.discard_until(';').unwrap();
    assert_eq!(tokens.next().unwrap(), Token::Number(4.0));
}

#[test]
fn discard_until_clears_buffered_delimiter() {
    let mut tokens = TokenStream::new("5; 6;".as_bytes());
    tokens.putback(Token::Semicolon).unwrap();
    tokens.discard_until(';').unwrap();
    assert_eq!(tokens.next().unwrap(), Token::Number(5.0));
}

#[test]
fn discard_until_drops_other_buffered_token() {
    let mut tokens = TokenStream::new("5; 6;".as_bytes());
    tokens.putback(Token::RParen).unwrap();
    tokens.discard_until(';').unwrap();
    assert_eq!(tokens.next().unwrap(), Token::Number(6.0));
}

#[test]
fn discard_until_stops_at_end_of_input() {
    let mut tokens = TokenStream::new("1 2 3".as_bytes());
    tokens.discard_until(';').unwrap();
    assert_eq!(tokens.next().unwrap(), Token::End);
}
