pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Characters that the lexer cannot match become [`TokenKind::Symbol`] tokens, which the parser
/// rejects. If the input contains no tokens at all, a [`kind::NoTokensFound`] error is returned.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        };
        log::trace!("token {:?} `{}` at {:?}", token.kind, token.lexeme, token.span);
        tokens.push(token);
    }

    if tokens.is_empty() {
        log::debug!("no tokens found in {:?}", input);
        return Err(Error::new(vec![0..input.len()], kind::NoTokensFound));
    }

    Ok(tokens.into_boxed_slice())
}
