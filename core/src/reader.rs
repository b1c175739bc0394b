//! Reader: program text to `Term` trees.

use crate::error::{Result, SyntaxError};
use crate::language::Term;
use crate::lexer::{Lexer, Token, TokenKind};

pub struct Reader {
    tokens: Vec<Token>,
    position: usize,
}

impl Reader {
    pub fn new(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Reader {
            tokens,
            position: 0,
        })
    }

    fn peek(&self) -> &Token {
        // The token stream always ends with Eof, which is never consumed.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    pub fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Read the next complete term.
    ///
    /// Groups are collected with an explicit stack so deeply nested input
    /// cannot overflow the host stack here.
    pub fn read_term(&mut self) -> Result<Term> {
        let mut stack: Vec<(Token, Vec<Term>)> = Vec::new();

        loop {
            let token = self.next();
            let term = match token.kind {
                TokenKind::Number(n) => Term::Number(n),
                TokenKind::String(s) => Term::String(s),
                TokenKind::Symbol(s) => Term::Symbol(s),
                TokenKind::LBrace => {
                    stack.push((token, Vec::new()));
                    continue;
                }
                TokenKind::RBrace => match stack.pop() {
                    Some((_, items)) => Term::List(items),
                    None => return Err(SyntaxError::UnexpectedClose(token.at).into()),
                },
                TokenKind::Eof => {
                    return Err(match stack.pop() {
                        Some((open, _)) => SyntaxError::UnclosedGroup(open.at),
                        None => SyntaxError::UnexpectedEof,
                    }
                    .into());
                }
            };

            match stack.last_mut() {
                Some((_, items)) => items.push(term),
                None => return Ok(term),
            }
        }
    }
}

/// Read exactly one term; anything after it is an error.
pub fn read(input: &str) -> Result<Term> {
    let mut reader = Reader::new(input)?;
    let term = reader.read_term()?;
    if !reader.at_eof() {
        return Err(SyntaxError::TrailingInput(reader.peek().at).into());
    }
    Ok(term)
}

/// Read every top-level term in order.
pub fn read_all(input: &str) -> Result<Vec<Term>> {
    let mut reader = Reader::new(input)?;
    let mut terms = Vec::new();
    while !reader.at_eof() {
        terms.push(reader.read_term()?);
    }
    Ok(terms)
}
