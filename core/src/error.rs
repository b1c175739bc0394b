//! Error taxonomy for reading, parsing, and evaluating ZHRL programs.
//!
//! Every failure is fatal for the parse or evaluation that raised it and is
//! surfaced to the embedding host as a typed value. Rendered messages start
//! with `ZHRL:` so a host can recognise language errors in its own output.

use std::fmt;

use thiserror::Error;

/// 1-based line and column of a character in program source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Malformed program text or a malformed special form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    // Reader
    #[error("unexpected '}}' at {0}")]
    UnexpectedClose(Position),
    #[error("unclosed '{{' opened at {0}")]
    UnclosedGroup(Position),
    #[error("unterminated string starting at {0}")]
    UnterminatedString(Position),
    #[error("unknown escape sequence \\{escape} at {at}")]
    UnknownEscape { escape: char, at: Position },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected input after expression at {0}")]
    TrailingInput(Position),

    // Parser
    #[error("malformed if")]
    MalformedIf,
    #[error("malformed lam")]
    MalformedLam,
    #[error("malformed var")]
    MalformedVar,
    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),
    #[error("reserved word `{0}` used as an identifier")]
    ReservedWord(String),
    #[error("invalid parameter `{0}`, expected a symbol")]
    InvalidParameter(String),
    #[error("empty application `{{}}`")]
    EmptyApplication,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("ZHRL: syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("ZHRL: unbound name `{0}`")]
    UnboundName(String),

    #[error("ZHRL: type error: {0}")]
    Type(String),

    #[error("ZHRL: {callee} expects {expected} argument(s), got {got}")]
    Arity {
        callee: String,
        expected: usize,
        got: usize,
    },

    #[error("ZHRL: division by zero")]
    DivideByZero,

    #[error("ZHRL: cannot apply non-function value {0}")]
    NotCallable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
