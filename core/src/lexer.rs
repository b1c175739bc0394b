use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Position, SyntaxError};

/// Decimal literals only; `inf`, `NaN` and friends stay symbols.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

// ============================================================================
// Lexer
// ============================================================================

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> char {
        if self.position < self.input.len() {
            self.input[self.position]
        } else {
            '\0'
        }
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            if self.input[self.position] == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }

            if !self.is_eof() && self.current_char() == ';' {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        while !self.is_eof() && self.current_char() != '\n' {
            self.advance();
        }
    }

    // ========================================================================
    // Strings
    // ========================================================================

    fn read_string(&mut self) -> Result<TokenKind, SyntaxError> {
        let start = self.here();
        self.advance(); // opening quote
        let mut content = String::new();

        loop {
            if self.is_eof() {
                return Err(SyntaxError::UnterminatedString(start));
            }
            match self.current_char() {
                '"' => {
                    self.advance();
                    return Ok(TokenKind::String(content));
                }
                '\\' => {
                    let at = self.here();
                    self.advance();
                    if self.is_eof() {
                        return Err(SyntaxError::UnterminatedString(start));
                    }
                    content.push(self.read_escape_sequence(at)?);
                }
                c => {
                    content.push(c);
                    self.advance();
                }
            }
        }
    }

    fn read_escape_sequence(&mut self, at: Position) -> Result<char, SyntaxError> {
        let c = self.current_char();
        self.advance();

        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            _ => Err(SyntaxError::UnknownEscape { escape: c, at }),
        }
    }

    // ========================================================================
    // Numbers and Symbols
    // ========================================================================

    fn is_delimiter(c: char) -> bool {
        c.is_whitespace() || matches!(c, '{' | '}' | '"')
    }

    fn read_atom(&mut self) -> TokenKind {
        let mut text = String::new();
        while !self.is_eof() && !Self::is_delimiter(self.current_char()) {
            text.push(self.current_char());
            self.advance();
        }

        if NUMBER.is_match(&text)
            && let Ok(n) = text.parse::<f64>()
        {
            return TokenKind::Number(n);
        }
        TokenKind::Symbol(text)
    }

    // ========================================================================
    // Main Tokenization
    // ========================================================================

    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();
        let at = self.here();

        if self.is_eof() {
            return Ok(Token::new(TokenKind::Eof, at));
        }

        let kind = match self.current_char() {
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            '"' => self.read_string()?,
            _ => self.read_atom(),
        };
        Ok(Token::new(kind, at))
    }

    /// Tokenize the whole input, ending with `Eof`
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

// ============================================================================
// Token Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    Symbol(String),
    Number(f64),
    String(String),
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub at: Position,
}

impl Token {
    pub fn new(kind: TokenKind, at: Position) -> Self {
        Token { kind, at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn sym(s: &str) -> TokenKind {
        TokenKind::Symbol(s.to_string())
    }

    #[test]
    fn test_braces_split_adjacent_groups() {
        assert_eq!(
            kinds("{f}{g 1}"),
            vec![
                TokenKind::LBrace,
                sym("f"),
                TokenKind::RBrace,
                TokenKind::LBrace,
                sym("g"),
                TokenKind::Number(1.0),
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("42")[0], TokenKind::Number(42.0));
        assert_eq!(kinds("-3.5")[0], TokenKind::Number(-3.5));
        assert_eq!(kinds(".5")[0], TokenKind::Number(0.5));
        assert_eq!(kinds("1e3")[0], TokenKind::Number(1000.0));
        assert_eq!(kinds("+7")[0], TokenKind::Number(7.0));
    }

    #[test]
    fn test_number_like_symbols() {
        for text in ["-", "+", "inf", "NaN", "1/2", "1.2.3", "x1", "equal?", "<="] {
            assert_eq!(kinds(text)[0], sym(text), "{text}");
        }
    }

    #[test]
    fn test_strings_keep_spaces_and_escapes() {
        assert_eq!(
            kinds(r#""a {b} \"c\"\n""#)[0],
            TokenKind::String("a {b} \"c\"\n".to_string())
        );
    }

    #[test]
    fn test_string_ends_a_symbol() {
        assert_eq!(
            kinds(r#"f"x""#),
            vec![sym("f"), TokenKind::String("x".to_string()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("{f \"oops}").tokenize().unwrap_err();
        assert_eq!(err, SyntaxError::UnterminatedString(Position::new(1, 4)));
    }

    #[test]
    fn test_unknown_escape() {
        let err = Lexer::new(r#""\q""#).tokenize().unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnknownEscape {
                escape: 'q',
                at: Position::new(1, 2)
            }
        );
    }

    #[test]
    fn test_comments_and_positions() {
        let tokens = Lexer::new("; header\n  {+ 1 2} ; trailing")
            .tokenize()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::LBrace);
        assert_eq!(tokens[0].at, Position::new(2, 3));
        assert_eq!(tokens[1].at, Position::new(2, 4));
        assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_semicolon_inside_symbol_is_literal() {
        assert_eq!(kinds("a;b")[0], sym("a;b"));
    }
}
