//! Tokenizer for function expressions.

use crate::expr::error::{ParseError, ParseErrorKind, ParseResult};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    /// `^` or `**`
    Caret,
    LParen,
    RParen,
    Comma,
    Dot,
    Eof,
}

impl TokenKind {
    /// Human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Ident(name) => format!("name '{}'", name),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Percent => "'%'".to_string(),
            TokenKind::Caret => "'^'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the first character of the token.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenize the whole input. The last token is always `Eof`.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.pos));
                return Ok(tokens);
            }
            tokens.push(self.next_token()?);
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        let start = self.pos;
        let ch = self.advance();

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    TokenKind::Caret
                } else {
                    TokenKind::Star
                }
            }
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '.' => {
                // `.5` is a number, `math.sin` is a qualifier
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return self.read_number(start);
                }
                TokenKind::Dot
            }
            c if c.is_ascii_digit() => return self.read_number(start),
            c if is_ident_start(c) => return Ok(self.read_identifier(start)),
            // Unicode math operators
            '\u{00D7}' | '\u{22C5}' => TokenKind::Star, // × ⋅
            '\u{00F7}' => TokenKind::Slash,             // ÷
            '\u{2212}' => TokenKind::Minus,             // −
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedChar(other),
                    start,
                ))
            }
        };

        Ok(Token::new(kind, start))
    }

    fn read_number(&mut self, start: usize) -> ParseResult<Token> {
        self.consume_digits();

        if self.source.get(start) != Some(&'.') && self.peek() == Some('.') {
            self.advance();
            self.consume_digits();
        }

        // Exponent only when digits follow, so `2e` stays `2` then `e`
        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    self.advance();
                }
                self.consume_digits();
            }
        }

        let text: String = self.source[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map(|value| Token::new(TokenKind::Number(value), start))
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber(text), start))
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        let name: String = self.source[start..self.pos].iter().collect();
        Token::new(TokenKind::Ident(name), start)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
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

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("(x+1)*2"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::Plus,
                TokenKind::Number(1.0),
                TokenKind::RParen,
                TokenKind::Star,
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(kinds("0.25")[0], TokenKind::Number(0.25));
        assert_eq!(kinds(".5")[0], TokenKind::Number(0.5));
        assert_eq!(kinds("1e-3")[0], TokenKind::Number(0.001));
        assert_eq!(kinds("2E2")[0], TokenKind::Number(200.0));
    }

    #[test]
    fn test_trailing_e_is_not_exponent() {
        assert_eq!(
            kinds("2e"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Ident("e".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            kinds("math.sin"),
            vec![
                TokenKind::Ident("math".into()),
                TokenKind::Dot,
                TokenKind::Ident("sin".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("  sin (x)").tokenize().unwrap();
        assert_eq!(tokens[0].position, 2);
        assert_eq!(tokens[1].position, 6);
        assert_eq!(tokens.last().unwrap().position, 9);
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("2 $ x").tokenize().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('$'));
        assert_eq!(err.position, 2);
    }
}
