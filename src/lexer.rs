use crate::ast::Token;
use regex::Regex;
use std::fmt;

// NUMBER terminal: optional sign, digits with optional decimal point,
// optional exponent.
const NUMBER_PATTERN: &str = r"^-?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?";

/// Source position of a token, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors produced while scanning the document text.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character that cannot start any token
    UnexpectedChar { ch: char, position: Position },

    /// `=begin` with no matching `=end`
    UnterminatedComment { position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character '{}' at {}", ch, position)
            }
            LexError::UnterminatedComment { position } => {
                write!(f, "unterminated block comment starting at {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: String,
    pos: usize,
    line: u32,
    column: u32,
    token_start: Position,
    // True after a token that can end an expression; decides whether a
    // following '-' is subtraction or the sign of a numeric literal.
    prev_ends_value: bool,
    number_re: Regex,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            token_start: Position::start(),
            prev_ends_value: false,
            number_re: Regex::new(NUMBER_PATTERN).expect("number pattern is valid"),
        }
    }

    /// Position of the token most recently returned by [`next_token`](Self::next_token).
    pub fn token_position(&self) -> Position {
        self.token_start
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Skip whitespace, `; ...` line comments, and `=begin ... =end` block
    /// comments. Comments are fully transparent to the token stream.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.current_char() {
                Some(ch) if ch.is_whitespace() => self.advance(),
                Some(';') => {
                    while self.current_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('=') if self.rest().starts_with("=begin") => {
                    let open = self.current_position();
                    for _ in 0.."=begin".len() {
                        self.advance();
                    }
                    // Non-greedy: stop at the nearest =end
                    loop {
                        if self.rest().starts_with("=end") {
                            for _ in 0.."=end".len() {
                                self.advance();
                            }
                            break;
                        }
                        if self.current_char().is_none() {
                            return Err(LexError::UnterminatedComment { position: open });
                        }
                        self.advance();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self, first: char) -> Result<Token, LexError> {
        match self.number_re.find(self.rest()) {
            Some(m) => {
                let lexeme = m.as_str().to_string();
                for _ in 0..lexeme.len() {
                    self.advance();
                }
                Ok(Token::Number(lexeme))
            }
            None => Err(LexError::UnexpectedChar {
                ch: first,
                position: self.token_start,
            }),
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        self.token_start = self.current_position();

        let token = match self.current_char() {
            None => Token::Eof,
            Some(ch) if ch.is_ascii_digit() => self.read_number(ch)?,
            Some('.') => {
                if self.peek_char(1) == Some('[') {
                    self.advance();
                    self.advance();
                    Token::ConstOpen
                } else if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number('.')?
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: '.',
                        position: self.token_start,
                    });
                }
            }
            Some('-') => {
                if !self.prev_ends_value && self.number_re.is_match(self.rest()) {
                    self.read_number('-')?
                } else {
                    self.advance();
                    Token::Minus
                }
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                match ident.as_str() {
                    "def" => Token::Def,
                    "len" => Token::Len,
                    _ => Token::Name(ident),
                }
            }
            Some('=') => {
                self.advance();
                Token::Eq
            }
            Some('+') => {
                self.advance();
                Token::Plus
            }
            Some('*') => {
                self.advance();
                Token::Star
            }
            Some('/') => {
                self.advance();
                Token::Slash
            }
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some(']') => {
                if self.peek_char(1) == Some('.') {
                    self.advance();
                    self.advance();
                    Token::ConstClose
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: ']',
                        position: self.token_start,
                    });
                }
            }
            Some(ch) => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    position: self.token_start,
                });
            }
        };

        self.prev_ends_value = matches!(
            token,
            Token::Number(_) | Token::Name(_) | Token::RParen | Token::ConstClose
        );
        Ok(token)
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("def len value");
    assert_eq!(lexer.next_token().unwrap(), Token::Def);
    assert_eq!(lexer.next_token().unwrap(), Token::Len);
    assert_eq!(lexer.next_token().unwrap(), Token::Name("value".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_const_expr_markers() {
    let mut lexer = Lexer::new(".[x + 5].");
    assert_eq!(lexer.next_token().unwrap(), Token::ConstOpen);
    assert_eq!(lexer.next_token().unwrap(), Token::Name("x".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Plus);
    assert_eq!(lexer.next_token().unwrap(), Token::Number("5".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::ConstClose);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
