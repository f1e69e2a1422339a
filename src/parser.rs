use crate::{
    ast::{BinOp, Document, Expr, Statement, Token},
    lexer::{LexError, Lexer, Position},
};
use std::fmt;
use std::mem;

/// Errors produced while parsing the token stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Scanner failure
    Lex(LexError),

    /// Token that no grammar production could consume
    UnexpectedToken {
        position: Position,
        expected: &'static str,
        found: Token,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnexpectedToken {
                position,
                expected,
                found,
            } => write!(f, "expected {} at {}, found {}", expected, position, found),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::UnexpectedToken { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Recursive descent parser over the fixed precedence grammar.
///
/// ```text
/// document      := statement*
/// statement     := "def" NAME "=" value | value
/// value         := NUMBER | array | const_expr | NAME
/// array         := "(" ")" | "(" value ("," value)* ")"
/// const_expr    := ".[" expr "]."
/// expr          := term (("+"|"-") term)*
/// term          := atom (("*"|"/") atom)*
/// atom          := "len" "(" expr ")" | "(" ... ")" | const_expr | NUMBER | NAME
/// ```
///
/// In `atom` position a parenthesized form with no top-level comma is an
/// arithmetic grouping; with a comma it is an array literal whose elements
/// are full expressions.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_position();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_position();
        Ok(())
    }

    /// Replace the current token with Eof and return it, then advance.
    fn take(&mut self) -> Result<Token, ParseError> {
        let token = mem::replace(&mut self.current_token, Token::Eof);
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_position();
        Ok(token)
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token, what: &'static str) -> Result<(), ParseError> {
        if self.check(&expected) {
            self.advance()
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            position: self.current_position,
            expected,
            found: self.current_token.clone(),
        }
    }

    /// Parse a whole document: statements until end of input.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut statements = vec![];

        while !self.check(&Token::Eof) {
            statements.push(self.parse_statement()?);
        }

        Ok(Document { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.check(&Token::Def) {
            self.advance()?;

            let position = self.current_position;
            let name = match self.take()? {
                Token::Name(name) => name,
                found => {
                    return Err(ParseError::UnexpectedToken {
                        position,
                        expected: "constant name after 'def'",
                        found,
                    });
                }
            };

            self.expect(Token::Eq, "'=' in constant definition")?;
            let value = self.parse_value()?;

            Ok(Statement::ConstantDef { name, value })
        } else {
            Ok(Statement::Expression(self.parse_value()?))
        }
    }

    /// Parse a `value`: number, name, array literal, or const expression.
    fn parse_value(&mut self) -> Result<Expr, ParseError> {
        match &self.current_token {
            Token::Number(_) => match self.take()? {
                Token::Number(text) => Ok(Expr::Number(text)),
                _ => unreachable!(),
            },
            Token::Name(_) => match self.take()? {
                Token::Name(name) => Ok(Expr::Name(name)),
                _ => unreachable!(),
            },
            Token::LParen => self.parse_array(),
            Token::ConstOpen => self.parse_const_expr(),
            _ => Err(self.unexpected("a number, name, array, or '.['")),
        }
    }

    /// Parse an array literal in value position. Elements are values, never
    /// bare arithmetic.
    fn parse_array(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, "'('")?;

        let mut elements = vec![];

        if !self.check(&Token::RParen) {
            elements.push(self.parse_value()?);
            while self.check(&Token::Comma) {
                self.advance()?;
                elements.push(self.parse_value()?);
            }
        }

        self.expect(Token::RParen, "',' or ')' in array literal")?;
        Ok(Expr::Array(elements))
    }

    fn parse_const_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::ConstOpen, "'.['")?;
        let expr = self.parse_expr()?;
        self.expect(Token::ConstClose, "'].' closing constant expression")?;
        Ok(Expr::ConstExpr(Box::new(expr)))
    }

    /// Additive level, left-associative.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Subtract,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_term()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Multiplicative level, left-associative.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_atom()?;

        loop {
            let op = match &self.current_token {
                Token::Star => BinOp::Multiply,
                Token::Slash => BinOp::Divide,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_atom()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match &self.current_token {
            Token::Number(_) => match self.take()? {
                Token::Number(text) => Ok(Expr::Number(text)),
                _ => unreachable!(),
            },
            Token::Name(_) => match self.take()? {
                Token::Name(name) => Ok(Expr::Name(name)),
                _ => unreachable!(),
            },
            Token::Len => {
                self.advance()?;
                self.expect(Token::LParen, "'(' after 'len'")?;
                let expr = self.parse_expr()?;
                self.expect(Token::RParen, "')' closing 'len' argument")?;
                Ok(Expr::Len(Box::new(expr)))
            }
            Token::ConstOpen => self.parse_const_expr(),
            Token::LParen => self.parse_group_or_array(),
            _ => Err(self.unexpected("a number, name, array, grouping, or 'len'")),
        }
    }

    /// Disambiguate `( ... )` inside an expression: no top-level comma is an
    /// arithmetic grouping, a comma makes it an array literal.
    fn parse_group_or_array(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, "'('")?;

        if self.check(&Token::RParen) {
            self.advance()?;
            return Ok(Expr::Array(vec![]));
        }

        let first = self.parse_expr()?;

        if self.check(&Token::Comma) {
            let mut elements = vec![first];
            while self.check(&Token::Comma) {
                self.advance()?;
                elements.push(self.parse_expr()?);
            }
            self.expect(Token::RParen, "',' or ')' in array literal")?;
            Ok(Expr::Array(elements))
        } else {
            self.expect(Token::RParen, "')' closing grouping")?;
            Ok(first)
        }
    }
}
