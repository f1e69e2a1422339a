use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal, kept as raw text until evaluation
    ///
    /// The lexeme decides the runtime kind: it becomes a float exactly when
    /// it contains `.`, `e`, or `E`.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -3.14
    /// .5
    /// 1.5e10
    /// 2.5e-3
    /// ```
    Number(String),

    /// Constant name
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// base
    /// _private
    /// retry_count
    /// ```
    Name(String),

    // Keywords
    /// Constant definition keyword
    ///
    /// # Example
    /// ```text
    /// def x = 10
    /// ```
    Def,

    /// Length operator keyword
    ///
    /// # Examples
    /// ```text
    /// len(items)
    /// len((1, 2, 3))
    /// ```
    Len,

    // Operators
    /// Binding operator in a constant definition
    Eq,

    /// Addition
    Plus,

    /// Subtraction
    Minus,

    /// Multiplication
    Star,

    /// Division
    Slash,

    // Delimiters
    /// Opens an array literal or an arithmetic grouping
    LParen,

    /// Closes an array literal or an arithmetic grouping
    RParen,

    /// Separates array elements
    Comma,

    /// Opens a constant-folding expression (`.[`)
    ///
    /// # Example
    /// ```text
    /// .[x + 5].
    /// ```
    ConstOpen,

    /// Closes a constant-folding expression (`].`)
    ConstClose,

    /// End of file
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "number '{}'", text),
            Token::Name(name) => write!(f, "name '{}'", name),
            Token::Def => write!(f, "'def'"),
            Token::Len => write!(f, "'len'"),
            Token::Eq => write!(f, "'='"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::ConstOpen => write!(f, "'.['"),
            Token::ConstClose => write!(f, "'].'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
