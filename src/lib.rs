pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Document, Expr, Statement, Token};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexer, Position};
pub use output::{result_to_json, value_to_json};
pub use parser::{ParseError, Parser};
pub use value::{ProgramResult, Value};

use std::fmt;

/// Any failure while compiling one document, from either stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Lexing or grammar failure
    Parse(ParseError),
    /// Evaluation failure
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Syntax error: {}", e),
            Error::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

/// Compile one whole document into its resolved value sequence.
///
/// Runs the two-pass pipeline: lex and parse the text into an AST, then
/// evaluate it with a fresh constant environment. The first error aborts
/// the document; there is no partial result.
///
/// # Examples
///
/// ```
/// use caraway_lang::{parse, ProgramResult, Value};
///
/// let result = parse("def x = 10\n(x, 5)").unwrap();
/// assert_eq!(
///     result,
///     ProgramResult::Values(vec![Value::Array(vec![
///         Value::Integer(10),
///         Value::Integer(5),
///     ])])
/// );
///
/// assert_eq!(parse("").unwrap(), ProgramResult::NoResult);
/// ```
pub fn parse(input: &str) -> Result<ProgramResult, Error> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    let document = parser.parse_document()?;

    let mut evaluator = Evaluator::new();
    Ok(evaluator.eval_document(&document)?)
}
