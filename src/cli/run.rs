//! Compile configuration documents to JSON

use super::CliError;
use crate::{output::result_to_json, Evaluator, Lexer, Parser};

/// Options for one compile run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The document text to compile
    pub source: String,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a compile run
#[derive(Debug)]
pub enum RunResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Document compiled successfully with JSON output
    Success(serde_json::Value),
}

/// Compile one document per the given options.
pub fn execute_run(options: &RunOptions) -> Result<RunResult, CliError> {
    let lexer = Lexer::new(&options.source);
    let mut parser = Parser::new(lexer).map_err(CliError::Parse)?;
    let document = parser.parse_document().map_err(CliError::Parse)?;

    if options.syntax_only {
        return Ok(RunResult::SyntaxValid);
    }

    let mut evaluator = Evaluator::new();
    let result = evaluator.eval_document(&document).map_err(CliError::Eval)?;

    Ok(RunResult::Success(result_to_json(&result)))
}
