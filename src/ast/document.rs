use crate::ast::Statement;

/// A complete parsed document.
///
/// Holds the top-level statements in source order. The AST for one document
/// is built by a single parse and discarded after evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Top-level statements, in source order
    pub statements: Vec<Statement>,
}
