use crate::ast::Expr;

/// Top-level statement.
///
/// A document is a flat sequence of statements evaluated in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Constant definition
    ///
    /// Binds a name to the fully evaluated value for all later statements.
    /// Produces no output. Redefining a name overwrites the prior binding.
    ///
    /// # Example
    /// ```text
    /// def retries = 3
    /// ```
    ConstantDef {
        name: String,
        value: Expr,
    },

    /// Bare value-producing statement
    ///
    /// Contributes one value to the result sequence.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// (1, 2, 3)
    /// .[x + 5].
    /// ```
    Expression(Expr),
}
