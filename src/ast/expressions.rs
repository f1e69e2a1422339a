use crate::ast::BinOp;

/// Abstract Syntax Tree node representing a parsed value or expression.
///
/// The AST is the internal representation of a document after parsing and
/// before evaluation. Numeric literals keep their raw text so the evaluator
/// can classify them as integer or float by lexical form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal, raw lexeme text
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -3.14
    /// 1.5e10
    /// ```
    Number(String),

    /// Reference to a previously defined constant
    ///
    /// # Example
    /// ```text
    /// def x = 10
    /// x
    /// ```
    Name(String),

    /// Array literal
    ///
    /// Ordered, possibly empty, arbitrarily nested.
    ///
    /// # Examples
    /// ```text
    /// ()
    /// (1, (2, 3), 4)
    /// ```
    Array(Vec<Expr>),

    /// Constant-folding expression (`.[ ... ].`)
    ///
    /// Evaluates to the same value as its inner expression; exists as a
    /// syntactic marker separating folded regions from plain values.
    ///
    /// # Example
    /// ```text
    /// .[x + 5].
    /// ```
    ConstExpr(Box<Expr>),

    /// Binary arithmetic operation
    ///
    /// Only valid inside a constant-folding expression.
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Length operator call
    ///
    /// Yields the element count of an array, or `1` for a scalar.
    ///
    /// # Examples
    /// ```text
    /// len(items)
    /// len((1, 2, 3))
    /// ```
    Len(Box<Expr>),
}
