/// A fully evaluated configuration value.
///
/// This is the single runtime type used for constant bindings, expression
/// results, and the final output sequence. The language preserves the
/// distinction between integers and floats: a literal produces a `Float`
/// exactly when its text contains `.`, `e`, or `E`.
///
/// # Examples
///
/// ```
/// use caraway_lang::Value;
///
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Array of values, possibly nested, possibly empty
    Array(Vec<Value>),
}

impl Value {
    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Array(_) => None,
        }
    }

    /// True for `Integer(0)` and `Float(0.0)`
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Array(_) => false,
        }
    }
}

/// The outcome of evaluating one whole document.
///
/// A document with zero top-level statements produces [`ProgramResult::NoResult`],
/// which is distinct from a result that happens to contain no values (a
/// document made only of constant definitions) and from a result containing
/// an empty array (`()`).
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramResult {
    /// The document contained no statements at all
    NoResult,

    /// One value per non-definition top-level statement, in source order
    Values(Vec<Value>),
}

impl ProgramResult {
    /// The value sequence, or `None` for the no-result case.
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            ProgramResult::NoResult => None,
            ProgramResult::Values(values) => Some(values),
        }
    }
}
