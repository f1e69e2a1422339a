use std::collections::HashMap;

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::{
    ast::{BinOp, Document, Expr, Statement},
    value::{ProgramResult, Value},
};

/// Errors that can occur during document evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Reference to a name with no earlier definition
    UndefinedConstant(String),

    /// Division with a zero-valued right operand
    DivisionByZero,

    /// Arithmetic or `len` applied to an incompatible operand kind
    TypeMismatch {
        operation: &'static str,
        kind: &'static str,
    },

    /// Numeric literal that survived the scanner but does not convert
    InvalidNumber(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UndefinedConstant(name) => write!(f, "Undefined constant: {}", name),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::TypeMismatch { operation, kind } => {
                write!(f, "Type mismatch: cannot apply '{}' to {}", operation, kind)
            }
            EvalError::InvalidNumber(text) => write!(f, "Invalid number format: {}", text),
        }
    }
}

impl std::error::Error for EvalError {}

/// Returns a human-readable kind name for a Value
fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Array(_) => "array",
    }
}

/// The document evaluator.
///
/// Walks the AST bottom-up, growing the constant environment as definitions
/// are met and collecting one value per bare statement. One evaluator serves
/// one document; parsing independent documents concurrently requires a fresh
/// evaluator each.
#[derive(Default)]
pub struct Evaluator {
    /// Constants defined so far, populated strictly in document order
    constants: HashMap<String, Value>,
}

impl Evaluator {
    /// Creates a new evaluator with an empty constant environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a parsed document into its result sequence.
    ///
    /// Statements run in source order; a constant definition binds its fully
    /// evaluated value for all later statements and emits nothing, every
    /// other statement appends one value to the result. The first error
    /// aborts the whole document.
    ///
    /// # Examples
    ///
    /// ```
    /// use caraway_lang::{Evaluator, Lexer, Parser, ProgramResult, Value};
    ///
    /// let lexer = Lexer::new("def x = 10\n.[x + 5].");
    /// let mut parser = Parser::new(lexer).unwrap();
    /// let document = parser.parse_document().unwrap();
    ///
    /// let mut evaluator = Evaluator::new();
    /// let result = evaluator.eval_document(&document).unwrap();
    /// assert_eq!(result, ProgramResult::Values(vec![Value::Integer(15)]));
    /// ```
    pub fn eval_document(&mut self, document: &Document) -> Result<ProgramResult, EvalError> {
        if document.statements.is_empty() {
            return Ok(ProgramResult::NoResult);
        }

        let mut values = vec![];

        for statement in &document.statements {
            match statement {
                Statement::ConstantDef { name, value } => {
                    // Eager: the binding is the value at definition time.
                    // Redefinition overwrites for later statements only.
                    let value = self.eval_expr(value)?;
                    self.constants.insert(name.clone(), value);
                }
                Statement::Expression(expr) => {
                    values.push(self.eval_expr(expr)?);
                }
            }
        }

        Ok(ProgramResult::Values(values))
    }

    fn eval_expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(text) => eval_number(text),
            Expr::Name(name) => match self.constants.get(name) {
                Some(value) => Ok(value.clone()),
                None => Err(EvalError::UndefinedConstant(name.clone())),
            },
            Expr::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element)?);
                }
                Ok(Value::Array(values))
            }
            Expr::ConstExpr(inner) => self.eval_expr(inner),
            Expr::Len(inner) => {
                let value = self.eval_expr(inner)?;
                Ok(eval_len(&value))
            }
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                apply_binop(*op, &left, &right)
            }
        }
    }
}

/// Classify a numeric literal by its lexical form: `.`/`e`/`E` makes it a
/// float, anything else an integer.
fn eval_number(text: &str) -> Result<Value, EvalError> {
    if text.contains(['.', 'e', 'E']) {
        match text.parse::<f64>() {
            Ok(n) => Ok(Value::Float(n)),
            Err(_) => Err(EvalError::InvalidNumber(text.to_string())),
        }
    } else {
        match text.parse::<i64>() {
            Ok(n) => Ok(Value::Integer(n)),
            Err(_) => Err(EvalError::InvalidNumber(text.to_string())),
        }
    }
}

/// `len` of an array is its element count; any scalar has length 1.
fn eval_len(value: &Value) -> Value {
    match value {
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        Value::Integer(_) | Value::Float(_) => Value::Integer(1),
    }
}

fn apply_binop(op: BinOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    // The divisor is inspected before anything else, arrays included.
    if op == BinOp::Divide && right.is_zero() {
        return Err(EvalError::DivisionByZero);
    }

    // Arithmetic never applies to arrays; report whichever side offends.
    if let Value::Array(_) = left {
        return Err(EvalError::TypeMismatch {
            operation: op.symbol(),
            kind: type_name(left),
        });
    }
    if let Value::Array(_) = right {
        return Err(EvalError::TypeMismatch {
            operation: op.symbol(),
            kind: type_name(right),
        });
    }

    match op {
        BinOp::Add => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_add(*b) {
                Some(n) => Ok(Value::Integer(n)),
                None => Ok(mixed_arithmetic(left, right, op)),
            },
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (a, b) => Ok(mixed_arithmetic(a, b, op)),
        },
        BinOp::Subtract => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_sub(*b) {
                Some(n) => Ok(Value::Integer(n)),
                None => Ok(mixed_arithmetic(left, right, op)),
            },
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
            (a, b) => Ok(mixed_arithmetic(a, b, op)),
        },
        BinOp::Multiply => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(*b) {
                Some(n) => Ok(Value::Integer(n)),
                None => Ok(mixed_arithmetic(left, right, op)),
            },
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
            (a, b) => Ok(mixed_arithmetic(a, b, op)),
        },
        BinOp::Divide => {
            // Division always yields a float, even for two exact integers.
            Ok(mixed_arithmetic(left, right, op))
        }
    }
}

/// Mixed integer/float arithmetic, division of any numeric pair, and
/// same-kind integer arithmetic whose result does not fit in i64.
///
/// Goes through `Decimal` to avoid accumulating binary floating-point error,
/// falling back to plain f64 arithmetic when a value is out of `Decimal`
/// range. The result kind is always `Float`: a float operand contaminates,
/// division floats unconditionally, and an overflowed integer result widens.
fn mixed_arithmetic(left: &Value, right: &Value, op: BinOp) -> Value {
    if let Some(ad) = to_decimal(left)
        && let Some(bd) = to_decimal(right)
    {
        let rd = match op {
            BinOp::Add => ad + bd,
            BinOp::Subtract => ad - bd,
            BinOp::Multiply => ad * bd,
            BinOp::Divide => ad / bd,
        };
        if let Some(r) = rd.to_f64() {
            return Value::Float(r);
        }
    }

    // Out of Decimal range; arrays were rejected before this point.
    let a = left.as_float().unwrap_or(f64::NAN);
    let b = right.as_float().unwrap_or(f64::NAN);
    Value::Float(match op {
        BinOp::Add => a + b,
        BinOp::Subtract => a - b,
        BinOp::Multiply => a * b,
        BinOp::Divide => a / b,
    })
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Integer(n) => Decimal::from_i64(*n),
        Value::Float(n) => Decimal::from_f64(*n),
        Value::Array(_) => None,
    }
}
