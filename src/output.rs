//! JSON output for evaluated configuration values.
//!
//! Bridges [`Value`] and [`ProgramResult`] into `serde_json::Value` so the
//! caller can render with any serde_json writer. Mapping:
//!
//! - `Integer`/`Float` → JSON number
//! - `Array` → JSON array, recursively
//! - `ProgramResult::NoResult` → JSON `null`
//! - `ProgramResult::Values` → JSON array of the serialized values
//!
//! A non-finite float has no JSON representation and maps to `null`.
//!
//! # Examples
//!
//! ```
//! use caraway_lang::{Value, output::value_to_json};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Float(2.5)]);
//! assert_eq!(value_to_json(&value).to_string(), "[1,2.5]");
//! ```

use crate::value::{ProgramResult, Value};

/// Convert a single evaluated value to a serde_json value.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Array(elements) => {
            serde_json::Value::Array(elements.iter().map(value_to_json).collect())
        }
    }
}

/// Convert a whole program result to a serde_json value.
///
/// The no-result marker becomes `null`, distinguishable from `[]` (a result
/// with no values) and `[[]]` (a result holding one empty array).
pub fn result_to_json(result: &ProgramResult) -> serde_json::Value {
    match result {
        ProgramResult::NoResult => serde_json::Value::Null,
        ProgramResult::Values(values) => {
            serde_json::Value::Array(values.iter().map(value_to_json).collect())
        }
    }
}
