// tests/integration_tests.rs
//
// End-to-end: document text through parse() to the JSON the CLI writes.

use caraway_lang::{parse, result_to_json, Error, ProgramResult, Value};
use serde_json::json;

fn to_json(input: &str) -> serde_json::Value {
    result_to_json(&parse(input).unwrap())
}

// ============================================================================
// Whole Documents
// ============================================================================

#[test]
fn test_single_number() {
    assert_eq!(to_json("123"), json!([123]));
}

#[test]
fn test_composite_document() {
    let config = "
        def x = 10
        5
        (1, 2, 3)
        .[x + 5].
    ";
    assert_eq!(to_json(config), json!([5, [1, 2, 3], 15]));
}

#[test]
fn test_complex_nested_structure() {
    let config = "
        def base = 10
        def multiplier = 3

        ; main configuration array
        (
            .[base * multiplier].,
            (1, 2, (3, 4)),
            .[len((1, 2, 3, 4, 5))].
        )
    ";
    assert_eq!(to_json(config), json!([[30, [1, 2, [3, 4]], 5]]));
}

#[test]
fn test_underscore_names() {
    let config = "
        def my_var = 42
        def _private = 10
        (my_var, _private)
    ";
    assert_eq!(to_json(config), json!([[42, 10]]));
}

#[test]
fn test_division_yields_json_float() {
    assert_eq!(to_json("def a = 100\n.[a / 4]."), json!([25.0]));
}

// ============================================================================
// Comments Are Transparent
// ============================================================================

#[test]
fn test_line_comment_before_value() {
    let config = "
        ; это комментарий
        42
    ";
    assert_eq!(parse(config).unwrap(), ProgramResult::Values(vec![Value::Integer(42)]));
}

#[test]
fn test_block_comment_before_value() {
    let config = "
        =begin
        многострочный
        комментарий
        =end
        3.14
    ";
    assert_eq!(parse(config).unwrap(), ProgramResult::Values(vec![Value::Float(3.14)]));
}

#[test]
fn test_comments_do_not_change_result() {
    let plain = "def x = 5\n(x, 10, x)";
    let commented = "def x = 5 ; bind x\n(x, =begin inline =end 10, x)";
    assert_eq!(parse(plain).unwrap(), parse(commented).unwrap());
}

#[test]
fn test_only_comments_is_no_result() {
    let config = "
        ; comment one
        =begin
        block comment
        =end
        ; comment two
    ";
    assert_eq!(parse(config).unwrap(), ProgramResult::NoResult);
}

// ============================================================================
// Result Shape in JSON
// ============================================================================

#[test]
fn test_empty_input_serializes_to_null() {
    assert_eq!(parse("").unwrap(), ProgramResult::NoResult);
    assert_eq!(to_json(""), json!(null));
}

#[test]
fn test_empty_array_serializes_to_nested_list() {
    // Distinct from the null of an empty document
    assert_eq!(to_json("()"), json!([[]]));
}

#[test]
fn test_only_definitions_serialize_to_empty_list() {
    assert_eq!(to_json("def x = 1"), json!([]));
}

#[test]
fn test_float_classification_survives_serialization() {
    // 10/5 is exact but division still floats
    assert_eq!(to_json(".[10 / 5]."), json!([2.0]));
    assert_eq!(to_json("7"), json!([7]));
}

// ============================================================================
// Errors Abort the Whole Document
// ============================================================================

#[test]
fn test_no_partial_result_on_error() {
    // First statement is fine, second fails; the caller sees only the error
    let err = parse("1\nnope").unwrap_err();
    assert!(matches!(err, Error::Eval(_)));
    assert!(err.to_string().contains("Undefined constant: nope"));
}

#[test]
fn test_division_by_zero_message() {
    let err = parse("def x = 10\n.[x / 0].").unwrap_err();
    assert_eq!(err.to_string(), "Division by zero");
}

#[test]
fn test_syntax_error_reports_position() {
    let err = parse("def x = ]").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Syntax error"), "got: {}", message);
    assert!(message.contains("1:9"), "got: {}", message);
}

#[test]
fn test_type_mismatch_message() {
    let err = parse("def a = (1, 2)\n.[a + 1].").unwrap_err();
    assert!(err.to_string().contains("cannot apply '+' to array"));
}
