// tests/parser_tests.rs

use caraway_lang::ast::{BinOp, Expr, Statement};
use caraway_lang::lexer::Lexer;
use caraway_lang::parser::{ParseError, Parser};

fn parse_statements(input: &str) -> Result<Vec<Statement>, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    Ok(parser.parse_document()?.statements)
}

fn parse_single(input: &str) -> Expr {
    let statements = parse_statements(input).unwrap();
    assert_eq!(statements.len(), 1, "Expected one statement for {:?}", input);
    match statements.into_iter().next().unwrap() {
        Statement::Expression(expr) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

fn binop(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn number(text: &str) -> Expr {
    Expr::Number(text.to_string())
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_empty_document() {
    assert_eq!(parse_statements("").unwrap(), vec![]);
    assert_eq!(parse_statements("; only a comment").unwrap(), vec![]);
}

#[test]
fn test_number_statement() {
    assert_eq!(parse_single("42"), number("42"));
}

#[test]
fn test_name_statement() {
    assert_eq!(parse_single("x"), Expr::Name("x".to_string()));
}

#[test]
fn test_constant_definition() {
    let statements = parse_statements("def x = 10").unwrap();
    assert_eq!(
        statements,
        vec![Statement::ConstantDef {
            name: "x".to_string(),
            value: number("10"),
        }]
    );
}

#[test]
fn test_definition_then_value() {
    let statements = parse_statements("def x = 10\nx").unwrap();
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Statement::ConstantDef { .. }));
    assert!(matches!(statements[1], Statement::Expression(Expr::Name(_))));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_empty_array() {
    assert_eq!(parse_single("()"), Expr::Array(vec![]));
}

#[test]
fn test_simple_array() {
    assert_eq!(
        parse_single("(1, 2, 3)"),
        Expr::Array(vec![number("1"), number("2"), number("3")])
    );
}

#[test]
fn test_single_element_array() {
    // In value position parentheses always build an array
    assert_eq!(parse_single("(5)"), Expr::Array(vec![number("5")]));
}

#[test]
fn test_nested_array() {
    assert_eq!(
        parse_single("(1, (2, 3), 4)"),
        Expr::Array(vec![
            number("1"),
            Expr::Array(vec![number("2"), number("3")]),
            number("4"),
        ])
    );
}

#[test]
fn test_array_of_names_and_const_exprs() {
    let expr = parse_single("(x, .[1 + 2].)");
    match expr {
        Expr::Array(elements) => {
            assert_eq!(elements[0], Expr::Name("x".to_string()));
            assert!(matches!(elements[1], Expr::ConstExpr(_)));
        }
        other => panic!("Expected array, got {:?}", other),
    }
}

// ============================================================================
// Constant-Folding Expressions
// ============================================================================

#[test]
fn test_const_expr_addition() {
    assert_eq!(
        parse_single(".[10 + 5]."),
        Expr::ConstExpr(Box::new(binop(BinOp::Add, number("10"), number("5"))))
    );
}

#[test]
fn test_precedence_mul_over_add() {
    // 1 + 2 * 3 => Add(1, Multiply(2, 3))
    assert_eq!(
        parse_single(".[1 + 2 * 3]."),
        Expr::ConstExpr(Box::new(binop(
            BinOp::Add,
            number("1"),
            binop(BinOp::Multiply, number("2"), number("3")),
        )))
    );
}

#[test]
fn test_left_associativity() {
    // 10 - 3 - 2 => Subtract(Subtract(10, 3), 2)
    assert_eq!(
        parse_single(".[10 - 3 - 2]."),
        Expr::ConstExpr(Box::new(binop(
            BinOp::Subtract,
            binop(BinOp::Subtract, number("10"), number("3")),
            number("2"),
        )))
    );

    // 100 / 5 / 2 => Divide(Divide(100, 5), 2)
    assert_eq!(
        parse_single(".[100 / 5 / 2]."),
        Expr::ConstExpr(Box::new(binop(
            BinOp::Divide,
            binop(BinOp::Divide, number("100"), number("5")),
            number("2"),
        )))
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    // (1 + 2) * 3 => Multiply(Add(1, 2), 3)
    assert_eq!(
        parse_single(".[(1 + 2) * 3]."),
        Expr::ConstExpr(Box::new(binop(
            BinOp::Multiply,
            binop(BinOp::Add, number("1"), number("2")),
            number("3"),
        )))
    );
}

#[test]
fn test_comma_makes_array_inside_expr() {
    // With a top-level comma the parenthesized form is an array operand
    assert_eq!(
        parse_single(".[len((1, 2, 3))]."),
        Expr::ConstExpr(Box::new(Expr::Len(Box::new(Expr::Array(vec![
            number("1"),
            number("2"),
            number("3"),
        ])))))
    );
}

#[test]
fn test_len_of_name() {
    assert_eq!(
        parse_single(".[len(arr)]."),
        Expr::ConstExpr(Box::new(Expr::Len(Box::new(Expr::Name(
            "arr".to_string()
        )))))
    );
}

#[test]
fn test_len_in_arithmetic() {
    // len(xs) - 1 => Subtract(Len(xs), 1)
    assert_eq!(
        parse_single(".[len(xs) - 1]."),
        Expr::ConstExpr(Box::new(binop(
            BinOp::Subtract,
            Expr::Len(Box::new(Expr::Name("xs".to_string()))),
            number("1"),
        )))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_arithmetic_outside_const_region_fails() {
    // Plus is only meaningful inside .[ ].
    assert!(parse_statements("(1 + 2)").is_err());
    assert!(parse_statements("1 + 2").is_err());
}

#[test]
fn test_unclosed_array() {
    assert!(parse_statements("(1, 2").is_err());
    assert!(parse_statements("(1, 2,)").is_err());
}

#[test]
fn test_malformed_definition() {
    assert!(parse_statements("def = 10").is_err());
    assert!(parse_statements("def x 10").is_err());
    assert!(parse_statements("def x =").is_err());
}

#[test]
fn test_unclosed_const_expr() {
    assert!(parse_statements(".[1 + 2").is_err());
    assert!(parse_statements(".[1 +].").is_err());
}

#[test]
fn test_keyword_is_not_a_value() {
    assert!(parse_statements("def").is_err());
    assert!(parse_statements("len").is_err());
}

#[test]
fn test_error_carries_position() {
    let err = parse_statements("def x = ,").unwrap_err();
    match err {
        ParseError::UnexpectedToken { position, .. } => {
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 9);
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}
