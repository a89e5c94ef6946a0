use logos::Logos;
use minicalc::{
    ast::{BinaryOperator, Expr},
    evaluate_expression,
    interpreter::{
        lexer::Token,
        parser::core::{Precedence, parse_expression},
    },
};

fn assert_evaluates_to(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!(value == expected,
                             "Expression {src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed to evaluate: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate_expression(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

fn parse(src: &str) -> Expr {
    let tokens: Vec<(Token, usize)> =
        Token::lexer(src).spanned()
                         .map(|(token, span)| (token.expect("lexical error"), span.start))
                         .collect();
    parse_expression(&mut tokens.iter().peekable(), Precedence::Min).expect("parse error")
}

#[test]
fn basic_arithmetic() {
    assert_evaluates_to("1 + 2", 3.0);
    assert_evaluates_to("8 - 5", 3.0);
    assert_evaluates_to("7 * 9", 63.0);
    assert_evaluates_to("10 / 2", 5.0);
    assert_evaluates_to("2 ^ 10", 1024.0);
    assert_evaluates_to("2 + 3 * 4", 14.0);
    assert_evaluates_to("2 * 3 + 4", 10.0);
    assert_evaluates_to("2 ^ 2 * 3", 12.0);
    assert_evaluates_to("(2 + 3) * 4", 20.0);
}

#[test]
fn worked_scenario() {
    assert_evaluates_to("50 + 22 * 33 + 2(3 + 2)", 786.0);
}

#[test]
fn whitespace_is_transparent() {
    let bare = evaluate_expression("1+2").unwrap();
    let spaced = evaluate_expression(" 1 + 2 ").unwrap();
    assert!(bare == spaced);
    assert_evaluates_to("  12  ", 12.0);
}

#[test]
fn numeric_literals() {
    assert_evaluates_to("3.25 + 0.75", 4.0);
    // A trailing dot is part of the literal.
    assert_evaluates_to("3.", 3.0);
    assert_evaluates_to("3. + 2", 5.0);
    // Literals must start with a digit.
    assert_failure(".5");
}

#[test]
fn implicit_multiplication() {
    assert_evaluates_to("2(3 + 2)", 10.0);
    assert_evaluates_to("(1 + 1)(2 + 2)", 8.0);
    assert_evaluates_to("2(3)(4)", 24.0);
    assert_evaluates_to("3(4) + 1", 13.0);
    // Juxtaposed numbers multiply too.
    assert_evaluates_to("2 3", 6.0);
    // Juxtaposition never crosses an explicit +/- boundary.
    assert_evaluates_to("1 + 2(3 + 2)", 11.0);
}

#[test]
fn equal_precedence_operators_are_left_associative() {
    assert_evaluates_to("2 - 3 - 4", -5.0);
    assert_evaluates_to("100 / 10 / 5", 2.0);
    // `^` is left-associative in this grammar: (2^3)^2, not 2^(3^2).
    assert_evaluates_to("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn division_binds_tighter_than_multiplication() {
    // `a * b / c` groups as `a * (b / c)`; the chained value is unchanged,
    // but the tree shape fixes the rounding order.
    let expr = parse("8 * 4 / 2");
    match expr {
        Expr::BinaryOp { op: BinaryOperator::Mul,
                         right,
                         .. } => {
            assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Div, .. }));
        },
        other => panic!("Expected a multiplication at the root, got {other:?}"),
    }
    assert_evaluates_to("8 * 4 / 2", 16.0);
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_evaluates_to("-2 ^ 2", 4.0);
    assert_evaluates_to("+5", 5.0);
    assert_evaluates_to("--2", 2.0);
    assert_evaluates_to("-2(3)", -6.0);
    assert_evaluates_to("2 - -3", 5.0);
}

#[test]
fn arithmetic_conditions_are_values_not_errors() {
    assert_evaluates_to("1 / 0", f64::INFINITY);
    assert_evaluates_to("-1 / 0", f64::NEG_INFINITY);
    assert!(evaluate_expression("0 / 0").unwrap().is_nan());
    // powf outside its real domain.
    assert!(evaluate_expression("(0 - 2) ^ 0.5").unwrap().is_nan());
}

#[test]
fn lexical_errors_are_reported() {
    assert_failure("@");
    assert_failure("1 $ 2");
    assert_failure("1\t2");
}

#[test]
fn syntax_errors_are_reported() {
    assert_failure("");
    assert_failure("+");
    assert_failure("1 +");
    assert_failure("* 2");
    assert_failure("()");
    // Unmatched opening parenthesis is an error, not silently closed.
    assert_failure("(1 + 2");
    // Trailing tokens after a complete expression.
    assert_failure("1 + 2)");
}

#[test]
fn identifiers_lex_but_do_not_parse() {
    assert_failure("x");
    assert_failure("x + 1");
    assert_failure("2x");
    assert_failure("sqrt(4)");
}
