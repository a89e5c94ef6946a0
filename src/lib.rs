//! # minicalc
//!
//! minicalc is a small, self-contained arithmetic expression evaluator.
//! It lexes, parses, and evaluates a single expression string and returns a
//! double-precision result, for embedders such as calculator widgets or
//! computed configuration values.
//!
//! The grammar supports `+ - * / ^`, unary `+`/`-`, parentheses, and implicit
//! multiplication by juxtaposition (`2(3 + 2)` is `2 * (3 + 2)`). All
//! operators are left-associative, including `^`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::Token,
        parser::core::{Precedence, parse_expression},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for literals and unary/binary operations.
/// - Enables exhaustive matching over the closed set of constructs.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised while turning an
/// expression string into a tree. It standardizes error reporting and carries
/// the offending lexeme or token along with its byte offset, so a caller can
/// distinguish "the expression evaluates to zero" from "the expression is
/// malformed."
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (lexer, parser).
/// - Attaches offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from expression text to numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single arithmetic expression and returns the result.
///
/// This function lexes the expression, parses it into an AST, and reduces the
/// tree to a number. No state is retained across calls. Lexical and syntactic
/// problems are reported as [`ParseError`] rather than being coerced to a
/// numeric fallback; arithmetic conditions such as division by zero are not
/// errors and follow IEEE-754 semantics (`1/0` is positive infinity).
///
/// # Errors
/// Returns a `ParseError` if the input contains an unrecognized character,
/// has no valid parse, leaves an opening parenthesis unmatched, or continues
/// past a complete expression.
///
/// # Examples
/// ```
/// use minicalc::evaluate_expression;
///
/// let value = evaluate_expression("50 + 22 * 33 + 2(3 + 2)").unwrap();
/// assert_eq!(value, 786.0);
///
/// // Malformed input is reported instead of evaluating to a number.
/// assert!(evaluate_expression("(1 + 2").is_err());
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedCharacter { lexeme: slice.to_string(),
                                                         offset: lexer.span().start, });
        }
    }
    debug!("lexed {} tokens from {expression:?}", tokens.len());

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, Precedence::Min)?;

    if let Some((token, offset)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  format!("{token:?}"),
                                                          offset: *offset, });
    }
    debug!("parsed expression: {expr:?}");

    let value = evaluate(&expr);
    debug!("evaluated to {value}");

    Ok(value)
}
