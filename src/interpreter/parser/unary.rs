use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Precedence, parse_expression},
    },
};

/// Parses a prefix expression.
///
/// Prefix expressions form the base of the expression grammar and include:
/// - numeric literals
/// - parenthesized expressions
/// - unary `+` and `-` applied to another prefix expression
///
/// The unary operand is another prefix expression, not a full expression, so
/// unary operators bind tighter than any binary operator: `-2 ^ 2` parses as
/// `(-2) ^ 2`.
///
/// After the base node is built, juxtaposition is checked: if the current
/// token is a number or `(`, the node becomes the left operand of an implicit
/// multiplication whose right side is parsed at [`Precedence::Div`]. This
/// lets `2(3 + 2)` parse as `2 * (3 + 2)` and lets juxtaposition chain
/// without crossing an explicit `+`/`-` boundary.
///
/// Grammar:
/// ```text
///     prefix := (NUMBER | grouping | ("+" | "-") prefix) juxtaposition?
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a prefix expression.
///
/// # Returns
/// The parsed prefix [`Expr`], possibly wrapped in an implicit
/// multiplication.
///
/// # Errors
/// - `UnexpectedToken` if the current token cannot start an expression; this
///   includes identifiers, which the lexer recognizes but the grammar has no
///   use for.
/// - `UnexpectedEndOfInput` if the input ends where a value was required.
pub(crate) fn parse_prefix_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let node = match tokens.peek() {
        Some((Token::Number(_), _)) => parse_number(tokens),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((Token::Plus, _)) => {
            tokens.next();
            Ok(Expr::UnaryOp { op:      UnaryOperator::Plus,
                               operand: Box::new(parse_prefix_expression(tokens)?), })
        },
        Some((Token::Minus, _)) => {
            tokens.next();
            Ok(Expr::UnaryOp { op:      UnaryOperator::Negate,
                               operand: Box::new(parse_prefix_expression(tokens)?), })
        },
        Some((tok, offset)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                                 offset: *offset, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }?;

    // Juxtaposition: `2(3 + 2)`, `2 3`, `(1 + 1)(2 + 2)`.
    if let Some((Token::Number(_) | Token::LParen, _)) = tokens.peek() {
        let right = parse_expression(tokens, Precedence::Div)?;
        return Ok(Expr::BinaryOp { left:  Box::new(node),
                                   op:    BinaryOperator::Mul,
                                   right: Box::new(right), });
    }

    Ok(node)
}

/// Parses a numeric literal.
///
/// The lexer has already converted the lexeme to `f64`, including trailing
/// dots (`3.` is the value `3.0`), so this only consumes the token and wraps
/// the value in an [`Expr::Number`].
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number.
///
/// # Returns
/// An [`Expr::Number`] containing the literal value.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Number { value: *value }),
        Some((tok, offset)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                                 offset: *offset, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression at [`Precedence::Min`], and then requires a closing `)`. A
/// missing closing parenthesis is reported as
/// `ParseError::ExpectedClosingParen`, carrying the offset of the unmatched
/// `(`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let offset = match tokens.next() {
        Some((_, offset)) => *offset,
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let expr = parse_expression(tokens, Precedence::Min)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { offset }),
    }
}
