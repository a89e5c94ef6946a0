use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::unary::parse_prefix_expression},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an operator, ordered from weakest to strongest.
///
/// `Min` is the threshold an expression is parsed at when no operator
/// encloses it; no operator carries it. Division binds strictly tighter than
/// multiplication, so `a * b / c` groups as `a * (b / c)` — the chained value
/// is the same algebraically, but the grouping fixes the order of
/// floating-point rounding and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Threshold below every operator.
    Min,
    /// `+` and `-`.
    Term,
    /// `*`.
    Mult,
    /// `/`.
    Div,
    /// `^`.
    Power,
    /// Bound above every operator.
    Max,
}

/// Parses an expression at a given precedence threshold.
///
/// This is the precedence-climbing loop and the entry point for expression
/// parsing: callers start it at [`Precedence::Min`]. A prefix expression is
/// parsed as the left operand; then, as long as the next token is a binary
/// operator binding strictly tighter than `min_precedence`, the operator is
/// consumed, its right operand is parsed at the operator's own precedence,
/// and both sides are folded into a [`Expr::BinaryOp`].
///
/// The strict comparison makes every operator left-associative: a recursive
/// call stops at an equal-precedence sibling and the enclosing loop folds it
/// instead. This holds for `^` as well, so `2 ^ 3 ^ 2` parses as
/// `(2 ^ 3) ^ 2`.
///
/// Grammar: `expression := prefix (operator expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `min_precedence`: Threshold an operator must exceed to be consumed.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any `ParseError` from prefix or right-operand parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_precedence: Precedence)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_prefix_expression(tokens)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && token_precedence(token) > min_precedence
        {
            let precedence = token_precedence(token);
            tokens.next();
            let right = parse_expression(tokens, precedence)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Maps a token to the precedence level of the operator it represents.
///
/// Tokens that are not binary operators map to [`Precedence::Min`], which no
/// threshold admits, so the climbing loop stops on them.
///
/// # Parameters
/// - `token`: Token to look up.
///
/// # Returns
/// The operator's precedence, or `Precedence::Min` for non-operators.
///
/// # Example
/// ```
/// use minicalc::interpreter::{
///     lexer::Token,
///     parser::core::{Precedence, token_precedence},
/// };
///
/// assert_eq!(token_precedence(&Token::Slash), Precedence::Div);
/// assert!(token_precedence(&Token::Slash) > token_precedence(&Token::Star));
/// assert_eq!(token_precedence(&Token::RParen), Precedence::Min);
/// ```
#[must_use]
pub const fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::Plus | Token::Minus => Precedence::Term,
        Token::Star => Precedence::Mult,
        Token::Slash => Precedence::Div,
        Token::Caret => Precedence::Power,
        _ => Precedence::Min,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::core::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
