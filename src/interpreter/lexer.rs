use logos::Logos;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
///
/// Runs of spaces are skipped and never produce a token. Any character that
/// matches no rule below surfaces as a lexer error carrying the offending
/// slice; the lexer always advances past it, so scanning malformed input
/// still terminates.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `3.`.
    ///
    /// A trailing dot is part of the literal: `3.` lexes to `3.0`. Literals
    /// must start with a digit, so `.5` is not a number.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens, such as `x` or `sqrt`.
    ///
    /// Identifiers are recognized lexically but are not valid operands; the
    /// parser rejects them with an unexpected-token error.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces between tokens.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
