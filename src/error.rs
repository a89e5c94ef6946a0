/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include lexical mistakes, unexpected tokens,
/// unbalanced parentheses, and input that continues past a complete
/// expression. Evaluation itself cannot fail: arithmetic conditions such as
/// division by zero follow IEEE-754 semantics and produce infinities or NaN
/// rather than errors.
pub mod parse_error;

pub use parse_error::ParseError;
