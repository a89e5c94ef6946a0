/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and reduces it to a single `f64`. It is a
/// pure structural recursion with no state and no side effects; arithmetic
/// conditions such as division by zero follow IEEE-754 semantics instead of
/// raising errors.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Propagates infinities and NaN as ordinary values.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to a meaningful element such as a number,
/// operator, or parenthesis. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles numeric literals, identifiers, operators, and parentheses.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the structure of the expression, using precedence
/// climbing with an implicit-multiplication rule.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with offsets.
/// - Supports arithmetic operators, grouping, and juxtaposition.
pub mod parser;
