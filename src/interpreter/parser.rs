/// Core parsing logic.
///
/// Contains the precedence table and the precedence-climbing loop that folds
/// binary operator chains into AST nodes.
pub mod core;

/// Prefix expression parsing.
///
/// Handles everything that can start an expression: numeric literals,
/// parenthesized groups, and the unary prefix operators, plus the
/// implicit-multiplication rule for juxtaposed values.
pub mod unary;
