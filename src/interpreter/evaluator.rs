/// Core evaluation logic for expressions.
///
/// Contains the structural reduction of an AST to its numeric result.
pub mod core;
