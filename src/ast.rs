/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// unary prefix operations, and binary operations. Each variant owns its
/// children exclusively; a tree is built strictly bottom-up by the parser and
/// consumed by a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// A unary prefix operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// A unary prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus; evaluates to its operand unchanged.
    Plus,
    /// Numeric negation.
    Negate,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`), written explicitly or by juxtaposition.
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}
