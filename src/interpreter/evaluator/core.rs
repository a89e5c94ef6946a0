use crate::ast::{BinaryOperator, Expr, UnaryOperator};

/// Evaluates an expression tree and returns the resulting number.
///
/// This is a pure structural recursion: literals yield their value, unary
/// nodes apply identity or negation, and binary nodes apply standard IEEE-754
/// double arithmetic to their evaluated operands. Exponentiation uses
/// [`f64::powf`].
///
/// Arithmetic conditions are not errors. Division by zero yields an infinity
/// or NaN, and `powf` outside its real domain yields NaN; both propagate
/// through enclosing operations as ordinary values. All failure in this crate
/// is lexical or syntactic and has already been reported before a tree
/// reaches this function.
///
/// # Parameters
/// - `expr`: Expression tree to reduce.
///
/// # Returns
/// The computed value.
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number { value } => *value,

        Expr::UnaryOp { op, operand } => match op {
            UnaryOperator::Plus => evaluate(operand),
            UnaryOperator::Negate => -evaluate(operand),
        },

        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left);
            let right = evaluate(right);

            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
                BinaryOperator::Pow => left.powf(right),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::ast::{BinaryOperator, Expr, UnaryOperator};

    fn number(value: f64) -> Box<Expr> {
        Box::new(Expr::Number { value })
    }

    fn binary(left: Box<Expr>, op: BinaryOperator, right: Box<Expr>) -> Expr {
        Expr::BinaryOp { left, op, right }
    }

    #[test]
    fn arithmetic_reduces_structurally() {
        let expr = binary(Box::new(binary(number(2.0), BinaryOperator::Mul, number(3.0))),
                          BinaryOperator::Add,
                          number(4.0));
        assert_eq!(evaluate(&expr), 10.0);
    }

    #[test]
    fn unary_operators_apply_to_operand() {
        let positive = Expr::UnaryOp { op:      UnaryOperator::Plus,
                                       operand: number(7.0), };
        let negative = Expr::UnaryOp { op:      UnaryOperator::Negate,
                                       operand: number(7.0), };
        assert_eq!(evaluate(&positive), 7.0);
        assert_eq!(evaluate(&negative), -7.0);
    }

    #[test]
    fn division_by_zero_follows_ieee_754() {
        let inf = binary(number(1.0), BinaryOperator::Div, number(0.0));
        let neg_inf = binary(number(-1.0), BinaryOperator::Div, number(0.0));
        let nan = binary(number(0.0), BinaryOperator::Div, number(0.0));
        assert_eq!(evaluate(&inf), f64::INFINITY);
        assert_eq!(evaluate(&neg_inf), f64::NEG_INFINITY);
        assert!(evaluate(&nan).is_nan());
    }

    #[test]
    fn power_outside_real_domain_is_nan() {
        let expr = binary(number(-2.0), BinaryOperator::Pow, number(0.5));
        assert!(evaluate(&expr).is_nan());
    }
}
