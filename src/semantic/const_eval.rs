//! Constant expression evaluation
//!
//! Compile-time folding of expressions built from numeric literals, unary
//! plus/minus, parentheses, and the arithmetic binary operators, over `f32`
//! (integer constants are floats with a zero fractional part by language
//! convention). Failure propagates by conjunction: one unevaluable
//! sub-expression collapses the whole fold.

use crate::ast::{BinaryOp, Expr, UnaryOp};

/// Divisors and modulo operands closer to zero than this are treated as zero
const NEAR_ZERO: f32 = 1e-4;

/// Fold a constant expression, `None` if it is not evaluable.
///
/// Not evaluable: a literal that fails to parse, division or modulo by a
/// near-zero divisor, modulo with a non-integral operand, or any node
/// outside the constant-expression forms (names, calls, conditions).
pub fn eval_const_expr(expr: &Expr) -> Option<f32> {
    match expr {
        Expr::Literal { text, .. } => text.parse::<f32>().ok(),
        Expr::Paren { inner, .. } => eval_const_expr(inner),
        Expr::Unary { op, operand, .. } => {
            let value = eval_const_expr(operand)?;
            match op {
                UnaryOp::Plus => Some(value),
                UnaryOp::Minus => Some(-value),
                UnaryOp::Not => None,
            }
        }
        Expr::Binary {
            op, left, right, ..
        } => {
            let lhs = eval_const_expr(left)?;
            let rhs = eval_const_expr(right)?;
            match op {
                BinaryOp::Add => Some(lhs + rhs),
                BinaryOp::Sub => Some(lhs - rhs),
                BinaryOp::Mul => Some(lhs * rhs),
                BinaryOp::Div => {
                    if rhs.abs() < NEAR_ZERO {
                        None
                    } else {
                        Some(lhs / rhs)
                    }
                }
                BinaryOp::Mod => {
                    if rhs.abs() < NEAR_ZERO || !is_integral(lhs) || !is_integral(rhs) {
                        None
                    } else {
                        Some(lhs % rhs)
                    }
                }
                _ => None,
            }
        }
        Expr::Var { .. } | Expr::ArrayAccess { .. } | Expr::Call { .. } => None,
    }
}

fn is_integral(value: f32) -> bool {
    (value - value.trunc()).abs() < NEAR_ZERO
}
