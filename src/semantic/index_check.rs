//! Array index typing
//!
//! A conservative, purely structural check that an index expression is safe
//! to treat as an integer. This is not type inference: name leaves fail only
//! when their declaration is explicitly float, and unresolved names pass.
//! The check returns a boolean; the checker decides whether a failure
//! becomes a reported violation.

use crate::ast::Expr;

use super::entry::SyType;
use super::scope::ScopeStack;

/// Whether `expr` is structurally integer-safe against the given scope
/// snapshot.
pub fn is_integer_index(expr: &Expr, scopes: &ScopeStack) -> bool {
    match expr {
        // a literal index must be a non-negative integer as written
        Expr::Literal { text, .. } => matches!(text.parse::<i32>(), Ok(value) if value >= 0),
        Expr::Paren { inner, .. } => is_integer_index(inner, scopes),
        Expr::Unary { operand, .. } => is_integer_index(operand, scopes),
        Expr::Binary { left, right, .. } => {
            is_integer_index(left, scopes) && is_integer_index(right, scopes)
        }
        Expr::Var { name, .. } | Expr::ArrayAccess { name, .. } => scopes
            .resolve(name)
            .map_or(true, |entry| entry.ty != SyType::Float),
        // calls are resolved against the global scope only
        Expr::Call { name, .. } => scopes
            .resolve_global(name)
            .map_or(false, |entry| entry.ty == SyType::Int),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Span, UnaryOp};
    use crate::semantic::entry::Entry;

    fn lit(text: &str) -> Expr {
        Expr::Literal {
            text: text.to_string(),
            span: Span::default(),
        }
    }

    fn var(name: &str) -> Expr {
        Expr::Var {
            name: name.to_string(),
            span: Span::default(),
        }
    }

    fn scopes() -> ScopeStack {
        let mut scopes = ScopeStack::new();
        scopes.push_scope();
        scopes.declare(Entry::variable("i", SyType::Int));
        scopes.declare(Entry::variable("f", SyType::Float));
        scopes.declare(Entry::function("geti", SyType::Int, vec![]));
        scopes.declare(Entry::function("getf", SyType::Float, vec![]));
        scopes
    }

    #[test]
    fn test_non_negative_integer_literal_passes() {
        let scopes = scopes();
        assert!(is_integer_index(&lit("3"), &scopes));
        assert!(!is_integer_index(&lit("2.5"), &scopes));
    }

    #[test]
    fn test_negative_literal_via_unary_still_recurses() {
        // structural check: unary minus recurses into a passing literal
        let scopes = scopes();
        let expr = Expr::Unary {
            op: UnaryOp::Minus,
            operand: Box::new(lit("1")),
            span: Span::default(),
        };
        assert!(is_integer_index(&expr, &scopes));
    }

    #[test]
    fn test_float_variable_fails_int_variable_passes() {
        let scopes = scopes();
        assert!(is_integer_index(&var("i"), &scopes));
        assert!(!is_integer_index(&var("f"), &scopes));
    }

    #[test]
    fn test_unresolved_name_conservatively_passes() {
        let scopes = scopes();
        assert!(is_integer_index(&var("mystery"), &scopes));
    }

    #[test]
    fn test_call_passes_only_for_global_int_function() {
        let scopes = scopes();
        let call = |name: &str| Expr::Call {
            name: name.to_string(),
            args: vec![],
            span: Span::default(),
        };
        assert!(is_integer_index(&call("geti"), &scopes));
        assert!(!is_integer_index(&call("getf"), &scopes));
        assert!(!is_integer_index(&call("unknown"), &scopes));
    }

    #[test]
    fn test_compound_expression_needs_every_operand() {
        let scopes = scopes();
        let ok = Expr::Binary {
            op: BinaryOp::Add,
            left: Box::new(var("i")),
            right: Box::new(lit("1")),
            span: Span::default(),
        };
        assert!(is_integer_index(&ok, &scopes));

        let bad = Expr::Binary {
            op: BinaryOp::Mul,
            left: Box::new(var("i")),
            right: Box::new(var("f")),
            span: Span::default(),
        };
        assert!(!is_integer_index(&bad, &scopes));
    }
}
