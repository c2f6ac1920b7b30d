//! Array initializer flattening
//!
//! Expands a (possibly nested) brace initializer into the flat, row-major
//! element list of the target array, zero-padding omitted trailing elements
//! the way C aggregate initialization does, recursively across any number
//! of dimensions.

use crate::ast::InitVal;

use super::const_eval::eval_const_expr;

/// Flatten `init` against the resolved dimension vector, outermost first.
///
/// The result always has exactly `dims.iter().product()` elements, except
/// for an empty dimension vector, which yields an empty list. Leaf elements
/// are constant-folded; a leaf that fails to fold contributes 0.0 (the
/// declaration processor has already reported any scope violation inside
/// it).
pub fn flatten_initializer(init: &InitVal, dims: &[usize]) -> Vec<f32> {
    if dims.is_empty() {
        return Vec::new();
    }
    let total = dims.iter().product();
    flatten_level(init, dims, total)
}

fn flatten_level(init: &InitVal, dims: &[usize], total: usize) -> Vec<f32> {
    if dims.is_empty() {
        return Vec::new();
    }
    // innermost row size at this level
    let row = if dims[0] == 0 { 0 } else { total / dims[0] };

    // a bare expression where a brace group was expected acts as one leaf
    let elements: &[InitVal] = match init {
        InitVal::List { elements, .. } => elements,
        InitVal::Expr(_) => std::slice::from_ref(init),
    };

    let mut result = Vec::with_capacity(total);
    let mut current_row: Vec<f32> = Vec::new();
    for element in elements {
        match element {
            InitVal::Expr(expr) => {
                current_row.push(eval_const_expr(expr).unwrap_or(0.0));
            }
            InitVal::List { .. } => {
                // a nested group closes the partial row (an empty buffer
                // flushes nothing), then fills one whole sub-array of the
                // next dimension
                if !current_row.is_empty() {
                    if current_row.len() < row {
                        current_row.resize(row, 0.0);
                    }
                    result.append(&mut current_row);
                }
                result.extend(flatten_level(element, &dims[1..], row));
            }
        }
    }
    if !current_row.is_empty() {
        if current_row.len() < row {
            current_row.resize(row, 0.0);
        }
        result.append(&mut current_row);
    }
    if result.len() < total {
        result.resize(total, 0.0);
    }
    result
}
