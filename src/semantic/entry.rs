//! Symbol table entries
//!
//! An [`Entry`] records one declared name: its type, const-ness, and exactly
//! one role (plain variable, array, or function). The role payload lives in
//! a tagged union so no entry can ever claim two roles at once.

use crate::ast::{BType, FuncType};

/// Declared type of a symbol. For a function entry this is the return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyType {
    Int,
    Float,
    Void,
}

impl From<BType> for SyType {
    fn from(btype: BType) -> Self {
        match btype {
            BType::Int => SyType::Int,
            BType::Float => SyType::Float,
        }
    }
}

impl From<FuncType> for SyType {
    fn from(func_type: FuncType) -> Self {
        match func_type {
            FuncType::Void => SyType::Void,
            FuncType::Int => SyType::Int,
            FuncType::Float => SyType::Float,
        }
    }
}

/// Role-specific payload of an entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// Plain variable; `value` is set iff the declaration was `const` and
    /// its initializer folded
    Variable { value: Option<f32> },
    /// Array; `values` is the flat element list, present iff `const`
    Array {
        dims: Vec<usize>,
        values: Option<Vec<f32>>,
    },
    /// Function; parameters are variable or array entries, never functions
    Function { params: Vec<Entry> },
}

/// One symbol table value
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub ty: SyType,
    pub is_const: bool,
    pub kind: EntryKind,
}

impl Entry {
    /// Plain non-constant variable
    pub fn variable(name: impl Into<String>, ty: SyType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_const: false,
            kind: EntryKind::Variable { value: None },
        }
    }

    /// Plain constant variable with its folded value, if the fold succeeded
    pub fn constant(name: impl Into<String>, ty: SyType, value: Option<f32>) -> Self {
        Self {
            name: name.into(),
            ty,
            is_const: true,
            kind: EntryKind::Variable { value },
        }
    }

    /// Array with resolved dimension sizes; `values` carries the flattened
    /// element list for constant arrays
    pub fn array(
        name: impl Into<String>,
        ty: SyType,
        dims: Vec<usize>,
        is_const: bool,
        values: Option<Vec<f32>>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            is_const,
            kind: EntryKind::Array { dims, values },
        }
    }

    /// Function signature; `ty` is the return type
    pub fn function(name: impl Into<String>, return_type: SyType, params: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            ty: return_type,
            is_const: false,
            kind: EntryKind::Function { params },
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, EntryKind::Variable { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, EntryKind::Array { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, EntryKind::Function { .. })
    }

    /// Folded constant value of a const scalar
    pub fn constant_value(&self) -> Option<f32> {
        match &self.kind {
            EntryKind::Variable { value } => *value,
            _ => None,
        }
    }

    /// Dimension sizes of an array entry
    pub fn array_dims(&self) -> Option<&[usize]> {
        match &self.kind {
            EntryKind::Array { dims, .. } => Some(dims),
            _ => None,
        }
    }

    /// Flat constant element list of a const array
    pub fn array_values(&self) -> Option<&[f32]> {
        match &self.kind {
            EntryKind::Array { values, .. } => values.as_deref(),
            _ => None,
        }
    }

    /// Formal parameter entries of a function
    pub fn function_params(&self) -> Option<&[Entry]> {
        match &self.kind {
            EntryKind::Function { params } => Some(params),
            _ => None,
        }
    }
}
