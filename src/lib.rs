//! SysY semantic analysis
//!
//! The static semantic pass of a SysY front end: scoping and type legality
//! checks over an already-parsed syntax tree, constant folding for
//! declarations and array dimensions, and row-major flattening of nested
//! array initializers. Lexing, parsing and code generation live elsewhere;
//! this crate consumes the tree and produces an ordered list of violations.

pub mod ast;
pub mod error;
pub mod semantic;

pub use error::{ErrorInfo, ErrorKind, ErrorReporter};
pub use semantic::{Entry, ScopeStack, SemanticChecker, SyType};
