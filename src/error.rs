//! Semantic error model and reporting
//!
//! Violations are plain data: a kind from a fixed taxonomy plus the source
//! span they were raised on. The reporter is an append-only sink local to
//! one checking run; rendering is presentation only and happens at the end.

use std::fmt;

use colored::Colorize;

use crate::ast::Span;

/// The fixed taxonomy of semantic error kinds.
///
/// `FuncParamsNotMatch` and `FuncReturnTypeNotMatch` are reserved: the
/// checker declares them but no pass raises them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Use of an undefined variable
    VarUnknown = 1,
    /// Redefinition of a name in the current scope, including duplicate
    /// formal parameters
    VarDuplicated,
    /// Use of an undefined function
    FuncUnknown,
    /// Redefinition of a function
    FuncDuplicated,
    /// Call arguments do not match the declared formal parameters
    FuncParamsNotMatch,
    /// Return statement value does not match the declared return type
    FuncReturnTypeNotMatch,
    /// Array index is not an integer expression
    ArrayIndexNotInt,
    /// `break` outside of any loop
    BreakNotInLoop,
    /// `continue` outside of any loop
    ContinueNotInLoop,
    /// Subscript access on a non-array variable
    VisitVariableError,
}

impl ErrorKind {
    /// Stable numeric code, 1 through 10 in taxonomy order
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable description of the violation
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::VarUnknown => "use of undefined variable",
            ErrorKind::VarDuplicated => "name already defined in this scope",
            ErrorKind::FuncUnknown => "use of undefined function",
            ErrorKind::FuncDuplicated => "function already defined",
            ErrorKind::FuncParamsNotMatch => {
                "call arguments do not match the function's formal parameters"
            }
            ErrorKind::FuncReturnTypeNotMatch => {
                "return value does not match the function's return type"
            }
            ErrorKind::ArrayIndexNotInt => "array index is not an integer",
            ErrorKind::BreakNotInLoop => "break statement outside of a loop",
            ErrorKind::ContinueNotInLoop => "continue statement outside of a loop",
            ErrorKind::VisitVariableError => "subscript access on a non-array variable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One reported violation: taxonomy kind plus source span.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub span: Span,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Append-only sink for one checking run.
///
/// Insertion order is detection order. Reusing a reporter across runs
/// requires an explicit [`ErrorReporter::reset`].
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<ErrorInfo>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one violation. Never fails.
    pub fn report(&mut self, error: ErrorInfo) {
        self.errors.push(error);
    }

    /// All violations reported so far, in detection order
    pub fn errors(&self) -> &[ErrorInfo] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Discard accumulated violations so the reporter can serve another run
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Render every violation against the source text it was raised on,
    /// one entry per line: kind, start/end positions, and the exact source
    /// substring the span covers.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        for error in &self.errors {
            let span = error.span;
            let snippet = source.get(span.start.offset..span.end.offset).unwrap_or("");
            out.push_str(&format!(
                "{}{}{}{} {}\n  {} {}:{}..{}:{} {:?}\n",
                "error[".red().bold(),
                error.kind.to_string().red().bold(),
                "]".red().bold(),
                ":".bold(),
                error.kind.description(),
                "-->".blue().bold(),
                span.start.line,
                span.start.column,
                span.end.line,
                span.end.column,
                snippet,
            ));
        }
        out
    }
}
