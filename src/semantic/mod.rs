//! Static semantic checking for SysY
//!
//! The checker walks a parsed compilation unit depth-first, maintaining the
//! scope stack, folding constants, flattening array initializers, and
//! forwarding every violation to the error reporter. Violations never stop
//! the walk; one run surfaces as many independent problems as possible.

pub mod builtins;
pub mod const_eval;
pub mod entry;
pub mod index_check;
pub mod initializer;
pub mod scope;

pub use entry::{Entry, EntryKind, SyType};
pub use scope::ScopeStack;

use crate::ast::{
    Block, BlockItem, CompUnit, Decl, Expr, FuncDef, FuncParam, GlobalItem, InitVal, Span, Stmt,
};
use crate::error::{ErrorInfo, ErrorKind, ErrorReporter};

use const_eval::eval_const_expr;
use index_check::is_integer_index;
use initializer::flatten_initializer;

/// How a name used in an expression resolved
enum Resolution {
    Missing,
    Variable,
    Array,
    Function,
}

/// The orchestrating tree walker.
///
/// One checker instance holds exactly one scope stack representing exactly
/// one compilation unit's walk; it is not reentrant and must not be shared
/// between traversals.
#[derive(Debug, Default)]
pub struct SemanticChecker {
    scopes: ScopeStack,
    reporter: ErrorReporter,
    loop_depth: usize,
    block_depth: usize,
}

impl SemanticChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Violations reported so far, in detection order
    pub fn errors(&self) -> &[ErrorInfo] {
        self.reporter.errors()
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    pub fn into_reporter(self) -> ErrorReporter {
        self.reporter
    }

    /// Check one compilation unit.
    ///
    /// Global declarations are processed first, then every function
    /// signature is registered, then every body is walked, so a body may
    /// call a function defined later in the source.
    ///
    /// Panics if the scope stack does not return to zero depth afterwards:
    /// that is a traversal defect, never a property of the input.
    pub fn check(&mut self, unit: &CompUnit) {
        self.scopes.push_scope();
        for entry in builtins::BUILTIN_ENTRIES.values() {
            self.scopes.declare(entry.clone());
        }

        for item in &unit.items {
            if let GlobalItem::Decl(decl) = item {
                self.check_decl(decl);
            }
        }

        let mut signatures = Vec::new();
        for item in &unit.items {
            if let GlobalItem::Func(func) = item {
                signatures.push(self.declare_function(func));
            }
        }

        let mut signatures = signatures.into_iter();
        for item in &unit.items {
            if let GlobalItem::Func(func) = item {
                let params = signatures.next().unwrap_or_default();
                self.check_function_body(func, params);
            }
        }

        self.scopes.pop_scope();
        assert!(
            self.scopes.is_empty(),
            "scope stack unbalanced after compilation unit walk (depth {})",
            self.scopes.depth()
        );
    }

    /// Build a function's signature entry and declare it in the global
    /// scope. Returns the formal-parameter entries the body walk will
    /// declare, whether or not the signature itself was accepted.
    fn declare_function(&mut self, func: &FuncDef) -> Vec<Entry> {
        let mut params = Vec::with_capacity(func.params.len());
        let mut duplicated = false;
        for param in &func.params {
            if params.iter().any(|p: &Entry| p.name == param.name) {
                self.report(ErrorKind::VarDuplicated, param.span);
                duplicated = true;
                continue;
            }
            params.push(self.param_entry(param));
        }
        // one duplicate formal poisons the whole parameter list
        if duplicated {
            params.clear();
        }

        let entry = Entry::function(func.name.clone(), SyType::from(func.func_type), params.clone());
        if !self.scopes.declare(entry) {
            self.report(ErrorKind::FuncDuplicated, func.span);
        }
        params
    }

    /// Translate one formal parameter to a symbol table entry.
    ///
    /// An array formal's omitted first dimension is recorded as 0; any
    /// further dimensions are constant-folded like declaration dimensions.
    fn param_entry(&mut self, param: &FuncParam) -> Entry {
        let ty = SyType::from(param.btype);
        match &param.dims {
            None => Entry::variable(param.name.clone(), ty),
            Some(extra) => {
                let mut dims = vec![0];
                dims.extend(extra.iter().map(|dim| self.resolve_dimension(dim)));
                Entry::array(param.name.clone(), ty, dims, false, None)
            }
        }
    }

    /// Walk a function body: the parameter scope doubles as the scope of
    /// the function's own top-level block.
    fn check_function_body(&mut self, func: &FuncDef, params: Vec<Entry>) {
        self.scopes.push_scope();
        for param in params {
            // duplicates were already reported when the signature was built
            self.scopes.declare(param);
        }
        self.block_depth = 0;
        self.check_block(&func.body);
        self.scopes.pop_scope();
    }

    /// Walk a block. Only blocks nested below a function's top-level block
    /// get a scope of their own; the block counter tells them apart.
    fn check_block(&mut self, block: &Block) {
        self.block_depth += 1;
        let nested = self.block_depth > 1;
        if nested {
            self.scopes.push_scope();
        }
        for item in &block.items {
            match item {
                BlockItem::Decl(decl) => self.check_decl(decl),
                BlockItem::Stmt(stmt) => self.check_stmt(stmt),
            }
        }
        if nested {
            self.scopes.pop_scope();
        }
        self.block_depth -= 1;
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign { target, value, .. } => {
                self.check_expr(target);
                self.check_expr(value);
            }
            Stmt::Expr(expr) => {
                if let Some(expr) = expr {
                    self.check_expr(expr);
                }
            }
            Stmt::Block(block) => self.check_block(block),
            Stmt::If {
                cond, then, else_, ..
            } => {
                self.check_expr(cond);
                self.check_stmt(then);
                if let Some(else_) = else_ {
                    self.check_stmt(else_);
                }
            }
            Stmt::While { cond, body, .. } => {
                self.check_expr(cond);
                self.loop_depth += 1;
                self.check_stmt(body);
                self.loop_depth -= 1;
            }
            Stmt::Break(span) => {
                if self.loop_depth == 0 {
                    self.report(ErrorKind::BreakNotInLoop, *span);
                }
            }
            Stmt::Continue(span) => {
                if self.loop_depth == 0 {
                    self.report(ErrorKind::ContinueNotInLoop, *span);
                }
            }
            Stmt::Return { value, .. } => {
                // return-type matching is a reserved taxonomy member with
                // no checking pass behind it
                if let Some(value) = value {
                    self.check_expr(value);
                }
            }
        }
    }

    /// Process one declaration into the current scope, constant or not,
    /// global or local.
    fn check_decl(&mut self, decl: &Decl) {
        let ty = SyType::from(decl.base);
        for def in &decl.defs {
            if self.scopes.current_contains(&def.name) {
                self.report(ErrorKind::VarDuplicated, def.span);
                // skip this declarator, keep going with the rest
                continue;
            }

            let dims: Vec<usize> = def
                .dims
                .iter()
                .map(|dim| self.resolve_dimension(dim))
                .collect();

            let entry = if dims.is_empty() {
                if decl.is_const {
                    let value = match &def.init {
                        Some(InitVal::Expr(expr)) => eval_const_expr(expr),
                        _ => None,
                    };
                    Entry::constant(def.name.clone(), ty, value)
                } else {
                    Entry::variable(def.name.clone(), ty)
                }
            } else {
                let values = if decl.is_const {
                    Some(match &def.init {
                        Some(init) => flatten_initializer(init, &dims),
                        None => vec![0.0; dims.iter().product()],
                    })
                } else {
                    None
                };
                Entry::array(def.name.clone(), ty, dims, decl.is_const, values)
            };
            self.scopes.declare(entry);

            // dimensions and initializers are walked after declaring, so an
            // initializer may reference the name it initializes
            for dim in &def.dims {
                self.check_expr(dim);
            }
            if let Some(init) = &def.init {
                self.check_init(init);
            }
        }
    }

    fn check_init(&mut self, init: &InitVal) {
        match init {
            InitVal::Expr(expr) => self.check_expr(expr),
            InitVal::List { elements, .. } => {
                for element in elements {
                    self.check_init(element);
                }
            }
        }
    }

    fn resolve(&self, name: &str) -> Resolution {
        match self.scopes.resolve(name) {
            None => Resolution::Missing,
            Some(entry) if entry.is_array() => Resolution::Array,
            Some(entry) if entry.is_function() => Resolution::Function,
            Some(_) => Resolution::Variable,
        }
    }

    fn check_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal { .. } => {}
            Expr::Paren { inner, .. } => self.check_expr(inner),
            Expr::Unary { operand, .. } => self.check_expr(operand),
            Expr::Binary { left, right, .. } => {
                self.check_expr(left);
                self.check_expr(right);
            }
            Expr::Var { name, span } => {
                // only a plain variable may be referenced as a scalar; an
                // array or function name used this way is unknown-variable
                if !matches!(self.resolve(name), Resolution::Variable) {
                    self.report(ErrorKind::VarUnknown, *span);
                }
            }
            Expr::ArrayAccess {
                name,
                indices,
                span,
            } => {
                match self.resolve(name) {
                    Resolution::Missing => self.report(ErrorKind::VarUnknown, *span),
                    Resolution::Array => {
                        let all_int = indices
                            .iter()
                            .all(|index| is_integer_index(index, &self.scopes));
                        if !all_int {
                            self.report(ErrorKind::ArrayIndexNotInt, *span);
                        }
                    }
                    Resolution::Variable | Resolution::Function => {
                        self.report(ErrorKind::VisitVariableError, *span);
                    }
                }
                for index in indices {
                    self.check_expr(index);
                }
            }
            Expr::Call { name, args, span } => {
                // the first match in any scope decides: a closer non-function
                // declaration makes the call unresolvable, while a wholly
                // undeclared name raises nothing here
                match self.resolve(name) {
                    Resolution::Variable | Resolution::Array => {
                        self.report(ErrorKind::FuncUnknown, *span);
                    }
                    Resolution::Function | Resolution::Missing => {}
                }
                for arg in args {
                    self.check_expr(arg);
                }
            }
        }
    }

    /// Fold one dimension specifier and truncate to a size. Dimension sizes
    /// are compile-time constants by language rule; an unevaluable or
    /// negative fold is recorded as 0.
    fn resolve_dimension(&mut self, dim: &Expr) -> usize {
        match eval_const_expr(dim) {
            Some(value) if value >= 0.0 => value as usize,
            _ => 0,
        }
    }

    fn report(&mut self, kind: ErrorKind, span: Span) {
        self.reporter.report(ErrorInfo::new(kind, span));
    }
}
