//! Syntax tree definitions for SysY
//!
//! These are the node shapes the parser hands to the semantic pass. Every
//! node carries a [`Span`] so violations can be reported against the exact
//! source region they were raised on.

/// A point in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 0-based column number
    pub column: usize,
    /// Byte offset into the source text
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A source region, start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A complete SysY compilation unit
#[derive(Debug, Clone)]
pub struct CompUnit {
    pub items: Vec<GlobalItem>,
    pub span: Span,
}

/// Top-level items, in source order
#[derive(Debug, Clone)]
pub enum GlobalItem {
    Decl(Decl),
    Func(FuncDef),
}

/// Base type keyword of a declaration or formal parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BType {
    Int,
    Float,
}

/// Return type keyword of a function definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncType {
    Void,
    Int,
    Float,
}

/// Constant or variable declaration: `const int a = 1, b[2] = {1};`
///
/// One declaration yields one or more named declarators.
#[derive(Debug, Clone)]
pub struct Decl {
    pub is_const: bool,
    pub base: BType,
    pub defs: Vec<VarDef>,
    pub span: Span,
}

/// A single declarator: name, optional dimension specifiers, optional
/// initializer
#[derive(Debug, Clone)]
pub struct VarDef {
    pub name: String,
    pub dims: Vec<Expr>,
    pub init: Option<InitVal>,
    pub span: Span,
}

/// Initializer: a bare expression or a (possibly nested) brace group
#[derive(Debug, Clone)]
pub enum InitVal {
    Expr(Expr),
    List { elements: Vec<InitVal>, span: Span },
}

/// Function definition
#[derive(Debug, Clone)]
pub struct FuncDef {
    pub name: String,
    pub func_type: FuncType,
    pub params: Vec<FuncParam>,
    pub body: Block,
    pub span: Span,
}

/// Formal parameter
///
/// `dims` is `None` for a scalar parameter. `Some(extra)` marks an array
/// parameter whose first dimension is omitted (`int a[]`, `int a[][3]`),
/// with `extra` holding the dimension expressions after the empty bracket.
#[derive(Debug, Clone)]
pub struct FuncParam {
    pub name: String,
    pub btype: BType,
    pub dims: Option<Vec<Expr>>,
    pub span: Span,
}

/// Brace-delimited block of items
#[derive(Debug, Clone)]
pub struct Block {
    pub items: Vec<BlockItem>,
    pub span: Span,
}

/// One item inside a block
#[derive(Debug, Clone)]
pub enum BlockItem {
    Decl(Decl),
    Stmt(Stmt),
}

/// Statement kinds
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `target = value;`
    Assign {
        target: Expr,
        value: Expr,
        span: Span,
    },
    /// Bare expression statement; `None` is the empty statement `;`
    Expr(Option<Expr>),
    /// Nested block
    Block(Block),
    If {
        cond: Expr,
        then: Box<Stmt>,
        else_: Option<Box<Stmt>>,
        span: Span,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    Break(Span),
    Continue(Span),
    Return { value: Option<Expr>, span: Span },
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

/// Binary operators
///
/// The relational and logical operators appear only in conditions; they are
/// opaque to constant folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

/// Expression kinds
#[derive(Debug, Clone)]
pub enum Expr {
    /// Numeric literal, kept as raw token text. The constant evaluator and
    /// the index validator parse it themselves; a parse failure is a
    /// meaningful outcome, not a defect.
    Literal { text: String, span: Span },
    /// Scalar variable reference
    Var { name: String, span: Span },
    /// Array element access: `name[i][j]`
    ArrayAccess {
        name: String,
        indices: Vec<Expr>,
        span: Span,
    },
    /// Function call: `name(args)`
    Call {
        name: String,
        args: Vec<Expr>,
        span: Span,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    /// Parenthesized expression
    Paren { inner: Box<Expr>, span: Span },
}

impl Expr {
    /// The source region this expression covers
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::Var { span, .. }
            | Expr::ArrayAccess { span, .. }
            | Expr::Call { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Paren { span, .. } => *span,
        }
    }
}
