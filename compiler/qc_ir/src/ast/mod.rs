//! AST node types.
//!
//! # Module Structure
//!
//! - `mod.rs`: expressions, statements, and the `Module` root
//! - `operators.rs`: binary and unary operators
//! - `decl.rs`: declarations and type specifiers
//! - `sexp.rs`: S-expression rendering (`Display` impls)
//!
//! Invariant: the target of every [`ExprKind::Assign`] is a [`ExprKind::Name`]
//! or [`ExprKind::Member`]. The parser enforces this; nothing downstream needs
//! to re-check it.

mod decl;
mod operators;
mod sexp;

pub use decl::{BaseType, Decl, Init, Param, TypeSpec, VarDef};
pub use operators::{BinaryOp, UnaryOp};

use crate::Span;

/// An identifier occurrence with its own span (declared names, field names).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// Literal classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LitKind {
    Int,
    Float,
    String,
    Vector,
}

/// A literal value, kept as its source text.
///
/// Strings hold their unescaped contents; vectors hold the three components
/// separated by single spaces.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    pub kind: LitKind,
    pub value: String,
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    Literal(Literal),
    /// Variable reference
    Name(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `target = value`, or `target op= value` when `op` is set
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        op: Option<BinaryOp>,
    },
    /// `object.field`
    Member {
        object: Box<Expr>,
        field: Ident,
    },
    /// `callee(args...)`
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Whether this expression may appear on the left of an assignment.
    pub fn is_lvalue(&self) -> bool {
        matches!(self.kind, ExprKind::Name(_) | ExprKind::Member { .. })
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self.kind, ExprKind::Assign { .. })
    }

    pub fn is_call(&self) -> bool {
        matches!(self.kind, ExprKind::Call { .. })
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// Assignment or call terminated by `;`
    Expr(Expr),
    /// `{ ... }`, statements in source order
    Block(Vec<Stmt>),
    /// Global, field, or `local` declaration
    Decl(Decl),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },
    Return(Option<Expr>),
    /// A lone `;`
    Empty,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Parse result: top-level statements in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub statements: Vec<Stmt>,
}

impl Module {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Module { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
