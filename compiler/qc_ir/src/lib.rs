//! QC IR - shared front-end types
//!
//! This crate contains the core data structures for the QuakeC front end:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes (Expr, Stmt, Decl, Module)
//! - A read-only visitor over the AST
//!
//! Every AST node owns its children (`Box`/`Vec`), so a parsed [`Module`]
//! is a self-contained value handed to the caller. Two parses of the same
//! source compare equal with `==`.

pub mod ast;
pub mod span;
mod token;
pub mod visitor;

pub use ast::{
    BaseType, BinaryOp, Decl, Expr, ExprKind, Ident, Init, LitKind, Literal, Module, Param, Stmt,
    StmtKind, TypeSpec, UnaryOp, VarDef,
};
pub use span::Span;
pub use token::{Token, TokenKind, MAX_IDENT_LEN, TYPE_KEYWORDS};
