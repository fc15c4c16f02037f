//! S-expression rendering.
//!
//! `Display` on AST nodes prints a compact, fully parenthesised form:
//!
//! ```text
//! a = b.c + 1;      =>  (= a (+ (. b c) 1))
//! if (x) f();       =>  (if x (call f))
//! float y = 2;      =>  (decl float (y 2))
//! ```
//!
//! Used by `qcc parse` and throughout the parser tests.

use std::fmt::{self, Display, Formatter};

use super::{
    BinaryOp, Decl, Expr, ExprKind, Init, LitKind, Literal, Module, Param, Stmt, StmtKind,
    TypeSpec,
};

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            LitKind::Int | LitKind::Float => write!(f, "{}", self.value),
            LitKind::String => write!(f, "{:?}", self.value),
            LitKind::Vector => write!(f, "'{}'", self.value),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(lit) => write!(f, "{lit}"),
            ExprKind::Name(name) => write!(f, "{name}"),
            ExprKind::Unary { op, operand } => write!(f, "({} {operand})", op.as_symbol()),
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            ExprKind::Assign { target, value, op } => {
                let symbol = (*op).and_then(BinaryOp::compound_symbol).unwrap_or("=");
                write!(f, "({symbol} {target} {value})")
            }
            ExprKind::Member { object, field } => write!(f, "(. {object} {})", field.name),
            ExprKind::Call { callee, args } => {
                write!(f, "(call {callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.field {
            write!(f, ".")?;
        }
        write!(f, "{}", self.base.keyword())?;
        if let Some(params) = &self.params {
            write!(f, "(")?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Param::Named { ty, name } => write!(f, "{ty} {}", name.name),
            Param::Variadic(_) => write!(f, "..."),
        }
    }
}

impl Display for Init {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Init::Expr(expr) => write!(f, "{expr}"),
            Init::Builtin(number) => write!(f, "#{number}"),
            Init::Body(statements) => write_block(f, statements),
        }
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let head = if self.local { "local" } else { "decl" };
        write!(f, "({head} {}", self.ty)?;
        for var in &self.vars {
            match &var.init {
                Some(init) => write!(f, " ({} {init})", var.name.name)?,
                None => write!(f, " {}", var.name.name)?,
            }
        }
        write!(f, ")")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Expr(expr) => write!(f, "{expr}"),
            StmtKind::Block(statements) => write_block(f, statements),
            StmtKind::Decl(decl) => write!(f, "{decl}"),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {cond} {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {else_branch}")?;
                }
                write!(f, ")")
            }
            StmtKind::While { cond, body } => write!(f, "(while {cond} {body})"),
            StmtKind::DoWhile { body, cond } => write!(f, "(do {body} {cond})"),
            StmtKind::Return(Some(value)) => write!(f, "(return {value})"),
            StmtKind::Return(None) => write!(f, "(return)"),
            StmtKind::Empty => write!(f, "(;)"),
        }
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

fn write_block(f: &mut Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    write!(f, "(block")?;
    for stmt in statements {
        write!(f, " {stmt}")?;
    }
    write!(f, ")")
}
