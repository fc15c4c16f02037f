//! AST Visitor Pattern
//!
//! A single read-only `Visitor` trait. Default implementations call the
//! `walk_*` functions, which traverse children in source order. Override
//! `visit_*` methods to add behavior at specific nodes.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if expr.is_call() {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{Decl, Expr, ExprKind, Init, Module, Stmt, StmtKind};

pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_decl(&mut self, decl: &'ast Decl) {
        walk_decl(self, decl);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for stmt in &module.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Expr(expr) | StmtKind::Return(Some(expr)) => visitor.visit_expr(expr),
        StmtKind::Block(statements) => {
            for stmt in statements {
                visitor.visit_stmt(stmt);
            }
        }
        StmtKind::Decl(decl) => visitor.visit_decl(decl),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(cond);
            visitor.visit_stmt(then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(else_branch);
            }
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond);
            visitor.visit_stmt(body);
        }
        StmtKind::DoWhile { body, cond } => {
            visitor.visit_stmt(body);
            visitor.visit_expr(cond);
        }
        StmtKind::Return(None) | StmtKind::Empty => {}
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast Decl) {
    for var in &decl.vars {
        match &var.init {
            Some(Init::Expr(expr)) => visitor.visit_expr(expr),
            Some(Init::Body(statements)) => {
                for stmt in statements {
                    visitor.visit_stmt(stmt);
                }
            }
            Some(Init::Builtin(_)) | None => {}
        }
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Literal(_) | ExprKind::Name(_) => {}
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        ExprKind::Assign { target, value, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        ExprKind::Member { object, .. } => visitor.visit_expr(object),
        ExprKind::Call { callee, args } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Ident, LitKind, Literal};
    use crate::Span;

    #[derive(Default)]
    struct NameCollector<'ast> {
        names: Vec<&'ast str>,
    }

    impl<'ast> Visitor<'ast> for NameCollector<'ast> {
        fn visit_expr(&mut self, expr: &'ast Expr) {
            if let ExprKind::Name(name) = &expr.kind {
                self.names.push(name);
            }
            walk_expr(self, expr);
        }
    }

    #[test]
    fn test_walk_visits_in_source_order() {
        let call = Expr::new(
            ExprKind::Call {
                callee: Box::new(Expr::new(ExprKind::Name("f".into()), Span::DUMMY)),
                args: vec![
                    Expr::new(ExprKind::Name("a".into()), Span::DUMMY),
                    Expr::new(
                        ExprKind::Member {
                            object: Box::new(Expr::new(ExprKind::Name("b".into()), Span::DUMMY)),
                            field: Ident::new("c", Span::DUMMY),
                        },
                        Span::DUMMY,
                    ),
                    Expr::new(
                        ExprKind::Literal(Literal {
                            kind: LitKind::Int,
                            value: "1".into(),
                        }),
                        Span::DUMMY,
                    ),
                ],
            },
            Span::DUMMY,
        );
        let module = Module::new(vec![
            Stmt::new(StmtKind::Expr(call), Span::DUMMY),
            Stmt::new(
                StmtKind::Return(Some(Expr::new(ExprKind::Name("d".into()), Span::DUMMY))),
                Span::DUMMY,
            ),
        ]);

        let mut collector = NameCollector::default();
        collector.visit_module(&module);

        // Field names are not expressions and are not visited
        assert_eq!(collector.names, vec!["f", "a", "b", "d"]);
    }
}
