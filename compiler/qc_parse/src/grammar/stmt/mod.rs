//! Statements and blocks.
//!
//! A statement starts either with a symbol that has a statement behavior
//! (`{`, a type keyword, `if`, ...) or with an expression, which must be an
//! assignment or a call and is terminated by `;`.

use qc_ir::{Expr, Stmt, StmtKind, Token};
use tracing::trace;

use crate::grammar::registry::{Std, END};
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_, '_> {
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.guarded(|p| {
            let first = p.current();
            trace!(
                token = %first.lexeme,
                line = first.line,
                column = first.column,
                "parse_statement"
            );

            if let Some(std) = p.symbol_for(first)?.std() {
                let token = p.cursor.advance()?;
                return p.apply_std(std, token);
            }

            let start = p.current().clone();
            let expr = p.parse_expression(0)?;
            if !(expr.is_assignment() || expr.is_call()) {
                return Err(ParseError::new(
                    ParseErrorKind::BadExpressionStatement,
                    expr.span,
                    start.line,
                    start.column,
                ));
            }
            let semi = p.cursor.expect(";")?;
            let span = expr.span.merge(semi.span);
            Ok(Stmt::new(StmtKind::Expr(expr), span))
        })
    }

    /// Parse statements until `}` or end of input.
    pub fn parse_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !(self.cursor.check("}") || self.cursor.check(END)) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parse a `{ ... }` block.
    pub fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let open = self.cursor.expect("{")?;
        self.block_body(&open)
    }

    fn apply_std(&mut self, std: Std, token: Token) -> Result<Stmt, ParseError> {
        match std {
            Std::Block => self.block_body(&token),
            Std::Declaration => self.parse_declaration(token),
            Std::Local => self.parse_local(token),
            Std::If => self.parse_if(&token),
            Std::While => self.parse_while(&token),
            Std::DoWhile => self.parse_do_while(&token),
            Std::Return => self.parse_return(&token),
            Std::Empty => Ok(Stmt::new(StmtKind::Empty, token.span)),
        }
    }

    /// Statements after an already consumed `{`, through the closing `}`.
    fn block_body(&mut self, open: &Token) -> Result<Stmt, ParseError> {
        let statements = self.parse_statements()?;
        let close = self.cursor.expect("}")?;
        Ok(Stmt::new(
            StmtKind::Block(statements),
            open.span.merge(close.span),
        ))
    }

    /// `( expr )` as used by `if`, `while` and `do`.
    fn parenthesized_condition(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect("(")?;
        let cond = self.parse_expression(0)?;
        self.cursor.expect(")")?;
        Ok(cond)
    }

    fn parse_if(&mut self, keyword: &Token) -> Result<Stmt, ParseError> {
        let cond = self.parenthesized_condition()?;
        let then_branch = self.parse_statement()?;
        let mut span = keyword.span.merge(then_branch.span);

        let else_branch = if self.cursor.eat("else")?.is_some() {
            let branch = self.parse_statement()?;
            span = span.merge(branch.span);
            Some(Box::new(branch))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            span,
        ))
    }

    fn parse_while(&mut self, keyword: &Token) -> Result<Stmt, ParseError> {
        let cond = self.parenthesized_condition()?;
        let body = self.parse_statement()?;
        let span = keyword.span.merge(body.span);
        Ok(Stmt::new(
            StmtKind::While {
                cond,
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_do_while(&mut self, keyword: &Token) -> Result<Stmt, ParseError> {
        let body = self.parse_statement()?;
        self.cursor.expect("while")?;
        let cond = self.parenthesized_condition()?;
        let semi = self.cursor.expect(";")?;
        Ok(Stmt::new(
            StmtKind::DoWhile {
                body: Box::new(body),
                cond,
            },
            keyword.span.merge(semi.span),
        ))
    }

    fn parse_return(&mut self, keyword: &Token) -> Result<Stmt, ParseError> {
        let value = if self.cursor.check(";") {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        let semi = self.cursor.expect(";")?;
        Ok(Stmt::new(
            StmtKind::Return(value),
            keyword.span.merge(semi.span),
        ))
    }
}
