//! Declarations and type specifiers.
//!
//! ```text
//! decl   = type var { "," var } [";"]
//! type   = ["."] base ["(" [param { "," param }] ")"]
//! param  = type name | "..."
//! var    = name ["=" (expr | "#" number | "{" stmts "}")]
//! local  = "local" type name ["=" expr] { "," name ["=" expr] } ";"
//! ```
//!
//! The closing `;` may be left out after a function body.

use qc_ir::{
    BaseType, Decl, Ident, Init, Param, Span, Stmt, StmtKind, Token, TokenKind, TypeSpec, VarDef,
};
use tracing::trace;

use crate::grammar::registry::{NAME, TYPE};
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_, '_> {
    /// Global declaration; `first` is the already consumed type keyword or `.`.
    pub(crate) fn parse_declaration(&mut self, first: Token) -> Result<Stmt, ParseError> {
        let start = first.span;
        let ty = self.parse_type_spec(first)?;
        self.declarators(start, ty, false)
    }

    /// `local` declaration; `keyword` is the consumed `local`.
    pub(crate) fn parse_local(&mut self, keyword: Token) -> Result<Stmt, ParseError> {
        let first = self.type_start()?;
        let ty = self.parse_type_spec(first)?;
        self.declarators(keyword.span, ty, true)
    }

    /// Consume the token that opens a type: a type keyword or `.`.
    fn type_start(&mut self) -> Result<Token, ParseError> {
        if self.cursor.check(".") || self.cursor.check(TYPE) {
            self.cursor.advance()
        } else {
            Err(ParseError::expected(TYPE, self.current()))
        }
    }

    fn parse_type_spec(&mut self, first: Token) -> Result<TypeSpec, ParseError> {
        self.guarded(|p| {
            let field = first.is_op(".");
            let start = first.span;
            let base_token = if field { p.cursor.expect(TYPE)? } else { first };
            let Some(base) = BaseType::from_keyword(&base_token.lexeme) else {
                return Err(ParseError::expected(TYPE, &base_token));
            };

            let mut span = start.merge(base_token.span);
            let params = match p.cursor.eat("(")? {
                Some(_) => {
                    let (params, close) = p.parse_params()?;
                    span = span.merge(close.span);
                    Some(params)
                }
                None => None,
            };

            Ok(TypeSpec {
                field,
                base,
                params,
                span,
            })
        })
    }

    /// Parameters after `(`, through the closing `)`.
    fn parse_params(&mut self) -> Result<(Vec<Param>, Token), ParseError> {
        let mut params = Vec::new();
        if !self.cursor.check(")") {
            loop {
                // `...` ends the list
                if let Some(dots) = self.cursor.eat("...")? {
                    params.push(Param::Variadic(dots.span));
                    break;
                }
                let first = self.type_start()?;
                let ty = self.parse_type_spec(first)?;
                let name = self.cursor.expect(NAME)?;
                params.push(Param::Named {
                    ty,
                    name: Ident::new(name.lexeme, name.span),
                });
                if self.cursor.eat(",")?.is_none() {
                    break;
                }
            }
        }
        let close = self.cursor.expect(")")?;
        Ok((params, close))
    }

    fn declarators(&mut self, start: Span, ty: TypeSpec, local: bool) -> Result<Stmt, ParseError> {
        let mut vars = Vec::new();
        let ends_with_body = loop {
            let name = self.cursor.expect(NAME)?;
            trace!(name = %name.lexeme, local, "declare");
            let name = Ident::new(name.lexeme, name.span);

            let (init, span) = if self.cursor.eat("=")?.is_some() {
                let (init, init_span) = self.initializer(local)?;
                (Some(init), name.span.merge(init_span))
            } else {
                (None, name.span)
            };
            let has_body = matches!(init, Some(Init::Body(_)));
            vars.push(VarDef { name, init, span });

            if self.cursor.eat(",")?.is_none() {
                break has_body;
            }
        };

        let end = if ends_with_body {
            match self.cursor.eat(";")? {
                Some(semi) => semi.span,
                None => vars.last().map_or(start, |var| var.span),
            }
        } else {
            self.cursor.expect(";")?.span
        };

        Ok(Stmt::new(
            StmtKind::Decl(Decl { ty, local, vars }),
            start.merge(end),
        ))
    }

    /// The value after `=`.
    fn initializer(&mut self, local: bool) -> Result<(Init, Span), ParseError> {
        if self.cursor.check("#") {
            if local {
                return self.error("a local cannot be bound to a builtin");
            }
            let hash = self.cursor.advance()?;
            let (number, span) = self.builtin_number()?;
            return Ok((Init::Builtin(number), hash.span.merge(span)));
        }

        if self.cursor.check("{") {
            if local {
                return self.error("a local cannot be initialized with a function body");
            }
            let open = self.cursor.advance()?;
            let body = self.parse_statements()?;
            let close = self.cursor.expect("}")?;
            return Ok((Init::Body(body), open.span.merge(close.span)));
        }

        let expr = self.parse_expression(0)?;
        let span = expr.span;
        Ok((Init::Expr(expr), span))
    }

    fn builtin_number(&mut self) -> Result<(u32, Span), ParseError> {
        if self.current().kind != TokenKind::Number {
            return self.error("expected a builtin number after `#`");
        }
        let token = self.cursor.advance()?;
        match token.lexeme.parse::<u32>() {
            Ok(number) => Ok((number, token.span)),
            Err(_) => Err(ParseError::at(
                ParseErrorKind::InvalidBuiltin {
                    text: token.lexeme.clone(),
                },
                &token,
            )),
        }
    }
}
