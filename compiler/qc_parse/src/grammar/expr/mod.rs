//! Expression engine.
//!
//! Precedence climbing over the grammar registry: apply the first token's
//! `nud`, then fold in `led`s while the current token binds tighter than the
//! caller's right binding power.

use qc_ir::{BinaryOp, Expr, ExprKind, Ident, LitKind, Literal, Token, TokenKind};
use tracing::trace;

use crate::grammar::registry::{Led, Nud, SymbolDef};
use crate::{LookupFailure, ParseError, ParseErrorKind, Parser};

impl<'g> Parser<'_, 'g> {
    /// Parse an expression whose operators all bind tighter than `rbp`.
    pub fn parse_expression(&mut self, rbp: u32) -> Result<Expr, ParseError> {
        self.guarded(|p| {
            let token = p.cursor.advance()?;
            let nud = match p.symbol_for(&token)?.nud() {
                Some(nud) => nud,
                None => return Err(lookup_error(&token, LookupFailure::NoNud)),
            };
            let mut left = p.apply_nud(nud, token)?;

            loop {
                let def = p.symbol_for(p.current())?;
                if def.lbp() <= rbp {
                    break;
                }
                let Some(led) = def.led() else {
                    return Err(lookup_error(p.current(), LookupFailure::NoLed));
                };
                let token = p.cursor.advance()?;
                left = p.apply_led(led, token, left)?;
            }

            Ok(left)
        })
    }

    /// Definition for `token`, or a lookup error when it is unregistered.
    pub(crate) fn symbol_for(&self, token: &Token) -> Result<&'g SymbolDef, ParseError> {
        self.grammar
            .lookup(token)
            .ok_or_else(|| lookup_error(token, LookupFailure::Unregistered))
    }

    fn apply_nud(&mut self, nud: Nud, token: Token) -> Result<Expr, ParseError> {
        match nud {
            Nud::Literal => Ok(literal(token)),
            Nud::Name => Ok(Expr::new(ExprKind::Name(token.lexeme), token.span)),
            Nud::Prefix { op, bp } => {
                let operand = self.parse_expression(bp)?;
                let span = token.span.merge(operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            Nud::Group => {
                let inner = self.parse_expression(0)?;
                let close = self.cursor.expect(")")?;
                Ok(Expr::new(inner.kind, token.span.merge(close.span)))
            }
        }
    }

    fn apply_led(&mut self, led: Led, token: Token, left: Expr) -> Result<Expr, ParseError> {
        trace!(op = %token.lexeme, line = token.line, column = token.column, "led");
        match led {
            Led::Infix { op, bp } => self.binary(op, bp, left),
            Led::InfixRight { op, bp } => self.binary(op, bp.saturating_sub(1), left),
            Led::Assign { bp, compound } => {
                if !left.is_lvalue() {
                    return Err(ParseError::at(
                        ParseErrorKind::Lvalue {
                            operator: token.lexeme.clone(),
                        },
                        &token,
                    )
                    .with_related(left.span));
                }
                let value = self.parse_expression(bp.saturating_sub(1))?;
                let span = left.span.merge(value.span);
                Ok(Expr::new(
                    ExprKind::Assign {
                        target: Box::new(left),
                        value: Box::new(value),
                        op: compound,
                    },
                    span,
                ))
            }
            Led::Member => {
                if self.current().kind != TokenKind::Identifier {
                    return Err(ParseError::at(
                        ParseErrorKind::MemberTarget {
                            found: self.current().describe(),
                        },
                        self.current(),
                    ));
                }
                let field = self.cursor.advance()?;
                let span = left.span.merge(field.span);
                Ok(Expr::new(
                    ExprKind::Member {
                        object: Box::new(left),
                        field: Ident::new(field.lexeme, field.span),
                    },
                    span,
                ))
            }
            Led::Call => {
                let mut args = Vec::new();
                if !self.cursor.check(")") {
                    loop {
                        args.push(self.parse_expression(0)?);
                        if self.cursor.eat(",")?.is_none() {
                            break;
                        }
                    }
                }
                let close = self.cursor.expect(")")?;
                let span = left.span.merge(close.span);
                Ok(Expr::new(
                    ExprKind::Call {
                        callee: Box::new(left),
                        args,
                    },
                    span,
                ))
            }
        }
    }

    fn binary(&mut self, op: BinaryOp, rbp: u32, left: Expr) -> Result<Expr, ParseError> {
        let right = self.parse_expression(rbp)?;
        let span = left.span.merge(right.span);
        Ok(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }
}

fn literal(token: Token) -> Expr {
    let kind = match token.kind {
        TokenKind::String => LitKind::String,
        TokenKind::Vector => LitKind::Vector,
        _ if token.lexeme.contains('.') => LitKind::Float,
        _ => LitKind::Int,
    };
    Expr::new(
        ExprKind::Literal(Literal {
            kind,
            value: token.lexeme,
        }),
        token.span,
    )
}

fn lookup_error(token: &Token, reason: LookupFailure) -> ParseError {
    let symbol = match token.kind {
        TokenKind::Eof => "(end)".to_string(),
        _ => token.lexeme.clone(),
    };
    ParseError::at(ParseErrorKind::SymbolLookup { symbol, reason }, token)
}
