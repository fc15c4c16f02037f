//! Top-down operator precedence parser for QuakeC.
//!
//! Every token is looked up in a [`Grammar`] of symbol definitions; the
//! definition says how the token behaves at the start of an expression, after
//! a left operand, or at the start of a statement. The result is an owned
//! [`Module`] or the first [`ParseError`].
//!
//! ```
//! let module = qc_parse::parse("float x; x = 1 + 2 * 3;").unwrap_or_default();
//! assert_eq!(module.to_string(), "(decl float x)\n(= x (+ 1 (* 2 3)))");
//! ```

mod config;
mod cursor;
mod error;
mod grammar;

pub use config::ParserConfig;
pub use cursor::Cursor;
pub use error::{LookupFailure, ParseError, ParseErrorKind};
pub use grammar::registry::{
    quakec_builder, Grammar, GrammarBuilder, Led, Nud, Std, SymbolDef,
};

use qc_ir::{Expr, Module, Token};
use qc_stack::{ensure_sufficient_stack, DepthCounter};
use tracing::debug;

/// Parser state for one parse call.
pub struct Parser<'src, 'g> {
    cursor: Cursor<'src>,
    grammar: &'g Grammar,
    depth: DepthCounter,
}

impl<'src, 'g> Parser<'src, 'g> {
    /// Create a parser positioned at the first token of `source`.
    pub fn new(
        source: &'src str,
        grammar: &'g Grammar,
        config: ParserConfig,
    ) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
            grammar,
            depth: DepthCounter::new(config.max_depth()),
        })
    }

    /// Parse statements until end of input.
    pub fn parse_module(&mut self) -> Result<Module, ParseError> {
        let statements = self.parse_statements()?;
        self.cursor.expect(grammar::registry::END)?;
        Ok(Module::new(statements))
    }

    /// Parse a single expression that must span the whole input.
    pub fn parse_whole_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression(0)?;
        self.cursor.expect(grammar::registry::END)?;
        Ok(expr)
    }

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    /// Raise a message error at the current token.
    fn error<T>(&self, message: impl Into<String>) -> Result<T, ParseError> {
        Err(ParseError::at(
            ParseErrorKind::Message(message.into()),
            self.current(),
        ))
    }

    /// Run `f` one nesting level deeper, with stack growth and the depth
    /// limit applied.
    fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Err(exceeded) = self.depth.enter() {
            return Err(ParseError::at(
                ParseErrorKind::TooDeep {
                    limit: exceeded.limit,
                },
                self.current(),
            ));
        }
        let result = ensure_sufficient_stack(|| f(self));
        self.depth.exit();
        result
    }
}

/// Parse QuakeC source with the built-in grammar and default configuration.
pub fn parse(source: &str) -> Result<Module, ParseError> {
    parse_with(source, Grammar::quakec(), ParserConfig::default())
}

/// Parse with an explicit grammar and configuration.
pub fn parse_with(
    source: &str,
    grammar: &Grammar,
    config: ParserConfig,
) -> Result<Module, ParseError> {
    debug!(bytes = source.len(), max_depth = config.max_depth(), "parse");
    let result = Parser::new(source, grammar, config).and_then(|mut p| p.parse_module());
    if let Err(err) = &result {
        debug!(code = %err.code(), line = err.line, column = err.column, "parse failed");
    }
    result
}

/// Parse a standalone expression.
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source, Grammar::quakec(), ParserConfig::default())
        .and_then(|mut p| p.parse_whole_expression())
}

#[cfg(test)]
mod tests;
