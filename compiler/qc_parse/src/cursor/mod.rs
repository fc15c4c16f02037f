//! Token cursor over the lazy tokenizer.
//!
//! Holds exactly one token of lookahead. The parser never backtracks, so the
//! cursor only moves forward.

use qc_ir::{Token, TokenKind};
use qc_lexer::Tokenizer;
use tracing::trace;

use crate::ParseError;

pub struct Cursor<'src> {
    tokenizer: Tokenizer<'src>,
    current: Token,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at the first token of `source`.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;
        Ok(Cursor { tokenizer, current })
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Check whether the current token matches a symbol id.
    #[inline]
    pub fn check(&self, id: &str) -> bool {
        token_matches(&self.current, id)
    }

    /// Move to the next token, returning the one just passed.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.tokenizer.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        trace!(
            kind = token.kind.display_name(),
            lexeme = %token.lexeme,
            line = token.line,
            column = token.column,
            "advance"
        );
        Ok(token)
    }

    /// Verify the current token matches `id`, then advance past it.
    pub fn expect(&mut self, id: &str) -> Result<Token, ParseError> {
        if self.check(id) {
            self.advance()
        } else {
            Err(ParseError::expected(id, &self.current))
        }
    }

    /// Advance if the current token matches `id`.
    pub fn eat(&mut self, id: &str) -> Result<Option<Token>, ParseError> {
        if self.check(id) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Whether `token` is the symbol `id`.
///
/// Operators and identifiers match by lexeme; the bracketed ids match whole
/// token classes (`(end)`, `(name)`, `(type)`, `(literal)`).
pub fn token_matches(token: &Token, id: &str) -> bool {
    match token.kind {
        TokenKind::Eof => id == "(end)",
        TokenKind::Operator => token.lexeme == id,
        TokenKind::Identifier => id == "(name)" || token.lexeme == id,
        TokenKind::TypeKeyword => id == "(type)" || token.lexeme == id,
        TokenKind::Number | TokenKind::String | TokenKind::Vector => id == "(literal)",
    }
}

#[cfg(test)]
mod tests;
