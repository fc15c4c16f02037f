//! Lexer error types.
//!
//! A [`LexError`] locates the problem by span and by 1-based line/column,
//! and converts into a [`Diagnostic`] at the reporting boundary.

use qc_diagnostic::{Diagnostic, ErrorCode};
use qc_ir::Span;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` before end of line or input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Vector literal without three numeric components, or without its
    /// closing `'`.
    #[error("malformed vector literal: {reason}")]
    MalformedVector { reason: String },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedComment => ErrorCode::E0002,
            LexErrorKind::MalformedVector { .. } => ErrorCode::E0003,
        }
    }
}

/// A lexer error with its source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, line: u32, column: u32) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, hint) = match &self.kind {
            LexErrorKind::UnterminatedString => (
                "string starts here",
                "add a closing `\"` before the end of the line",
            ),
            LexErrorKind::UnterminatedComment => ("comment starts here", "close it with `*/`"),
            LexErrorKind::MalformedVector { .. } => (
                "in this vector literal",
                "vectors are written as three numbers, e.g. '0 0 1'",
            ),
        };
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
            .with_help(hint)
    }
}

#[cfg(test)]
mod tests;
