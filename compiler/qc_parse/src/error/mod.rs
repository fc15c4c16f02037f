//! Parse errors.
//!
//! Parsing is fail-fast: the first [`ParseError`] aborts the parse. Every
//! error carries the byte span and 1-based line/column of the token that
//! caused it.

use std::fmt;

use qc_diagnostic::{Diagnostic, ErrorCode};
use qc_ir::{Span, Token};
use qc_lexer::{LexError, LexErrorKind};

/// Why a grammar lookup failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LookupFailure {
    /// The symbol has no definition at all.
    Unregistered,
    /// The symbol is registered but cannot start an expression.
    NoNud,
    /// The symbol binds to the left but defines no infix behavior.
    NoLed,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::Unregistered => write!(f, "unknown symbol"),
            LookupFailure::NoNud => write!(f, "cannot start an expression"),
            LookupFailure::NoLed => write!(f, "cannot follow an expression"),
        }
    }
}

/// What went wrong.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lexical(#[from] LexErrorKind),

    #[error("{reason}: `{symbol}`")]
    SymbolLookup {
        symbol: String,
        reason: LookupFailure,
    },

    /// An `expect` mismatch.
    #[error("expected {expected}, found {found}")]
    Syntax { expected: String, found: String },

    #[error("invalid assignment target for `{operator}`")]
    Lvalue { operator: String },

    #[error("expected a field name after `.`, found {found}")]
    MemberTarget { found: String },

    #[error("expression statement must be an assignment or a call")]
    BadExpressionStatement,

    #[error("invalid builtin number `{text}`")]
    InvalidBuiltin { text: String },

    #[error("nesting exceeds the limit of {limit} levels")]
    TooDeep { limit: u32 },

    #[error("{0}")]
    Message(String),
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Lexical(kind) => kind.code(),
            ParseErrorKind::SymbolLookup { .. } => ErrorCode::E1001,
            ParseErrorKind::Syntax { .. } => ErrorCode::E1002,
            ParseErrorKind::Lvalue { .. } => ErrorCode::E1003,
            ParseErrorKind::MemberTarget { .. } => ErrorCode::E1004,
            ParseErrorKind::BadExpressionStatement => ErrorCode::E1005,
            ParseErrorKind::InvalidBuiltin { .. } => ErrorCode::E1006,
            ParseErrorKind::TooDeep { .. } => ErrorCode::E1007,
            ParseErrorKind::Message(_) => ErrorCode::E1008,
        }
    }
}

/// A parse error at a source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
    /// Span of a related node, rendered as a secondary label.
    pub related: Option<Span>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, line: u32, column: u32) -> Self {
        ParseError {
            kind,
            span,
            line,
            column,
            related: None,
        }
    }

    /// An error located at `token`.
    pub fn at(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError::new(kind, token.span, token.line, token.column)
    }

    /// `expect` mismatch: `expected` is a symbol id such as `;` or `(end)`.
    pub fn expected(expected: &str, found: &Token) -> Self {
        let expected = describe_expected(expected);
        ParseError::at(
            ParseErrorKind::Syntax {
                expected,
                found: found.describe(),
            },
            found,
        )
    }

    #[must_use]
    pub fn with_related(mut self, span: Span) -> Self {
        self.related = Some(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());

        diag = match &self.kind {
            ParseErrorKind::Lexical(_) => diag.with_label(self.span, "here"),
            ParseErrorKind::SymbolLookup { reason, .. } => {
                let diag = diag.with_label(self.span, reason.to_string());
                if *reason == LookupFailure::Unregistered {
                    diag.with_note("this character is not part of QuakeC")
                } else {
                    diag
                }
            }
            ParseErrorKind::Syntax { expected, .. } => {
                diag.with_label(self.span, format!("expected {expected}"))
            }
            ParseErrorKind::Lvalue { .. } => diag
                .with_label(self.span, "cannot assign here")
                .with_note("only names and field accesses can be assigned"),
            ParseErrorKind::MemberTarget { .. } => diag.with_label(self.span, "not a field name"),
            ParseErrorKind::BadExpressionStatement => diag
                .with_label(self.span, "this expression has no effect")
                .with_help("assign the value or call a function"),
            ParseErrorKind::InvalidBuiltin { .. } => diag
                .with_label(self.span, "not a builtin number")
                .with_note("builtins are declared as `= #n` with a whole number"),
            ParseErrorKind::TooDeep { .. } => diag.with_label(self.span, "nested too deeply"),
            ParseErrorKind::Message(_) => diag.with_label(self.span, "here"),
        };

        if let Some(related) = self.related {
            let message = match self.kind {
                ParseErrorKind::Lvalue { .. } => "not a name or field access",
                _ => "related to this",
            };
            diag = diag.with_secondary_label(related, message);
        }
        diag
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.kind.into(), err.span, err.line, err.column)
    }
}

fn describe_expected(id: &str) -> String {
    match id {
        "(end)" => "end of input".to_string(),
        "(name)" => "an identifier".to_string(),
        "(type)" => "a type".to_string(),
        "(literal)" => "a literal".to_string(),
        _ => format!("`{id}`"),
    }
}
