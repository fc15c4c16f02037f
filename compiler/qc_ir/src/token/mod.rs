//! Token types for the QuakeC lexer.
//!
//! A token is a classified lexeme plus its source position. The parser never
//! retains tokens after a parse call; AST nodes copy out what they need.

use std::fmt;

use super::Span;

/// Hard QuakeC limit on identifier length. Longer identifiers are truncated.
pub const MAX_IDENT_LEN: usize = 32;

/// Reserved type keywords.
pub const TYPE_KEYWORDS: &[&str] = &["float", "void", "vector", "entity", "string"];

/// Lexical class of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `float`, `void`, `vector`, `entity`, `string`
    TypeKeyword,
    /// Identifier (keywords such as `if` are identifiers at this level)
    Identifier,
    /// Integer or decimal literal
    Number,
    /// String literal; the lexeme holds the unescaped contents
    String,
    /// Vector literal `'x y z'`; the lexeme holds the three components
    Vector,
    /// Punctuation and operators, including the single-character fallback
    Operator,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::TypeKeyword => "type keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::Vector => "vector literal",
            TokenKind::Operator => "operator",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its lexeme and position.
///
/// `line` and `column` are 1-based and point at the first character;
/// `column` counts characters, not bytes.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }

    /// The end-of-input token at the given position.
    pub fn eof(span: Span, line: u32, column: u32) -> Self {
        Token::new(TokenKind::Eof, "", span, line, column)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Check for an operator token with exactly this lexeme.
    #[inline]
    pub fn is_op(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }

    /// Short description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Operator => format!("`{}`", self.lexeme),
            TokenKind::String => format!("string literal \"{}\"", self.lexeme),
            TokenKind::Vector => format!("vector literal '{}'", self.lexeme),
            kind => format!("{} `{}`", kind.display_name(), self.lexeme),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
