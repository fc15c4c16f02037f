//! Tokenizer for QuakeC using logos.
//!
//! Produces [`Token`](qc_ir::Token)s on demand. Whitespace and comments are
//! skipped; every other character ends up in some token, so characters the
//! grammar does not know surface as parse errors rather than lexical ones.
//!
//! ```
//! use qc_ir::TokenKind;
//!
//! let kinds: Vec<TokenKind> = qc_lexer::tokenize("float x = 1;")
//!     .map(|t| t.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap_or_default();
//! assert_eq!(kinds.len(), 6);
//! ```

mod lex_error;
mod raw_token;
mod tokenizer;

pub use lex_error::{LexError, LexErrorKind};
pub use tokenizer::Tokenizer;

/// Start tokenizing `source`.
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}
