//! Raw token patterns recognised by logos.
//!
//! Literals that need escapes or validation (`"..."`, `'x y z'`, `/* */`)
//! are only *opened* here; the tokenizer scans their bodies by hand so it
//! can report unterminated input at the opening delimiter.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[token("/*")]
    BlockCommentOpen,

    #[token("\"")]
    Quote,

    #[token("'")]
    Apostrophe,

    // Type keywords; whole words only since `floaty` is a longer Ident match.
    #[token("float")]
    #[token("void")]
    #[token("vector")]
    #[token("entity")]
    #[token("string")]
    TypeKeyword,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Multi-character operators, matched before the single-char fallback.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("&&")]
    #[token("||")]
    #[token("...")]
    CompoundOp,

    /// Any other single character. Unregistered ones fail in the parser.
    #[regex(r".", priority = 0)]
    SingleChar,
}
