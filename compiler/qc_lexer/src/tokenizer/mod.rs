//! The lazy QuakeC tokenizer.
//!
//! Wraps a logos lexer over [`RawToken`] and turns each raw match into a
//! [`Token`] carrying its lexeme, byte span and 1-based line/column.

use logos::Logos;
use qc_diagnostic::span_utils::LineOffsetTable;
use qc_ir::span::saturate;
use qc_ir::{Span, Token, TokenKind, MAX_IDENT_LEN};

use crate::raw_token::RawToken;
use crate::{LexError, LexErrorKind};

/// Lazy, finite token stream over one source string.
///
/// [`Tokenizer::next_token`] is the cursor API used by the parser: it keeps
/// returning the same end-of-input token once the source is exhausted. As an
/// [`Iterator`], the tokenizer yields that token once and then ends.
pub struct Tokenizer<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, RawToken>,
    lines: LineOffsetTable,
    eof: Option<Token>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            source,
            lexer: RawToken::lexer(source),
            lines: LineOffsetTable::build(source),
            eof: None,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// 1-based (line, column) of a byte offset in this source.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(self.source, offset)
    }

    /// Produce the next token.
    ///
    /// After the end of input every call returns an identical `Eof` token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(eof) = &self.eof {
            return Ok(eof.clone());
        }

        loop {
            let Some(result) = self.lexer.next() else {
                let eof = self.eof_token();
                self.eof = Some(eof.clone());
                return Ok(eof);
            };

            let span = Span::from_range(self.lexer.span());
            let slice = self.lexer.slice();

            // Every character has a fallback pattern; anything logos still
            // rejects is treated the same way.
            let raw = result.unwrap_or(RawToken::SingleChar);

            let token = match raw {
                RawToken::BlockCommentOpen => {
                    self.skip_block_comment(span)?;
                    continue;
                }
                RawToken::Quote => return self.scan_string(span),
                RawToken::Apostrophe => return self.scan_vector(span),
                RawToken::TypeKeyword => self.token(TokenKind::TypeKeyword, slice, span),
                // The whole identifier is consumed; only its prefix is kept.
                RawToken::Ident => self.token(TokenKind::Identifier, truncate_ident(slice), span),
                RawToken::Number => self.token(TokenKind::Number, slice, span),
                RawToken::CompoundOp | RawToken::SingleChar => {
                    self.token(TokenKind::Operator, slice, span)
                }
            };
            return Ok(token);
        }
    }

    fn token(&self, kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Token {
        let (line, column) = self.line_col(span.start);
        Token::new(kind, lexeme, span, line, column)
    }

    fn eof_token(&self) -> Token {
        let end = saturate(self.source.len());
        let (line, column) = self.line_col(end);
        Token::eof(Span::point(end), line, column)
    }

    fn error(&self, kind: LexErrorKind, span: Span) -> LexError {
        let (line, column) = self.line_col(span.start);
        LexError::new(kind, span, line, column)
    }

    /// Skip the body of a `/* ... */` comment whose opener is at `open`.
    fn skip_block_comment(&mut self, open: Span) -> Result<(), LexError> {
        let rest = self.lexer.remainder();
        if let Some(close) = rest.find("*/") {
            self.lexer.bump(close + 2);
            Ok(())
        } else {
            self.lexer.bump(rest.len());
            Err(self.error(LexErrorKind::UnterminatedComment, open))
        }
    }

    /// Scan a string literal whose opening quote is at `open`.
    ///
    /// Recognised escapes are `\n`, `\t`, `\"` and `\\`; any other escape is
    /// kept verbatim. A raw newline ends the literal with an error.
    fn scan_string(&mut self, open: Span) -> Result<Token, LexError> {
        let rest = self.lexer.remainder();
        let mut value = String::new();
        let mut chars = rest.char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.lexer.bump(i + 1);
                    let span = Span::new(open.start, saturate(open.end as usize + i + 1));
                    return Ok(self.token(TokenKind::String, value, span));
                }
                '\n' => {
                    self.lexer.bump(i);
                    return Err(self.error(LexErrorKind::UnterminatedString, open));
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((j, '\n')) => {
                        self.lexer.bump(j);
                        return Err(self.error(LexErrorKind::UnterminatedString, open));
                    }
                    Some((_, other)) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => break,
                },
                c => value.push(c),
            }
        }

        self.lexer.bump(rest.len());
        Err(self.error(LexErrorKind::UnterminatedString, open))
    }

    /// Scan a vector literal `'x y z'` whose opening quote is at `open`.
    ///
    /// The lexeme is the three components joined by single spaces.
    fn scan_vector(&mut self, open: Span) -> Result<Token, LexError> {
        let rest = self.lexer.remainder();
        let line_end = rest.find('\n').unwrap_or(rest.len());

        let Some(close) = rest[..line_end].find('\'') else {
            self.lexer.bump(line_end);
            let span = Span::new(open.start, saturate(open.end as usize + line_end));
            return Err(self.error(
                LexErrorKind::MalformedVector {
                    reason: "missing closing `'`".to_string(),
                },
                span,
            ));
        };

        let body = &rest[..close];
        self.lexer.bump(close + 1);
        let span = Span::new(open.start, saturate(open.end as usize + close + 1));

        let components: Vec<&str> = body.split_whitespace().collect();
        if components.len() != 3 {
            let reason = format!("expected 3 components, found {}", components.len());
            return Err(self.error(LexErrorKind::MalformedVector { reason }, span));
        }
        if let Some(bad) = components.iter().find(|c| !is_vector_component(c)) {
            let reason = format!("`{bad}` is not a number");
            return Err(self.error(LexErrorKind::MalformedVector { reason }, span));
        }

        Ok(self.token(TokenKind::Vector, components.join(" "), span))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if matches!(&result, Ok(token) if token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}

/// Keep the first [`MAX_IDENT_LEN`] characters of an identifier.
fn truncate_ident(ident: &str) -> &str {
    // Identifiers are ASCII, so byte and char counts agree.
    &ident[..ident.len().min(MAX_IDENT_LEN)]
}

/// `-?digits(.digits)?`
fn is_vector_component(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

#[cfg(test)]
mod tests;
