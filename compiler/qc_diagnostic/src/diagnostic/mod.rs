//! The [`Diagnostic`] value handed from the phases to an emitter.
//!
//! A diagnostic is one headline (severity, code, message), any number of
//! labelled spans and an ordered list of footers (`= note:` / `= help:`).

use qc_ir::Span;
use std::fmt;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label marks the offending code or context around it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// Kind of a trailing `= kind: text` line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FooterKind {
    /// Background on why the input is rejected.
    Note,
    /// How to fix it.
    Help,
}

impl FooterKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FooterKind::Note => "note",
            FooterKind::Help => "help",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Footer {
    pub kind: FooterKind,
    pub text: String,
}

/// A rendered-ready report.
///
/// Built with the `with_*` methods; labels and footers keep the order they
/// were added in.
///
/// ```
/// use qc_diagnostic::{Diagnostic, ErrorCode};
/// use qc_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E1002)
///     .with_message("expected `;`, found end of input")
///     .with_label(Span::point(5), "expected `;`")
///     .with_help("add `;`");
/// assert_eq!(diag.primary_span(), Some(Span::point(5)));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub footers: Vec<Footer>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Warning)
    }

    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            footers: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark the offending span.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Point at related code.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(self, text: impl Into<String>) -> Self {
        self.with_footer(FooterKind::Note, text)
    }

    pub fn with_help(self, text: impl Into<String>) -> Self {
        self.with_footer(FooterKind::Help, text)
    }

    fn with_footer(mut self, kind: FooterKind, text: impl Into<String>) -> Self {
        self.footers.push(Footer {
            kind,
            text: text.into(),
        });
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(|label| label.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn notes(&self) -> impl Iterator<Item = &str> + '_ {
        self.footers_of(FooterKind::Note)
    }

    pub fn helps(&self) -> impl Iterator<Item = &str> + '_ {
        self.footers_of(FooterKind::Help)
    }

    fn footers_of(&self, kind: FooterKind) -> impl Iterator<Item = &str> + '_ {
        self.footers
            .iter()
            .filter(move |footer| footer.kind == kind)
            .map(|footer| footer.text.as_str())
    }
}

/// Plain one-line-per-part rendering without source context.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let marker = match label.style {
                LabelStyle::Primary => "-->",
                LabelStyle::Secondary => "...",
            };
            write!(f, "\n  {marker} {}: {}", label.span, label.message)?;
        }
        for footer in &self.footers {
            write!(f, "\n  = {}: {}", footer.kind.as_str(), footer.text)?;
        }
        Ok(())
    }
}
