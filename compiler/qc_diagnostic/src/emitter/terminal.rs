//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When a
//! source file is attached, labels render as `path:line:col` followed by the
//! offending line and a caret underline:
//!
//! ```text
//! error[E1003]: invalid assignment target for `=`
//!   --> progs.qc:2:3
//!    |
//!  2 | 1 = 2;
//!    |   ^ cannot assign here
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, FooterKind, Label, LabelStyle, Severity};

use super::DiagnosticEmitter;

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Text styles, mapped to bold ANSI colors.
#[derive(Clone, Copy)]
enum Paint {
    Error,
    Warning,
    Secondary,
    Help,
    Bold,
}

impl Paint {
    const RESET: &'static str = "\x1b[0m";

    fn ansi(self) -> &'static str {
        match self {
            Paint::Error => "\x1b[1;31m",
            Paint::Warning => "\x1b[1;33m",
            Paint::Secondary => "\x1b[1;34m",
            Paint::Help => "\x1b[1;32m",
            Paint::Bold => "\x1b[1m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Paint::Error,
            Severity::Warning => Paint::Warning,
        }
    }

    fn for_label(style: LabelStyle) -> Self {
        match style {
            LabelStyle::Primary => Paint::Error,
            LabelStyle::Secondary => Paint::Secondary,
        }
    }
}

/// The file diagnostics currently point into.
struct Attached {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support. Write errors are ignored.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<Attached>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is consulted only for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    /// Attach the source that subsequent diagnostics refer to.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_source(path, text);
        self
    }

    /// Replace the attached source, e.g. when checking several files in turn.
    pub fn set_source(&mut self, path: impl Into<String>, text: impl Into<String>) {
        let text = text.into();
        self.source = Some(Attached {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
    }

    fn paint(&mut self, text: &str, paint: Paint) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{}", paint.ansi(), Paint::RESET)
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }

    fn write_label(&mut self, label: &Label) {
        let paint = Paint::for_label(label.style);
        let marker = match label.style {
            LabelStyle::Primary => "-->",
            LabelStyle::Secondary => "...",
        };

        let Some(snippet) = self.snippet(label) else {
            let _ = write!(self.writer, "  {marker} {}: ", label.span);
            self.paint(&label.message, paint);
            let _ = writeln!(self.writer);
            return;
        };

        let gutter = " ".repeat(snippet.line.to_string().len());
        let _ = writeln!(self.writer, "  {marker} {}", snippet.location);
        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {} | {}", snippet.line, snippet.text);
        let _ = write!(self.writer, " {gutter} | {}", " ".repeat(snippet.pad));
        self.paint(&"^".repeat(snippet.width), paint);
        let _ = write!(self.writer, " ");
        self.paint(&label.message, paint);
        let _ = writeln!(self.writer);
    }

    /// Where `label` falls in the attached source, if any.
    fn snippet(&self, label: &Label) -> Option<Snippet> {
        let source = self.source.as_ref()?;
        let (line, col) = source
            .lines
            .offset_to_line_col(&source.text, label.span.start);
        let text = source.lines.line_text(&source.text, line).unwrap_or_default();

        // Zero-width spans still get one caret.
        let pad = col as usize - 1;
        let room = text.chars().count().saturating_sub(pad).max(1);
        let width = (label.span.len() as usize).clamp(1, room);

        Some(Snippet {
            location: format!("{}:{line}:{col}", source.path),
            line,
            text: text.to_string(),
            pad,
            width,
        })
    }
}

struct Snippet {
    location: String,
    line: u32,
    text: String,
    pad: usize,
    width: usize,
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity;
        self.paint(severity.as_str(), Paint::for_severity(severity));
        self.paint(&format!("[{}]", diagnostic.code), Paint::Bold);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for footer in &diagnostic.footers {
            let paint = match footer.kind {
                FooterKind::Note => Paint::Bold,
                FooterKind::Help => Paint::Help,
            };
            let _ = write!(self.writer, "  = ");
            self.paint(footer.kind.as_str(), paint);
            let _ = writeln!(self.writer, ": {}", footer.text);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = match warning_count {
            0 => None,
            1 => Some("1 warning emitted".to_string()),
            n => Some(format!("{n} warnings emitted")),
        };

        let (paint, head, line) = match (error_count, warnings) {
            (0, None) => return,
            (0, Some(warnings)) => (Paint::Warning, "warning", warnings),
            (errors, warnings) => {
                let mut line = match errors {
                    1 => "aborting due to previous error".to_string(),
                    n => format!("aborting due to {n} previous errors"),
                };
                if let Some(warnings) = warnings {
                    line.push_str("; ");
                    line.push_str(&warnings);
                }
                (Paint::Error, "error", line)
            }
        };

        self.paint(head, paint);
        let _ = writeln!(self.writer, ": {line}");
    }
}
