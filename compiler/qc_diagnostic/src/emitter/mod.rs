//! Rendering diagnostics for people.
//!
//! Only the terminal emitter exists; JSON output of parse results lives in
//! the driver.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|diagnostic| self.emit(diagnostic));
    }

    fn flush(&mut self);

    /// Closing `aborting due to ...` line; prints nothing when both are zero.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
