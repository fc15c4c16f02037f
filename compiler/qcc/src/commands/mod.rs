//! Command handlers for the `qcc` CLI.
//!
//! Each submodule implements one subcommand. Shared helpers for reading
//! sources and reporting errors live here in the module root.

use std::io::{self, Write};
use std::path::Path;

use qc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use qc_diagnostic::{Diagnostic, ErrorCode};

mod check;
mod lex;
mod parse;

pub use check::check_files;
pub use lex::lex_file;
pub use parse::parse_file;

/// Why a command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Diagnostics were already emitted for these files.
    #[error("{failed} of {total} file(s) failed")]
    Failed { failed: usize, total: usize },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot serialize the syntax tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a source file, turning failures into a driver diagnostic.
pub(crate) fn read_source(path: &Path) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| {
        let shown = path.display();
        let message = match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {e}"),
        };
        Diagnostic::error(ErrorCode::E9001).with_message(message)
    })
}

/// Read `path` or report the failure and count it.
pub(crate) fn read_or_report<E: Write>(
    path: &Path,
    emitter: &mut TerminalEmitter<E>,
) -> Result<String, CommandError> {
    read_source(path).map_err(|diag| {
        emitter.emit(&diag);
        emitter.flush();
        CommandError::Failed {
            failed: 1,
            total: 1,
        }
    })
}

/// Emit `diagnostic` against the source text of `path`.
pub(crate) fn report<E: Write>(
    emitter: &mut TerminalEmitter<E>,
    path: &Path,
    text: &str,
    diagnostic: &Diagnostic,
) {
    emitter.set_source(path.display().to_string(), text);
    emitter.emit(diagnostic);
    emitter.flush();
}
