//! The `check` command: parse several files and report every failure.

use std::io::Write;
use std::path::PathBuf;

use qc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use qc_parse::{parse_with, Grammar, ParserConfig};

use super::{read_source, report, CommandError};

/// Parse each file in turn. A failing file does not stop the others; the
/// result is an error if any of them failed.
pub fn check_files<O: Write, E: Write>(
    paths: &[PathBuf],
    config: ParserConfig,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let mut failed = 0;

    for path in paths {
        let text = match read_source(path) {
            Ok(text) => text,
            Err(diag) => {
                emitter.emit(&diag);
                failed += 1;
                continue;
            }
        };

        match parse_with(&text, Grammar::quakec(), config) {
            Ok(module) => writeln!(
                out,
                "ok: {} ({} statement{})",
                path.display(),
                module.len(),
                if module.len() == 1 { "" } else { "s" }
            )?,
            Err(err) => {
                report(emitter, path, &text, &err.to_diagnostic());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        emitter.emit_summary(failed, 0);
        emitter.flush();
        return Err(CommandError::Failed {
            failed,
            total: paths.len(),
        });
    }
    Ok(())
}
