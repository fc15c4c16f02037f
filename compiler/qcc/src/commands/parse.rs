//! The `parse` command: print the syntax tree of a file.

use std::io::Write;
use std::path::Path;

use qc_diagnostic::emitter::TerminalEmitter;
use qc_parse::{parse_with, Grammar, ParserConfig};
use tracing::debug;

use super::{read_or_report, report, CommandError};

/// Parse `path` and print one S-expression per top-level statement, or the
/// whole module as JSON.
pub fn parse_file<O: Write, E: Write>(
    path: &Path,
    json: bool,
    config: ParserConfig,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let text = read_or_report(path, emitter)?;

    let module = match parse_with(&text, Grammar::quakec(), config) {
        Ok(module) => module,
        Err(err) => {
            report(emitter, path, &text, &err.to_diagnostic());
            return Err(CommandError::Failed {
                failed: 1,
                total: 1,
            });
        }
    };
    debug!(path = %path.display(), statements = module.len(), "parsed");

    if json {
        serde_json::to_writer_pretty(&mut *out, &module)?;
        writeln!(out)?;
    } else {
        for stmt in &module.statements {
            writeln!(out, "{stmt}")?;
        }
    }
    Ok(())
}
