//! The `lex` command: print the token stream of a file.

use std::io::Write;
use std::path::Path;

use qc_diagnostic::emitter::TerminalEmitter;
use qc_lexer::tokenize;

use super::{read_or_report, report, CommandError};

/// Print one line per token: `line:col kind lexeme`.
pub fn lex_file<O: Write, E: Write>(
    path: &Path,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let text = read_or_report(path, emitter)?;

    for result in tokenize(&text) {
        match result {
            Ok(token) => writeln!(
                out,
                "{:>4}:{:<4} {:<14} {:?}",
                token.line,
                token.column,
                token.kind.display_name(),
                token.lexeme
            )?,
            Err(err) => {
                report(emitter, path, &text, &err.to_diagnostic());
                return Err(CommandError::Failed {
                    failed: 1,
                    total: 1,
                });
            }
        }
    }
    Ok(())
}
