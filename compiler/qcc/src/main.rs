//! QuakeC front-end CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use qc_diagnostic::emitter::TerminalEmitter;
use qcc::{Cli, CommandError};

fn main() -> ExitCode {
    qcc::init_tracing();
    let cli = Cli::parse();

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(cli.color.into(), is_tty);
    let mut out = std::io::stdout().lock();

    match qcc::run(&cli, &mut out, &mut emitter) {
        Ok(()) => ExitCode::SUCCESS,
        // diagnostics are already on stderr
        Err(CommandError::Failed { .. }) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
