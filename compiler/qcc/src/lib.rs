//! QuakeC front-end driver.
//!
//! The `qcc` binary is a thin wrapper over [`run`]; the command handlers live
//! in [`commands`] and write to caller-supplied sinks so they can be driven
//! from tests.

pub mod cli;
pub mod commands;

use std::io::Write;
use std::sync::Once;

use qc_diagnostic::emitter::TerminalEmitter;
use qc_parse::ParserConfig;

pub use cli::{Cli, ColorChoice, Command};
pub use commands::CommandError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=qc_parse=debug` or
/// `RUST_LOG=qc_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run the parsed command line, writing results to `out` and diagnostics to
/// `emitter`.
pub fn run<O: Write, E: Write>(
    cli: &Cli,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let config = ParserConfig::new().with_max_depth(cli.max_depth);
    match &cli.command {
        Command::Lex { file } => commands::lex_file(file, out, emitter),
        Command::Parse { file, json } => commands::parse_file(file, *json, config, out, emitter),
        Command::Check { files } => commands::check_files(files, config, out, emitter),
    }
}
