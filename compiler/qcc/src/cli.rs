//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use qc_diagnostic::emitter::ColorMode;
use qc_stack::DEFAULT_MAX_DEPTH;

#[derive(Debug, Parser)]
#[command(name = "qcc", version, about = "QuakeC front end: tokenize, parse and check sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum nesting of expressions and statements
    #[arg(long, global = true, env = "QCC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// When to color diagnostics
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream with positions
    Lex { file: PathBuf },

    /// Print the syntax tree as S-expressions
    Parse {
        file: PathBuf,

        /// Print JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Parse each file and report diagnostics
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}
