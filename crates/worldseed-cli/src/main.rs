//! WorldSeed Lint CLI: the `worldseed-lint` command.
//!
//! Invocation and orchestration only. The CLI never alters lint
//! outcomes, never suppresses violations, and never introduces
//! defaults; exit codes reflect the verdict and nothing else.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest, strict } => commands::check::run(manifest, strict),
        Commands::Rules { json } => commands::rules::run(json),
    }
}
