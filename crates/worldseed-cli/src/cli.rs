use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "worldseed-lint",
    about = "WorldSeed Lint: deterministic compliance checking for declared-world manifests",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a world manifest and print the compliance report
    Check {
        /// Path to the manifest JSON file
        manifest: String,

        /// Also report declarations the context builder dropped as malformed
        #[arg(long)]
        strict: bool,
    },

    /// Print the immutable axiom-to-rule mapping
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
