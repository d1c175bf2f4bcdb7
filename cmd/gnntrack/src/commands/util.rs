//! Utility functions for CLI commands.

use gnntrack_cli::{load_finder_config, Output, OutputFormat};
use gnntrack_finder::FinderConfig;

use crate::Cli;

/// Gets the effective finder configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<FinderConfig> {
    load_finder_config(cli.config.as_deref())
}

/// Requires input file to be provided.
pub fn require_input_file(cli: &Cli) -> anyhow::Result<&str> {
    cli.input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("input file is required, use -f flag"))
}

/// Builds the output target from global flags.
pub fn output(cli: &Cli) -> Output {
    Output::new(OutputFormat::from_flag(cli.json), cli.output.clone())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    gnntrack_cli::print_verbose(cli.verbose, msg);
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}
