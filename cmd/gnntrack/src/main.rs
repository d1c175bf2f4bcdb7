//! gnntrack CLI - graph-based track candidate finding from spacepoint files.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{ConfigCommand, FindCommand};

/// gnntrack CLI - graph-based track candidate finding.
///
/// Reads one event's spacepoints, builds a neighbor graph in embedding
/// space, scores and prunes edges, and groups connected spacepoints into
/// track candidates.
///
/// Configuration is read from ~/.gnntrack/config.yaml unless --config is given.
#[derive(Parser)]
#[command(name = "gnntrack")]
#[command(about = "Graph-based track candidate finder")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.gnntrack/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input spacepoint file (CSV, YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find track candidates in a spacepoint file
    Find(FindCommand),
    /// Inspect or initialize the finder configuration
    Config(ConfigCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Find(cmd) => cmd.run(&cli),
        Commands::Config(cmd) => cmd.run(&cli),
    }
}
