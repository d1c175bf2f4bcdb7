//! Configuration commands.

use clap::{Args, Subcommand};

use gnntrack_cli::save_finder_config;
use gnntrack_finder::FinderConfig;

use super::{get_config, output, print_success};
use crate::Cli;

/// Inspect or initialize the finder configuration.
///
/// Configuration is stored in ~/.gnntrack/config.yaml unless --config is
/// given. Keys: embeddingDim, rVal, knnVal, filterCut, edgeCut, minTrackSize.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// View the effective configuration (file values over defaults)
    View,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;
                output(cli).write(&cfg)
            }
            ConfigSubcommand::Init { force } => {
                if let Some(path) = cli.config.as_deref() {
                    if !force && std::path::Path::new(path).exists() {
                        anyhow::bail!("{} already exists, use --force to overwrite", path);
                    }
                } else if !force {
                    let default_path = gnntrack_cli::Paths::new()?.config_file();
                    if default_path.exists() {
                        anyhow::bail!(
                            "{} already exists, use --force to overwrite",
                            default_path.display()
                        );
                    }
                }
                let path = save_finder_config(&FinderConfig::default(), cli.config.as_deref())?;
                print_success(&format!("Wrote {}", path.display()));
                Ok(())
            }
        }
    }
}
