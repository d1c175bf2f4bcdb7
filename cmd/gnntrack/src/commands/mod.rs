//! CLI commands module.

mod config;
mod find;
mod util;

pub use config::ConfigCommand;
pub use find::FindCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
