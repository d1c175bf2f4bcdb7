//! CLI utilities for gnntrack.
//!
//! Input loading (spacepoint files, config files), output rendering and
//! the `~/.gnntrack` directory layout.

pub mod config;
pub mod input;
pub mod output;
pub mod paths;

pub use config::{load_finder_config, save_finder_config};
pub use input::{load_document, load_spacepoints, parse_document, LoadError};
pub use output::{print_verbose, Output, OutputFormat};
pub use paths::Paths;
