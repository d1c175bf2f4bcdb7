//! Finder configuration files.
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! ~/.gnntrack/config.yaml. A missing default file means built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use gnntrack_finder::FinderConfig;

use crate::input::load_document;
use crate::paths::Paths;

/// Loads and validates the finder configuration.
///
/// An explicit `custom_path` must exist. Without one, the default path is
/// used if present.
pub fn load_finder_config(custom_path: Option<&str>) -> anyhow::Result<FinderConfig> {
    let cfg = match custom_path {
        Some(p) => read_config(Path::new(p))?,
        None => {
            let default_path = Paths::new()?.config_file();
            if default_path.exists() {
                read_config(&default_path)?
            } else {
                FinderConfig::default()
            }
        }
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Saves the configuration as YAML to `custom_path` or the default path.
pub fn save_finder_config(cfg: &FinderConfig, custom_path: Option<&str>) -> anyhow::Result<PathBuf> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => {
            let paths = Paths::new()?;
            paths.ensure_base_dir()?;
            paths.config_file()
        }
    };

    let content = serde_yaml::to_string(cfg)?;
    std::fs::write(&config_path, content)?;
    Ok(config_path)
}

fn read_config(path: &Path) -> anyhow::Result<FinderConfig> {
    load_document(path).with_context(|| format!("loading config {}", path.display()))
}
