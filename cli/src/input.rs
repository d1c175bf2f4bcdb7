//! Input file loading.

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use gnntrack_finder::RawSpacePoint;

/// Error type for input loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    ReadFile(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse CSV: {0}")]
    ParseCsv(#[from] csv::Error),
    #[error("failed to parse file (tried YAML and JSON)")]
    ParseFailed,
}

/// Loads a YAML or JSON document into the provided type.
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let data = fs::read(path.as_ref())?;
    parse_document(&data, path.as_ref())
}

/// Parses document data based on file extension or content.
pub fn parse_document<T: DeserializeOwned>(
    data: &[u8],
    path: impl AsRef<Path>,
) -> Result<T, LoadError> {
    match extension(path.as_ref()).as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        Some("json") => Ok(serde_json::from_slice(data)?),
        _ => {
            // Try YAML first, then JSON
            if let Ok(v) = serde_yaml::from_slice(data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(data) {
                return Ok(v);
            }
            Err(LoadError::ParseFailed)
        }
    }
}

/// Parses CSV rows with a header line into the provided type.
pub fn parse_csv<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Loads spacepoints from a `.csv` file (header `id,x,y,z`) or from a
/// YAML/JSON list of `{id, x, y, z}` records. Row order is node order.
pub fn load_spacepoints(path: impl AsRef<Path>) -> Result<Vec<RawSpacePoint>, LoadError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    match extension(path).as_deref() {
        Some("csv") => parse_csv(&data),
        _ => parse_document(&data, path),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
