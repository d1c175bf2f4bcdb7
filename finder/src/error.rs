use std::fmt;

use thiserror::Error;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Embedding,
    Filter,
    Gnn,
    Connectivity,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Embedding => "embedding",
            Stage::Filter => "filter",
            Stage::Gnn => "gnn",
            Stage::Connectivity => "connectivity",
        };
        f.write_str(name)
    }
}

/// Errors returned by an external scoring model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model failed: {0}")]
    Failed(String),

    #[error("model unavailable: {0}")]
    Unavailable(String),
}

/// Broad category of a [`FinderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid settings or model handles; detected before any output.
    Configuration,
    /// A scoring call failed or returned malformed shapes.
    ExternalModel,
}

/// Errors returned by track finding. All of them are fatal for the
/// invocation: no partial candidates are ever returned.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("{stage} model: {source}")]
    Model {
        stage: Stage,
        #[source]
        source: ModelError,
    },

    #[error("{stage} model: {what} mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        stage: Stage,
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{stage} model: non-finite value at row {row}, column {col}")]
    NonFiniteOutput { stage: Stage, row: usize, col: usize },

    #[error("{stage}: edge index {index} out of range for {nodes} nodes")]
    EdgeOutOfRange {
        stage: Stage,
        index: usize,
        nodes: usize,
    },
}

impl FinderError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::InvalidConfig(_) | FinderError::DimensionMismatch { .. } => {
                ErrorKind::Configuration
            }
            FinderError::Model { .. }
            | FinderError::ShapeMismatch { .. }
            | FinderError::NonFiniteOutput { .. }
            | FinderError::EdgeOutOfRange { .. } => ErrorKind::ExternalModel,
        }
    }
}
