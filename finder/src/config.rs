use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Track finder settings.
///
/// Serialized keys are camelCase (`embeddingDim`, `rVal`, `knnVal`,
/// `filterCut`, `edgeCut`, `minTrackSize`); missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinderConfig {
    /// Embedding dimension D produced by the embedding model.
    /// Default: 8.
    pub embedding_dim: usize,

    /// Neighbor radius in embedding space.
    /// Default: 1.7.
    pub r_val: f32,

    /// Maximum outgoing candidate edges per node.
    /// Default: 500.
    pub knn_val: usize,

    /// Edges with `sigmoid(filter score) <= filter_cut` are pruned.
    /// Default: 0.21.
    pub filter_cut: f32,

    /// Edges with GNN weight `<= edge_cut` do not connect nodes.
    /// Independent of `filter_cut`.
    /// Default: 0.75.
    pub edge_cut: f32,

    /// Candidates with fewer spacepoints are dropped. 1 keeps singletons.
    /// Default: 1.
    pub min_track_size: usize,
}

impl FinderConfig {
    pub const DEFAULT_EMBEDDING_DIM: usize = 8;
    pub const DEFAULT_R_VAL: f32 = 1.7;
    pub const DEFAULT_KNN_VAL: usize = 500;
    pub const DEFAULT_FILTER_CUT: f32 = 0.21;
    pub const DEFAULT_EDGE_CUT: f32 = 0.75;

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.embedding_dim == 0 {
            return Err(FinderError::InvalidConfig(
                "embeddingDim must be positive".into(),
            ));
        }
        if self.r_val.is_nan() || self.r_val < 0.0 {
            return Err(FinderError::InvalidConfig(format!(
                "rVal must be non-negative, got {}",
                self.r_val
            )));
        }
        if !self.filter_cut.is_finite() {
            return Err(FinderError::InvalidConfig(format!(
                "filterCut must be finite, got {}",
                self.filter_cut
            )));
        }
        if !self.edge_cut.is_finite() {
            return Err(FinderError::InvalidConfig(format!(
                "edgeCut must be finite, got {}",
                self.edge_cut
            )));
        }
        if self.min_track_size == 0 {
            return Err(FinderError::InvalidConfig(
                "minTrackSize must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            embedding_dim: Self::DEFAULT_EMBEDDING_DIM,
            r_val: Self::DEFAULT_R_VAL,
            knn_val: Self::DEFAULT_KNN_VAL,
            filter_cut: Self::DEFAULT_FILTER_CUT,
            edge_cut: Self::DEFAULT_EDGE_CUT,
            min_track_size: 1,
        }
    }
}
