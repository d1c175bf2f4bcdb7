use crate::error::ModelError;
use crate::graph::EdgeList;
use crate::matrix::Matrix;

/// Maps per-spacepoint features to embedding vectors.
///
/// Input is N×F features, output must be N×[`EmbeddingModel::dimension`].
/// N may be zero; implementations must then return an empty matrix.
///
/// # Thread Safety
///
/// Implementations must be safe for concurrent use. Calls are synchronous
/// and may be slow; there is no timeout or cancellation.
pub trait EmbeddingModel: Send + Sync {
    /// Computes one embedding row per feature row.
    fn embed(&self, features: &Matrix) -> Result<Matrix, ModelError>;

    /// Returns the dimensionality of the embedding vectors.
    fn dimension(&self) -> usize;
}

/// Scores directed edges of a spacepoint graph.
///
/// Used both for the edge filter and for the GNN. Returns one raw
/// (pre-sigmoid) score per edge, in edge order.
///
/// Any `Fn(&Matrix, &EdgeList) -> Result<Vec<f32>, ModelError>` closure
/// that is `Send + Sync` implements this trait.
pub trait EdgeScorer: Send + Sync {
    fn score(&self, features: &Matrix, edges: &EdgeList) -> Result<Vec<f32>, ModelError>;
}

impl<F> EdgeScorer for F
where
    F: Fn(&Matrix, &EdgeList) -> Result<Vec<f32>, ModelError> + Send + Sync,
{
    fn score(&self, features: &Matrix, edges: &EdgeList) -> Result<Vec<f32>, ModelError> {
        self(features, edges)
    }
}
