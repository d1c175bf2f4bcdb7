//! Deterministic stand-ins for the learned models.
//!
//! These are not trained networks. They give the pipeline geometrically
//! sensible inputs for tests, benches and command-line runs when no model
//! runtime is available.

use crate::error::ModelError;
use crate::graph::EdgeList;
use crate::knn::euclidean;
use crate::matrix::Matrix;
use crate::model::{EdgeScorer, EmbeddingModel};

/// Embeds features by scaling them into the first columns of a
/// `dim`-wide vector and zero-padding the rest. Extra features beyond
/// `dim` are dropped.
#[derive(Debug, Clone)]
pub struct FeatureEmbedding {
    dim: usize,
    scale: f32,
}

impl FeatureEmbedding {
    pub fn new(dim: usize, scale: f32) -> Self {
        Self { dim, scale }
    }
}

impl EmbeddingModel for FeatureEmbedding {
    fn embed(&self, features: &Matrix) -> Result<Matrix, ModelError> {
        let mut out = Matrix::zeros(features.rows(), self.dim);
        let width = self.dim.min(features.cols());
        for i in 0..features.rows() {
            let src = &features.row(i)[..width];
            for (dst, &v) in out.row_mut(i).iter_mut().zip(src) {
                *dst = v * self.scale;
            }
        }
        Ok(out)
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

/// Returns a fixed embedding table regardless of the features.
///
/// Fails if the table row count differs from the number of feature rows.
#[derive(Debug, Clone)]
pub struct PrecomputedEmbedding(pub Matrix);

impl EmbeddingModel for PrecomputedEmbedding {
    fn embed(&self, features: &Matrix) -> Result<Matrix, ModelError> {
        if self.0.rows() != features.rows() {
            return Err(ModelError::Failed(format!(
                "precomputed table has {} rows, got {} spacepoints",
                self.0.rows(),
                features.rows()
            )));
        }
        Ok(self.0.clone())
    }

    fn dimension(&self) -> usize {
        self.0.cols()
    }
}

/// Gives every edge the same raw score.
#[derive(Debug, Clone, Copy)]
pub struct ConstantScorer(pub f32);

impl EdgeScorer for ConstantScorer {
    fn score(&self, _features: &Matrix, edges: &EdgeList) -> Result<Vec<f32>, ModelError> {
        Ok(vec![self.0; edges.len()])
    }
}

/// Scores an edge by the feature-space distance d between its endpoints:
/// `raw = 4 * (1 - d / length)`.
///
/// Endpoints at distance `length` score 0 (sigmoid 0.5); closer pairs
/// score higher.
#[derive(Debug, Clone, Copy)]
pub struct ProximityScorer {
    length: f32,
}

impl ProximityScorer {
    /// `length` must be positive.
    pub fn new(length: f32) -> Self {
        Self { length }
    }
}

impl EdgeScorer for ProximityScorer {
    fn score(&self, features: &Matrix, edges: &EdgeList) -> Result<Vec<f32>, ModelError> {
        if !(self.length > 0.0) {
            return Err(ModelError::Unavailable(format!(
                "proximity length must be positive, got {}",
                self.length
            )));
        }
        let n = features.rows();
        edges
            .iter()
            .map(|(s, r)| {
                if s >= n || r >= n {
                    return Err(ModelError::Failed(format!(
                        "edge ({s}, {r}) outside {n} feature rows"
                    )));
                }
                let d = euclidean(features.row(s), features.row(r)) as f32;
                Ok(4.0 * (1.0 - d / self.length))
            })
            .collect()
    }
}
