use tracing::debug;

use crate::error::{FinderError, Stage};
use crate::graph::EdgeList;

/// Logistic function mapping a raw model score to (0, 1).
pub fn sigmoid(raw: f32) -> f32 {
    1.0 / (1.0 + (-raw).exp())
}

/// Prunes candidate edges using the filter scorer's raw outputs.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFilter {
    cut: f32,
}

impl EdgeFilter {
    /// Creates a filter keeping edges with `sigmoid(raw) > cut`.
    pub fn new(cut: f32) -> Self {
        Self { cut }
    }

    pub fn cut(&self) -> f32 {
        self.cut
    }

    /// Keeps edge k iff `sigmoid(raw_scores[k]) > cut`. Surviving edges keep
    /// their input order. Fails if there is not exactly one score per edge.
    pub fn apply(&self, edges: &EdgeList, raw_scores: &[f32]) -> Result<EdgeList, FinderError> {
        if raw_scores.len() != edges.len() {
            return Err(FinderError::ShapeMismatch {
                stage: Stage::Filter,
                what: "score count",
                expected: edges.len(),
                got: raw_scores.len(),
            });
        }

        let keep: Vec<bool> = raw_scores.iter().map(|&raw| sigmoid(raw) > self.cut).collect();
        let kept = edges.select(&keep);
        debug!(
            "edge filter: kept {} of {} edges (cut={})",
            kept.len(),
            edges.len(),
            self.cut
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_values() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-7);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
        assert!((sigmoid(1.0) + sigmoid(-1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_extremes_do_not_overflow() {
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
    }

    #[test]
    fn apply_keeps_above_cut_in_order() {
        let edges = EdgeList::from_pairs(&[(0, 1), (1, 0), (1, 2), (2, 3)]);
        // sigmoid(-2) ≈ 0.119, sigmoid(0) = 0.5, sigmoid(-1.3) ≈ 0.214
        let kept = EdgeFilter::new(0.21).apply(&edges, &[0.0, -2.0, -1.3, 3.0]).unwrap();
        assert_eq!(kept.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn apply_cut_is_strict() {
        let edges = EdgeList::from_pairs(&[(0, 1)]);
        let kept = EdgeFilter::new(0.5).apply(&edges, &[0.0]).unwrap();
        assert!(kept.is_empty(), "score equal to cut must be dropped");
    }

    #[test]
    fn apply_count_mismatch() {
        let edges = EdgeList::from_pairs(&[(0, 1), (1, 0)]);
        let err = EdgeFilter::new(0.21).apply(&edges, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            FinderError::ShapeMismatch {
                stage: Stage::Filter,
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn apply_empty() {
        let kept = EdgeFilter::new(0.21).apply(&EdgeList::new(), &[]).unwrap();
        assert!(kept.is_empty());
    }
}
