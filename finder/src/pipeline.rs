use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::{assemble_tracks, TrackCandidate};
use crate::config::FinderConfig;
use crate::connectivity::label_components;
use crate::error::{FinderError, Stage};
use crate::features::extract_features;
use crate::filter::{sigmoid, EdgeFilter};
use crate::graph::ScoredEdges;
use crate::knn::build_edges;
use crate::model::{EdgeScorer, EmbeddingModel};
use crate::spacepoint::SpacePoint;

/// Per-invocation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    pub spacepoints: usize,
    /// Edges emitted by the neighbor search.
    pub candidate_edges: usize,
    /// Edges surviving the filter cut.
    pub filtered_edges: usize,
    /// Edges whose GNN weight exceeds the edge cut.
    pub accepted_edges: usize,
    /// Connected components, singletons included.
    pub components: usize,
    /// Candidates returned after the size policy.
    pub candidates: usize,
    /// Components removed by the size policy.
    pub dropped_candidates: usize,
}

/// Result of one [`TrackFinder::run`].
#[derive(Debug, Clone, Serialize)]
pub struct TrackFinding<I> {
    pub stats: StageStats,
    pub tracks: Vec<TrackCandidate<I>>,
}

/// Runs the full track finding pipeline for one event.
///
/// Holds only immutable settings and model handles, so one finder can serve
/// concurrent invocations from several threads; each call owns its buffers.
pub struct TrackFinder {
    cfg: FinderConfig,
    embedder: Box<dyn EmbeddingModel>,
    filter: Box<dyn EdgeScorer>,
    gnn: Box<dyn EdgeScorer>,
}

impl TrackFinder {
    /// Creates a finder. Fails if the config is invalid or the embedding
    /// model's dimension differs from `cfg.embedding_dim`.
    pub fn new(
        cfg: FinderConfig,
        embedder: Box<dyn EmbeddingModel>,
        filter: Box<dyn EdgeScorer>,
        gnn: Box<dyn EdgeScorer>,
    ) -> Result<Self, FinderError> {
        cfg.validate()?;
        if embedder.dimension() != cfg.embedding_dim {
            return Err(FinderError::DimensionMismatch {
                expected: cfg.embedding_dim,
                got: embedder.dimension(),
            });
        }
        Ok(Self {
            cfg,
            embedder,
            filter,
            gnn,
        })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.cfg
    }

    /// Returns the track candidates for `points`.
    pub fn find_tracks<P: SpacePoint>(
        &self,
        points: &[P],
    ) -> Result<Vec<TrackCandidate<P::Id>>, FinderError> {
        self.run(points).map(|finding| finding.tracks)
    }

    /// Returns the track candidates for `points` together with stage counters.
    ///
    /// Either every stage completes or an error is returned; no partial
    /// candidates are produced.
    pub fn run<P: SpacePoint>(&self, points: &[P]) -> Result<TrackFinding<P::Id>, FinderError> {
        let n = points.len();
        let mut stats = StageStats {
            spacepoints: n,
            ..StageStats::default()
        };

        let features = extract_features(points);

        let embeddings = self
            .embedder
            .embed(&features)
            .map_err(|source| FinderError::Model {
                stage: Stage::Embedding,
                source,
            })?;
        if embeddings.rows() != n {
            return Err(FinderError::ShapeMismatch {
                stage: Stage::Embedding,
                what: "row count",
                expected: n,
                got: embeddings.rows(),
            });
        }
        if embeddings.cols() != self.cfg.embedding_dim {
            return Err(FinderError::DimensionMismatch {
                expected: self.cfg.embedding_dim,
                got: embeddings.cols(),
            });
        }
        if let Some(pos) = embeddings.as_slice().iter().position(|v| !v.is_finite()) {
            let cols = embeddings.cols();
            return Err(FinderError::NonFiniteOutput {
                stage: Stage::Embedding,
                row: pos / cols,
                col: pos % cols,
            });
        }

        let candidates = build_edges(&embeddings, self.cfg.r_val, self.cfg.knn_val);
        stats.candidate_edges = candidates.len();
        debug!(
            "edge builder: {} edges over {} nodes (r={}, k={})",
            candidates.len(),
            n,
            self.cfg.r_val,
            self.cfg.knn_val
        );

        let filter_scores = self
            .filter
            .score(&features, &candidates)
            .map_err(|source| FinderError::Model {
                stage: Stage::Filter,
                source,
            })?;
        let filtered = EdgeFilter::new(self.cfg.filter_cut).apply(&candidates, &filter_scores)?;
        stats.filtered_edges = filtered.len();

        let raw = self
            .gnn
            .score(&features, &filtered)
            .map_err(|source| FinderError::Model {
                stage: Stage::Gnn,
                source,
            })?;
        let weights: Vec<f32> = raw.into_iter().map(sigmoid).collect();
        let scored = ScoredEdges::new(filtered, weights, Stage::Gnn)?;
        stats.accepted_edges = scored
            .weights
            .iter()
            .filter(|&&w| w > self.cfg.edge_cut)
            .count();

        let labels = label_components(n, &scored, self.cfg.edge_cut)?;
        stats.components = labels.iter().max().map_or(0, |&max| max + 1);

        let ids: Vec<P::Id> = points.iter().map(|sp| sp.id()).collect();
        let tracks = assemble_tracks(&ids, &labels, self.cfg.min_track_size);
        stats.candidates = tracks.len();
        stats.dropped_candidates = stats.components - tracks.len();

        info!(
            "track finding: {} spacepoints -> {} candidates ({} edges built, {} filtered, {} accepted)",
            n,
            tracks.len(),
            stats.candidate_edges,
            stats.filtered_edges,
            stats.accepted_edges
        );

        Ok(TrackFinding { stats, tracks })
    }
}
