//! Graph-based track candidate finding over 3D spacepoints.
//!
//! Turns one event's worth of spacepoints into groups of spacepoints that
//! likely belong to the same particle trajectory.
//!
//! # Architecture
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`extract_features`]: spacepoints -> N×3 matrix (r, φ, z normalized)
//! 2. [`EmbeddingModel::embed`]: features -> N×D embedding
//! 3. [`build_edges`]: bounded radius/k-NN search in embedding space
//! 4. [`EdgeFilter::apply`]: filter scorer + sigmoid + `filterCut`
//! 5. GNN scorer + sigmoid -> per-edge weight
//! 6. [`label_components`]: `edgeCut` + connected components over all N nodes
//! 7. [`assemble_tracks`]: labels -> [`TrackCandidate`] lists
//!
//! The learned models are black boxes behind [`EmbeddingModel`] and
//! [`EdgeScorer`]. The [`reference`] module has deterministic stand-ins for
//! tests and tooling.
//!
//! # Usage
//!
//! ```
//! use gnntrack_finder::reference::{ConstantScorer, FeatureEmbedding};
//! use gnntrack_finder::{FinderConfig, RawSpacePoint, TrackFinder};
//!
//! let cfg = FinderConfig { embedding_dim: 3, ..FinderConfig::default() };
//! let finder = TrackFinder::new(
//!     cfg,
//!     Box::new(FeatureEmbedding::new(3, 1.0)),
//!     Box::new(ConstantScorer(5.0)),
//!     Box::new(ConstantScorer(5.0)),
//! )
//! .unwrap();
//!
//! let points = vec![
//!     RawSpacePoint { id: 7, x: 30.0, y: 1.0, z: 10.0 },
//!     RawSpacePoint { id: 9, x: 31.0, y: 1.0, z: 10.5 },
//! ];
//! let tracks = finder.find_tracks(&points).unwrap();
//! assert_eq!(tracks.len(), 1);
//! assert_eq!(tracks[0].spacepoints, vec![7, 9]);
//! ```

mod assemble;
mod config;
mod connectivity;
mod error;
mod features;
mod filter;
mod graph;
mod knn;
mod matrix;
mod model;
mod pipeline;
pub mod reference;
mod spacepoint;

pub use assemble::{assemble_tracks, TrackCandidate};
pub use config::FinderConfig;
pub use connectivity::{label_components, UnionFind};
pub use error::{ErrorKind, FinderError, ModelError, Stage};
pub use features::{extract_features, FEATURE_DIM, LENGTH_SCALE};
pub use filter::{sigmoid, EdgeFilter};
pub use graph::{EdgeList, ScoredEdges};
pub use knn::build_edges;
pub use matrix::Matrix;
pub use model::{EdgeScorer, EmbeddingModel};
pub use pipeline::{StageStats, TrackFinder, TrackFinding};
pub use spacepoint::{RawSpacePoint, SpacePoint};
