//! Track finding command.

use clap::Args;
use serde::Serialize;

use gnntrack_cli::load_spacepoints;
use gnntrack_finder::reference::{FeatureEmbedding, ProximityScorer};
use gnntrack_finder::{FinderConfig, StageStats, TrackCandidate, TrackFinder};

use super::{get_config, output, print_verbose, require_input_file};
use crate::Cli;

/// Find track candidates in a spacepoint file.
///
/// Runs the full pipeline with the built-in reference models: features are
/// embedded directly (scaled, zero-padded) and edges are scored by
/// feature-space proximity. Output lists one entry per candidate with the
/// spacepoint ids in input order.
#[derive(Args)]
pub struct FindCommand {
    /// Scale applied to features by the reference embedding
    #[arg(long, default_value_t = 1.0)]
    embedding_scale: f32,

    /// Feature-space distance at which the reference scorer gives 0.5
    #[arg(long, default_value_t = 0.1)]
    proximity: f32,
}

#[derive(Serialize)]
struct FindReport<'a> {
    input: &'a str,
    config: &'a FinderConfig,
    stats: StageStats,
    tracks: Vec<TrackCandidate<u64>>,
}

impl FindCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let input_file = require_input_file(cli)?;
        let cfg = get_config(cli)?;

        if !(self.proximity > 0.0) {
            anyhow::bail!("--proximity must be positive, got {}", self.proximity);
        }

        let points = load_spacepoints(input_file)?;
        print_verbose(cli, &format!("Input: {} ({} spacepoints)", input_file, points.len()));
        print_verbose(
            cli,
            &format!(
                "rVal={} knnVal={} filterCut={} edgeCut={} minTrackSize={}",
                cfg.r_val, cfg.knn_val, cfg.filter_cut, cfg.edge_cut, cfg.min_track_size
            ),
        );

        let finder = TrackFinder::new(
            cfg.clone(),
            Box::new(FeatureEmbedding::new(cfg.embedding_dim, self.embedding_scale)),
            Box::new(ProximityScorer::new(self.proximity)),
            Box::new(ProximityScorer::new(self.proximity)),
        )?;
        let finding = finder.run(&points)?;

        print_verbose(
            cli,
            &format!(
                "{} candidates from {} components",
                finding.stats.candidates, finding.stats.components
            ),
        );

        let report = FindReport {
            input: input_file,
            config: &cfg,
            stats: finding.stats,
            tracks: finding.tracks,
        };
        output(cli).write(&report)
    }
}
