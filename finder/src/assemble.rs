use std::collections::HashMap;

use serde::Serialize;

/// Spacepoint identifiers sharing one connected-component label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackCandidate<I> {
    /// Component label the group was built from.
    pub label: usize,

    /// Identifiers in node order.
    pub spacepoints: Vec<I>,
}

impl<I> TrackCandidate<I> {
    pub fn len(&self) -> usize {
        self.spacepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spacepoints.is_empty()
    }
}

/// Groups identifiers by label.
///
/// Groups are created in first-seen node order (not sorted by label value)
/// and identifiers keep node order within a group. Label values are opaque:
/// only equality matters, so sparse or very large labels group the same way
/// as dense ones. Groups smaller than `min_size` are dropped afterwards;
/// `min_size <= 1` keeps everything, singletons included.
///
/// # Panics
///
/// Panics if `ids` and `labels` have different lengths.
pub fn assemble_tracks<I: Clone>(
    ids: &[I],
    labels: &[usize],
    min_size: usize,
) -> Vec<TrackCandidate<I>> {
    assert_eq!(
        ids.len(),
        labels.len(),
        "assemble_tracks: {} ids but {} labels",
        ids.len(),
        labels.len()
    );

    // label -> position in `tracks`
    let mut slot: HashMap<usize, usize> = HashMap::new();
    let mut tracks: Vec<TrackCandidate<I>> = Vec::new();

    for (id, &label) in ids.iter().zip(labels) {
        let idx = *slot.entry(label).or_insert_with(|| {
            tracks.push(TrackCandidate {
                label,
                spacepoints: Vec::new(),
            });
            tracks.len() - 1
        });
        tracks[idx].spacepoints.push(id.clone());
    }

    if min_size > 1 {
        tracks.retain(|t| t.len() >= min_size);
    }
    tracks
}
