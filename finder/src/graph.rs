use crate::error::{FinderError, Stage};

/// Directed edge list as two parallel index arrays.
///
/// Edges are not deduplicated: i→j may appear without j→i.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub senders: Vec<usize>,
    pub receivers: Vec<usize>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            senders: Vec::with_capacity(capacity),
            receivers: Vec::with_capacity(capacity),
        }
    }

    /// Builds an edge list from (sender, receiver) pairs.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        let mut edges = Self::with_capacity(pairs.len());
        for &(s, r) in pairs {
            edges.push(s, r);
        }
        edges
    }

    /// Appends the directed edge `sender -> receiver`.
    pub fn push(&mut self, sender: usize, receiver: usize) {
        self.senders.push(sender);
        self.receivers.push(receiver);
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Iterates (sender, receiver) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.senders.iter().copied().zip(self.receivers.iter().copied())
    }

    /// Keeps only the edges whose flag is true, preserving order.
    /// `keep` must have one entry per edge.
    pub fn select(&self, keep: &[bool]) -> EdgeList {
        debug_assert_eq!(keep.len(), self.len());
        let mut out = EdgeList::new();
        for ((s, r), &k) in self.iter().zip(keep) {
            if k {
                out.push(s, r);
            }
        }
        out
    }

    /// Checks that both arrays have equal length and every index is in
    /// `[0, nodes)`.
    pub fn check_bounds(&self, nodes: usize, stage: Stage) -> Result<(), FinderError> {
        if self.senders.len() != self.receivers.len() {
            return Err(FinderError::ShapeMismatch {
                stage,
                what: "receiver count",
                expected: self.senders.len(),
                got: self.receivers.len(),
            });
        }
        if let Some(&index) = self
            .senders
            .iter()
            .chain(self.receivers.iter())
            .find(|&&i| i >= nodes)
        {
            return Err(FinderError::EdgeOutOfRange {
                stage,
                index,
                nodes,
            });
        }
        Ok(())
    }
}

/// Edge list with one weight in (0, 1) per edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredEdges {
    pub edges: EdgeList,
    pub weights: Vec<f32>,
}

impl ScoredEdges {
    /// Pairs edges with weights. Fails if the counts differ.
    pub fn new(edges: EdgeList, weights: Vec<f32>, stage: Stage) -> Result<Self, FinderError> {
        if weights.len() != edges.len() {
            return Err(FinderError::ShapeMismatch {
                stage,
                what: "score count",
                expected: edges.len(),
                got: weights.len(),
            });
        }
        Ok(Self { edges, weights })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates (sender, receiver, weight) triples in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.edges
            .iter()
            .zip(self.weights.iter().copied())
            .map(|((s, r), w)| (s, r, w))
    }
}
