use tracing::debug;

use crate::error::{FinderError, Stage};
use crate::graph::ScoredEdges;

/// Disjoint-set forest with path halving and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `a` and `b`. Returns false if they were
    /// already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// Assigns dense labels `0..components` in order of each component's
    /// lowest node index. Returns (labels, component count).
    pub fn labels(&mut self) -> (Vec<usize>, usize) {
        const UNSET: usize = usize::MAX;
        let n = self.parent.len();
        let mut root_label = vec![UNSET; n];
        let mut labels = Vec::with_capacity(n);
        let mut next = 0usize;
        for i in 0..n {
            let root = self.find(i);
            if root_label[root] == UNSET {
                root_label[root] = next;
                next += 1;
            }
            labels.push(root_label[root]);
        }
        (labels, next)
    }
}

/// Partitions nodes `0..n` into weakly connected components.
///
/// An undirected link i–j exists iff some directed edge between them has
/// weight strictly above `edge_cut`. Nodes without accepted edges become
/// singleton components. Labels are dense and assigned in order of each
/// component's lowest node index, so equal inputs give equal labels.
pub fn label_components(
    n: usize,
    scored: &ScoredEdges,
    edge_cut: f32,
) -> Result<Vec<usize>, FinderError> {
    scored.edges.check_bounds(n, Stage::Connectivity)?;
    if scored.weights.len() != scored.edges.len() {
        return Err(FinderError::ShapeMismatch {
            stage: Stage::Connectivity,
            what: "weight count",
            expected: scored.edges.len(),
            got: scored.weights.len(),
        });
    }

    let mut uf = UnionFind::new(n);
    let mut accepted = 0usize;
    for (s, r, w) in scored.iter() {
        if w > edge_cut {
            accepted += 1;
            uf.union(s, r);
        }
    }

    let (labels, components) = uf.labels();
    debug!(
        "connectivity: {} of {} edges above cut {}, {} components over {} nodes",
        accepted,
        scored.len(),
        edge_cut,
        components,
        n
    );
    Ok(labels)
}
