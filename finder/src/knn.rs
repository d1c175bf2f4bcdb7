use crate::graph::EdgeList;
use crate::matrix::Matrix;

/// Builds directed candidate edges by bounded nearest-neighbor search in
/// embedding space.
///
/// For every node i, all nodes are ranked by Euclidean distance to i
/// (ties broken by index) and i→j is emitted for each j ≠ i in that order
/// until either the distance exceeds `r_max` or `k_max` edges were emitted
/// for i.
///
/// The result is intentionally not symmetric: j may be among i's nearest
/// neighbors without i being among j's. Edges are grouped by sender in
/// node order and, within a sender, sorted by ascending distance.
///
/// Cost is O(N²·D) for distances plus O(N² log N) for the per-node sorts.
pub fn build_edges(embeddings: &Matrix, r_max: f32, k_max: usize) -> EdgeList {
    let n = embeddings.rows();
    let mut edges = EdgeList::new();
    if n < 2 || k_max == 0 {
        return edges;
    }

    let r_max = r_max as f64;
    let mut ranked: Vec<(f64, usize)> = Vec::with_capacity(n);

    for i in 0..n {
        let query = embeddings.row(i);

        ranked.clear();
        ranked.extend(
            embeddings
                .iter_rows()
                .enumerate()
                .map(|(j, v)| (if j == i { 0.0 } else { euclidean(query, v) }, j)),
        );
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut emitted = 0usize;
        for &(dist, j) in &ranked {
            if j == i {
                continue;
            }
            // Negated so NaN distances also stop the walk.
            if !(dist <= r_max) {
                break;
            }
            edges.push(i, j);
            emitted += 1;
            if emitted == k_max {
                break;
            }
        }
    }

    edges
}

/// Euclidean distance with f64 accumulation.
pub(crate) fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    let mut sum: f64 = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let d = x as f64 - y as f64;
        sum += d * d;
    }
    sum.sqrt()
}
