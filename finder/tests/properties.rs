use std::collections::HashSet;

use proptest::prelude::*;

use gnntrack_finder::{
    assemble_tracks, build_edges, label_components, EdgeList, Matrix, ScoredEdges, Stage,
};

fn embeddings(max_nodes: usize) -> impl Strategy<Value = Matrix> {
    (0..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec(-5.0f32..5.0, n * 3)
            .prop_map(move |data| Matrix::from_vec(n, 3, data).unwrap())
    })
}

fn weighted_graph(max_nodes: usize) -> impl Strategy<Value = (usize, ScoredEdges)> {
    (1..=max_nodes).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0.0f32..1.0);
        prop::collection::vec(edge, 0..n * 3).prop_map(move |triples| {
            let mut edges = EdgeList::new();
            let mut weights = Vec::new();
            for (s, r, w) in triples {
                edges.push(s, r);
                weights.push(w);
            }
            (n, ScoredEdges::new(edges, weights, Stage::Gnn).unwrap())
        })
    })
}

proptest! {
    #[test]
    fn complete_graph_when_unbounded(emb in embeddings(12)) {
        let n = emb.rows();
        let edges = build_edges(&emb, f32::INFINITY, n.max(1));
        prop_assert_eq!(edges.len(), n * n.saturating_sub(1));
    }

    #[test]
    fn never_self_loops(emb in embeddings(16), r in 0.0f32..6.0, k in 0usize..8) {
        let edges = build_edges(&emb, r, k);
        prop_assert!(edges.iter().all(|(s, d)| s != d));
    }

    #[test]
    fn per_node_limits_hold(emb in embeddings(16), r in 0.0f32..6.0, k in 0usize..8) {
        let edges = build_edges(&emb, r, k);
        let n = emb.rows();
        let mut out_degree = vec![0usize; n];
        for (s, d) in edges.iter() {
            out_degree[s] += 1;
            let dist: f32 = emb
                .row(s)
                .iter()
                .zip(emb.row(d))
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f32>()
                .sqrt();
            prop_assert!(dist <= r + 1e-4);
        }
        prop_assert!(out_degree.iter().all(|&deg| deg <= k));
    }

    #[test]
    fn labels_partition_nodes((n, scored) in weighted_graph(20), cut in 0.0f32..1.0) {
        let labels = label_components(n, &scored, cut).unwrap();
        prop_assert_eq!(labels.len(), n);

        let ids: Vec<usize> = (0..n).collect();
        let tracks = assemble_tracks(&ids, &labels, 1);
        let mut seen = HashSet::new();
        for t in &tracks {
            prop_assert!(!t.is_empty());
            for &id in &t.spacepoints {
                prop_assert!(seen.insert(id), "node {} in two groups", id);
            }
        }
        prop_assert_eq!(seen.len(), n);
    }

    #[test]
    fn accepted_edges_share_label((n, scored) in weighted_graph(20), cut in 0.0f32..1.0) {
        let labels = label_components(n, &scored, cut).unwrap();
        for (s, r, w) in scored.iter() {
            if w > cut {
                prop_assert_eq!(labels[s], labels[r]);
            }
        }
    }

    #[test]
    fn nothing_above_cut_gives_singletons((n, scored) in weighted_graph(20)) {
        let labels = label_components(n, &scored, 1.0).unwrap();
        let distinct: HashSet<usize> = labels.iter().copied().collect();
        prop_assert_eq!(distinct.len(), n);
    }

    #[test]
    fn labeling_is_deterministic((n, scored) in weighted_graph(20), cut in 0.0f32..1.0) {
        let a = label_components(n, &scored, cut).unwrap();
        let b = label_components(n, &scored, cut).unwrap();
        prop_assert_eq!(a, b);
    }
}
