/// Statistical uniformity checks for Wilson's algorithm
///
/// A 4-cycle has exactly four spanning trees, one per removed edge. A
/// uniform sampler must hit each of them with equal frequency; this is the
/// property that distinguishes Wilson's algorithm from "any spanning tree"
/// constructions like randomized DFS.
use rand::rngs::StdRng;
use rand::SeedableRng;

use spanforest::forest::sample_tree;
use spanforest::graph::Graph;

const RING_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (0, 3)];

/// Identify a sampled tree of the 4-cycle by the ring edge it omits
fn missing_edge_index(parent: &[usize]) -> usize {
    let tree_edges: Vec<(usize, usize)> = parent
        .iter()
        .enumerate()
        .filter(|&(v, &p)| v != p)
        .map(|(v, &p)| (v.min(p), v.max(p)))
        .collect();
    assert_eq!(tree_edges.len(), 3, "a spanning tree of C4 has 3 edges");

    let missing: Vec<usize> = RING_EDGES
        .iter()
        .enumerate()
        .filter(|(_, e)| !tree_edges.contains(e))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(missing.len(), 1, "exactly one ring edge must be absent");
    missing[0]
}

#[test]
fn test_four_cycle_spanning_trees_are_equally_likely() {
    let graph = Graph::load(4, &RING_EDGES).unwrap();
    let mut rng = StdRng::seed_from_u64(424242);

    let runs = 4000;
    let mut counts = [0usize; 4];
    for _ in 0..runs {
        let parent = sample_tree(&graph, &mut rng).unwrap();
        counts[missing_edge_index(&parent)] += 1;
    }

    // Expected 1000 per tree; the bound is ~7 standard deviations wide, so
    // a correct sampler essentially never fails with this seed while a
    // biased one (e.g. always rooting the walk the same way without loop
    // erasure) lands far outside it.
    let expected = runs / 4;
    for (i, &count) in counts.iter().enumerate() {
        assert!(
            count > expected - 200 && count < expected + 200,
            "tree {i} sampled {count} times out of {runs}; counts {counts:?}"
        );
    }
}

#[test]
fn test_triangle_root_degrees_balanced() {
    // The triangle has 3 spanning trees (drop one edge). Same uniformity
    // argument on a smaller state space.
    let edges = [(0, 1), (1, 2), (0, 2)];
    let graph = Graph::load(3, &edges).unwrap();
    let mut rng = StdRng::seed_from_u64(77);

    let runs = 3000;
    let mut counts = [0usize; 3];
    for _ in 0..runs {
        let parent = sample_tree(&graph, &mut rng).unwrap();
        let tree_edges: Vec<(usize, usize)> = parent
            .iter()
            .enumerate()
            .filter(|&(v, &p)| v != p)
            .map(|(v, &p)| (v.min(p), v.max(p)))
            .collect();
        for (i, e) in edges.iter().enumerate() {
            if !tree_edges.contains(e) {
                counts[i] += 1;
            }
        }
    }

    let expected = runs / 3;
    for (i, &count) in counts.iter().enumerate() {
        assert!(
            count > expected - 180 && count < expected + 180,
            "tree {i} sampled {count} times out of {runs}; counts {counts:?}"
        );
    }
}
