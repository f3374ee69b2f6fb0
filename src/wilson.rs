//! Uniform spanning tree sampling via loop-erased random walks
//!
//! This module implements Wilson's algorithm: starting from an arbitrary
//! root, repeatedly perform a random walk from an uncovered vertex until the
//! walk hits the growing tree, erasing any loops the walk forms, then attach
//! the loop-erased path to the tree. The resulting tree is distributed
//! uniformly over all spanning trees of the input, which is the defining
//! property of the algorithm (not merely "some spanning tree").

use rand::Rng;
use std::fmt;

/// The vertex set handed to the sampler is not actually connected. Indicates
/// a decomposer/assembler contract violation, not a user-recoverable error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    DisconnectedInput { vertex: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::DisconnectedInput { vertex } => write!(
                f,
                "random walk stuck at vertex {vertex} with no neighbors; input set is not connected"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sample a uniformly random spanning tree of a connected vertex set.
///
/// `adj` is the adjacency list over dense vertex ids 0..k-1. Returns a
/// parent array with vertex 0 as the self-parenting root; every other
/// vertex points at its unique parent in the sampled tree.
///
/// Loop erasure is realized as a next-pointer array indexed by vertex,
/// overwritten whenever the walk revisits a vertex. Stale entries from
/// earlier walks are never followed: the commit pass below only traverses
/// pointers written by the walk that just terminated, and stops at the
/// first vertex already in the tree.
pub fn sample_spanning_tree<R: Rng>(
    adj: &[Vec<usize>],
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    let n = adj.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut parent = vec![usize::MAX; n];
    let mut in_tree = vec![false; n];
    let mut next = vec![usize::MAX; n];

    // Arbitrary first tree vertex; it becomes the root.
    in_tree[0] = true;
    parent[0] = 0;

    for start in 0..n {
        if in_tree[start] {
            continue;
        }

        // Random walk until the tree is hit, erasing loops as they form.
        let mut cur = start;
        while !in_tree[cur] {
            let neighbors = &adj[cur];
            if neighbors.is_empty() {
                return Err(SampleError::DisconnectedInput { vertex: cur });
            }
            let step = neighbors[rng.gen_range(0..neighbors.len())];
            next[cur] = step;
            cur = step;
        }

        // Commit the loop-erased path from the walk start into the tree.
        let mut v = start;
        while !in_tree[v] {
            in_tree[v] = true;
            parent[v] = next[v];
            v = next[v];
        }
    }

    Ok(parent)
}
