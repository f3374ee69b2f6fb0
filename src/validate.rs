//! Structural validation of a sampled spanning forest
//!
//! Proves that a parent array encodes a correct forest: the right number of
//! self-parenting roots, no cycles, and every vertex reachable from exactly
//! one root. Checks run in order and short-circuit on the first failure,
//! identifying the offending vertex or counts. A correctly implemented
//! sampler never trips these checks; a failure means a sampler or assembler
//! bug, so nothing is retried.

use std::collections::VecDeque;
use std::fmt;

/// Structural defect found in a produced forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Number of self-parenting vertices differs from the component count
    RootCountMismatch { expected: usize, found: usize },
    /// A vertex was reached again while its traversal was still open
    CycleDetected { vertex: usize },
    /// A vertex is unreachable from every root (covers orphan cycles too)
    IncompleteCoverage { vertex: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RootCountMismatch { expected, found } => {
                write!(f, "found {found} roots instead of {expected}")
            }
            ValidationError::CycleDetected { vertex } => {
                write!(f, "cycle detected at vertex {vertex}")
            }
            ValidationError::IncompleteCoverage { vertex } => {
                write!(f, "vertex {vertex} is not reachable from any root")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Shape summary of a validated forest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStats {
    /// Maximum over roots of per-root tree depth
    pub max_depth: usize,
    /// Mean over roots of per-root max depth
    pub avg_depth: f64,
}

// Traversal states for cycle detection
const UNVISITED: u8 = 0;
const OPEN: u8 = 1;
const CLOSED: u8 = 2;

/// Validate `parent` as a spanning forest with `expected_components` trees
/// and compute its depth statistics.
pub fn validate(
    parent: &[usize],
    expected_components: usize,
) -> Result<DepthStats, ValidationError> {
    let n = parent.len();

    let roots: Vec<usize> = (0..n).filter(|&v| parent[v] == v).collect();
    if roots.len() != expected_components {
        return Err(ValidationError::RootCountMismatch {
            expected: expected_components,
            found: roots.len(),
        });
    }

    // Forward adjacency implied by the parent array. An out-of-range parent
    // leaves its child unreachable and is caught as incomplete coverage.
    let mut children = vec![Vec::new(); n];
    for v in 0..n {
        if parent[v] != v && parent[v] < n {
            children[parent[v]].push(v);
        }
    }

    // Explicit-stack DFS with open/closed states instead of recursion, so
    // deep trees cannot overflow the call stack.
    let mut state = vec![UNVISITED; n];
    for &root in &roots {
        state[root] = OPEN;
        let mut stack = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (v, child_index) = *frame;
            if child_index < children[v].len() {
                frame.1 += 1;
                let child = children[v][child_index];
                match state[child] {
                    UNVISITED => {
                        state[child] = OPEN;
                        stack.push((child, 0));
                    }
                    OPEN => return Err(ValidationError::CycleDetected { vertex: child }),
                    _ => {}
                }
            } else {
                state[v] = CLOSED;
                stack.pop();
            }
        }
    }

    if let Some(v) = (0..n).find(|&v| state[v] != CLOSED) {
        return Err(ValidationError::IncompleteCoverage { vertex: v });
    }

    // Per-root BFS depth. Trees are vertex-disjoint, so one scratch array
    // serves every root.
    let mut depth = vec![0; n];
    let mut max_depth = 0;
    let mut depth_total = 0.0;
    for &root in &roots {
        let d = tree_depth(root, &children, &mut depth);
        max_depth = max_depth.max(d);
        depth_total += d as f64;
    }
    let avg_depth = if roots.is_empty() {
        0.0
    } else {
        depth_total / roots.len() as f64
    };

    Ok(DepthStats {
        max_depth,
        avg_depth,
    })
}

/// Breadth-first max distance from `root` through child edges
fn tree_depth(root: usize, children: &[Vec<usize>], depth: &mut [usize]) -> usize {
    let mut queue = VecDeque::new();
    depth[root] = 0;
    queue.push_back(root);
    let mut max = 0;

    while let Some(cur) = queue.pop_front() {
        for &child in &children[cur] {
            depth[child] = depth[cur] + 1;
            max = max.max(depth[child]);
            queue.push_back(child);
        }
    }
    max
}
