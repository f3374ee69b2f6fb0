//! Forest assembly: one uniform spanning tree per connected component
//!
//! Builds a transient subgraph view for each component (dense local ids plus
//! a local/global remap), runs the sampler on it, and writes the remapped
//! parents into one global parent array. Components share no vertices, so
//! sampling is dispatched across the rayon pool and merged by
//! disjoint-range writes.

use crate::components::{decompose, ComponentMap};
use crate::graph::Graph;
use crate::wilson::{sample_spanning_tree, SampleError};
use anyhow::{bail, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Local view of one connected component with dense 0..k-1 vertex ids.
/// Owned by the per-component sampling step and discarded after remapping.
struct Subgraph {
    adj: Vec<Vec<usize>>,
}

impl Subgraph {
    /// Induce the subgraph on `members`. `global_to_local` must already map
    /// every member to its index within the group; neighbors of a member
    /// are always members themselves, so the lookup never escapes the group.
    fn extract(graph: &Graph, members: &[usize], global_to_local: &[usize]) -> Subgraph {
        let adj = members
            .iter()
            .map(|&v| {
                graph
                    .neighbors(v)
                    .iter()
                    .map(|&w| global_to_local[w])
                    .collect()
            })
            .collect();
        Subgraph { adj }
    }
}

/// Derive a per-component seed from the master seed. The mix is a bijection
/// of the component index, so no two components ever share a seed.
fn component_seed(base: u64, component: u64) -> u64 {
    let mut z = base.wrapping_add(component.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Sample a uniform spanning tree of every component and merge the results
/// into a single global parent array. Per-component roots self-parent at
/// their global id; no cross-component entries are ever created.
pub fn assemble<R: Rng>(
    graph: &Graph,
    components: &ComponentMap,
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    let n = graph.vertex_count();
    let members = components.members();

    // Global -> local id map, shared read-only by all components: the
    // groups partition the vertex set, so entries never collide.
    let mut global_to_local = vec![0; n];
    for group in &members {
        for (local, &v) in group.iter().enumerate() {
            global_to_local[v] = local;
        }
    }

    let base: u64 = rng.gen();
    let local_parents: Vec<Vec<usize>> = members
        .par_iter()
        .enumerate()
        .map(|(c, group)| {
            log::debug!("sampling component {c} ({} vertices)", group.len());
            let subgraph = Subgraph::extract(graph, group, &global_to_local);
            let mut rng = SmallRng::seed_from_u64(component_seed(base, c as u64));
            sample_spanning_tree(&subgraph.adj, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    let mut parent = vec![0; n];
    for (group, local_parent) in members.iter().zip(&local_parents) {
        for (local, &v) in group.iter().enumerate() {
            parent[v] = group[local_parent[local]];
        }
    }
    Ok(parent)
}

/// Sample a uniform spanning tree of a connected graph. Bails if the graph
/// has more than one component (or none); use [`assemble`] for forests.
pub fn sample_tree<R: Rng>(graph: &Graph, rng: &mut R) -> Result<Vec<usize>> {
    let components = decompose(graph);
    if components.count() != 1 {
        bail!(
            "graph has {} components; a single spanning tree requires a connected graph",
            components.count()
        );
    }
    Ok(assemble(graph, &components, rng)?)
}
