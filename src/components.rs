/// Connected component decomposition
///
/// Partitions the vertex set into maximal connected subsets using union-find.
/// Deterministic given the graph: labels are assigned contiguously in order
/// of each component's lowest-numbered vertex. Isolated vertices form
/// singleton components.
use crate::graph::Graph;
use crate::union_find::UnionFind;

/// Component labeling of a graph's vertices
#[derive(Debug, Clone)]
pub struct ComponentMap {
    labels: Vec<usize>,
    count: usize,
}

/// Label every vertex of `graph` with its component id.
pub fn decompose(graph: &Graph) -> ComponentMap {
    let n = graph.vertex_count();
    let mut uf = UnionFind::new(n);
    for u in 0..n {
        for &v in graph.neighbors(u) {
            if u < v {
                uf.union(u, v);
            }
        }
    }

    // Relabel union-find roots to contiguous 0..count-1
    let mut root_label = vec![usize::MAX; n];
    let mut labels = vec![0; n];
    let mut count = 0;
    for v in 0..n {
        let root = uf.find(v);
        if root_label[root] == usize::MAX {
            root_label[root] = count;
            count += 1;
        }
        labels[v] = root_label[root];
    }

    ComponentMap { labels, count }
}

impl ComponentMap {
    /// Component label of vertex v
    pub fn label(&self, v: usize) -> usize {
        self.labels[v]
    }

    /// All labels, indexed by vertex id
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of connected components
    pub fn count(&self) -> usize {
        self.count
    }

    /// Group vertices by component, each group in ascending vertex order
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, &label) in self.labels.iter().enumerate() {
            groups[label].push(v);
        }
        groups
    }
}
