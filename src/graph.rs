/// Undirected graph model with stable vertex indices 0..n-1
///
/// The graph is immutable once loaded. Edges are normalized to `u < v` and
/// deduplicated; the sampling algorithms tolerate duplicates, but storing
/// each edge once keeps neighbor lists (and walk step distributions) clean.
use std::collections::HashSet;
use std::fmt;

/// Malformed or inconsistent input graph description. Fatal, raised before
/// any sampling takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// An edge references a vertex id outside 0..vertex_count
    VertexOutOfRange {
        edge_index: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// The declared edge count does not match the number of pairs in the input
    EdgeCountMismatch { declared: usize, found: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::VertexOutOfRange {
                edge_index,
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge {edge_index} references vertex {vertex}, but the graph has {vertex_count} vertices"
            ),
            FormatError::EdgeCountMismatch { declared, found } => write!(
                f,
                "declared {declared} edges but input contains {found}"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Simple undirected graph stored as adjacency lists
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Load a graph from an edge list over `vertex_count` vertices.
    ///
    /// Edge pairs may appear in either order; `(u, v)` and `(v, u)` are the
    /// same edge and are stored once. Self-loops carry no spanning
    /// information and are skipped. Fails if any endpoint is out of range.
    pub fn load(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Graph, FormatError> {
        let mut adj = vec![Vec::new(); vertex_count];
        let mut seen = HashSet::with_capacity(edges.len());

        for (i, &(u, v)) in edges.iter().enumerate() {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(FormatError::VertexOutOfRange {
                        edge_index: i,
                        vertex,
                        vertex_count,
                    });
                }
            }
            if u == v {
                continue;
            }
            if !seen.insert((u.min(v), u.max(v))) {
                continue;
            }
            adj[u].push(v);
            adj[v].push(u);
        }

        Ok(Graph {
            adj,
            edge_count: seen.len(),
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `v`
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }
}
