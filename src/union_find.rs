/// Union-Find (disjoint sets) over dense vertex ids, used to label connected
/// components before per-component sampling.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Find the root of the set containing x, halving paths along the way.
    /// Iterative so that degenerate chains never exhaust the stack.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing x and y. Returns true if they were distinct.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        // Union by rank
        let (small, large) = if self.rank[root_x] < self.rank[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        if self.rank[small] == self.rank[large] {
            self.rank[large] += 1;
        }
        self.set_count -= 1;
        true
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of distinct sets remaining
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}
