//! Union Find (Disjoint Set Forest) over a fixed set of node indices.
//!
//! The percolation grid keeps two of these side by side. Optimizations:
//!
//! - **Fast path for self-rooted nodes**: A freshly opened site is usually its
//!   own root, so `find` checks `parents[i] == i` before doing any traversal.
//! - **Full path compression**: The slow path walks to the root, then walks the
//!   same path again pointing every visited node straight at the root. Both
//!   passes are loops, so stack usage does not depend on grid size.
//! - **Union by size**: The root of the smaller tree is attached under the root
//!   of the larger one, keeping tree height at O(log n).

/// Disjoint set forest operations.
///
/// Each element starts in its own set. [`union`](Self::union) merges two sets,
/// [`find`](Self::find) returns the representative (root) of an element's set.
/// Two elements are in the same set iff they have the same root.
///
/// ```text
/// Before union(A, B):     After (|A| >= |B|):
///   A    B                    A (root)
///  /|    |                   /|\
/// 1 2    3                  1 2 B
///                               |
///                               3
/// ```
///
/// | Operation | Time Complexity |
/// |-----------|-----------------|
/// | `find` | O(α(n)) amortized |
/// | `union` | O(α(n)) amortized |
/// | `union_roots` | O(1) |
pub trait UnionFind {
    /// Finds the root (set representative) of node `i`.
    ///
    /// Repeated calls return the same root until a later union merges the set.
    /// Every node visited on the way is re-pointed directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid node index.
    fn find(&mut self, i: u32) -> u32;

    /// Merges two sets given their roots.
    ///
    /// Returns `true` if the sets were merged, `false` if `root_u == root_v`.
    ///
    /// Both arguments must be roots (`find(r) == r`); passing a non-root
    /// corrupts the size bookkeeping.
    fn union_roots(&mut self, root_u: u32, root_v: u32) -> bool;

    /// Merges the sets containing `u` and `v`.
    ///
    /// Returns `true` if they were previously disjoint.
    fn union(&mut self, u: u32, v: u32) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        self.union_roots(root_u, root_v)
    }

    /// Returns `true` if `u` and `v` are in the same set.
    fn connected(&mut self, u: u32, v: u32) -> bool {
        self.find(u) == self.find(v)
    }
}

/// Weighted quick-union with full path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointer per node. A root is its own parent.
    parents: Vec<u32>,
    /// Tree size, meaningful only at roots.
    sizes: Vec<u32>,
    count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len-1}`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `u32::MAX as usize + 1`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len as u64 <= u64::from(u32::MAX) + 1, "node count {len} exceeds u32 index space");
        Self {
            parents: (0..len).map(|i| i as u32).collect(),
            sizes: vec![1; len],
            count: len,
        }
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if the structure holds no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` once every node belongs to one set.
    #[inline]
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.count == 1
    }

    /// Current parent pointer of `i`, without compressing anything.
    #[inline]
    #[must_use]
    pub fn parent(&self, i: u32) -> u32 {
        self.parents[i as usize]
    }

    /// Size of the set containing `i`.
    pub fn size_of(&mut self, i: u32) -> usize {
        let root = self.find(i);
        self.sizes[root as usize] as usize
    }

    // Cold path: two-pass full compression.
    #[inline(never)]
    #[cold]
    fn find_slow(&mut self, i: u32, mut p: u32) -> u32 {
        // First pass: locate the root.
        loop {
            let grandparent = self.parents[p as usize];
            if grandparent == p {
                break;
            }
            p = grandparent;
        }
        let root = p;

        // Second pass: point every node on the path at the root.
        let mut node = i;
        while node != root {
            let next = self.parents[node as usize];
            self.parents[node as usize] = root;
            node = next;
        }
        root
    }
}

impl UnionFind for DisjointSet {
    #[inline(always)]
    fn find(&mut self, i: u32) -> u32 {
        let p = self.parents[i as usize];
        if p == i {
            return i; // Fast path: self-rooted
        }
        self.find_slow(i, p)
    }

    #[inline]
    fn union_roots(&mut self, root_u: u32, root_v: u32) -> bool {
        if root_u == root_v {
            return false;
        }

        // Ties keep root_u on top.
        let (child, parent) = if self.sizes[root_u as usize] < self.sizes[root_v as usize] {
            (root_u, root_v)
        } else {
            (root_v, root_u)
        };

        self.parents[child as usize] = parent;
        self.sizes[parent as usize] += self.sizes[child as usize];
        self.count -= 1;
        true
    }
}
