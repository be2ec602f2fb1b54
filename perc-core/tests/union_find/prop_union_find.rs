//! Property-based tests comparing DisjointSet against a naive labelling.

use crate::common::ReferenceSets;

use perc_core::union_find::{DisjointSet, UnionFind};
use proptest::prelude::*;

proptest! {
    /// Any sequence of unions leaves the same partition as the reference.
    #[test]
    fn prop_matches_reference_partition(
        len in 1usize..64,
        ops in proptest::collection::vec((0usize..1000, 0usize..1000), 0..120)
    ) {
        let mut uf = DisjointSet::new(len);
        let mut reference = ReferenceSets::new(len);

        for (a, b) in ops {
            let (a, b) = (a % len, b % len);
            let merged = uf.union(a as u32, b as u32);
            let expected = reference.union(a, b);
            prop_assert_eq!(merged, expected, "union({}, {}) disagreed", a, b);
        }

        prop_assert_eq!(uf.count(), reference.count());
        for a in 0..len {
            prop_assert_eq!(uf.size_of(a as u32), reference.size_of(a));
            for b in 0..len {
                prop_assert_eq!(
                    uf.connected(a as u32, b as u32),
                    reference.connected(a, b),
                    "connected({}, {}) disagreed", a, b
                );
            }
        }
    }

    /// After find(x), x points directly at its root.
    #[test]
    fn prop_find_leaves_node_at_depth_one(
        len in 2usize..64,
        ops in proptest::collection::vec((0usize..1000, 0usize..1000), 0..120),
        probe in 0usize..1000
    ) {
        let mut uf = DisjointSet::new(len);
        for (a, b) in ops {
            uf.union((a % len) as u32, (b % len) as u32);
        }

        let x = (probe % len) as u32;
        let root = uf.find(x);
        prop_assert_eq!(uf.parent(root), root);
        prop_assert_eq!(uf.parent(x), root);
    }
}
