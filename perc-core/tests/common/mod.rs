//! Shared test utilities for perc-core tests.
//!
//! Naive reference models the optimized structures are checked against.

#![allow(dead_code)] // Not all test files use all functions

use std::collections::VecDeque;

/// Open/blocked grid answering fullness by breadth-first flood fill.
pub struct ReferenceGrid {
    pub side: usize,
    pub open: Vec<Vec<bool>>,
}

impl ReferenceGrid {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            open: vec![vec![false; side]; side],
        }
    }

    /// Opens a 1-indexed site.
    pub fn open(&mut self, row: usize, col: usize) {
        self.open[row - 1][col - 1] = true;
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().flatten().filter(|&&o| o).count()
    }

    /// Sites reachable from an open top-row site, 0-indexed `[row][col]`.
    pub fn full_sites(&self) -> Vec<Vec<bool>> {
        let n = self.side;
        let mut full = vec![vec![false; n]; n];
        let mut queue = VecDeque::new();

        for c in 0..n {
            if self.open[0][c] {
                full[0][c] = true;
                queue.push_back((0usize, c));
            }
        }

        while let Some((r, c)) = queue.pop_front() {
            let mut visit = |nr: usize, nc: usize| {
                if self.open[nr][nc] && !full[nr][nc] {
                    full[nr][nc] = true;
                    queue.push_back((nr, nc));
                }
            };
            if r > 0 {
                visit(r - 1, c);
            }
            if r + 1 < n {
                visit(r + 1, c);
            }
            if c > 0 {
                visit(r, c - 1);
            }
            if c + 1 < n {
                visit(r, c + 1);
            }
        }

        full
    }

    pub fn is_full(&self, row: usize, col: usize) -> bool {
        self.full_sites()[row - 1][col - 1]
    }

    pub fn percolates(&self) -> bool {
        self.full_sites()[self.side - 1].iter().any(|&f| f)
    }
}

/// Quadratic-time disjoint sets: one label per element, relabel on union.
pub struct ReferenceSets {
    pub labels: Vec<usize>,
}

impl ReferenceSets {
    pub fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (la, lb) = (self.labels[a], self.labels[b]);
        if la == lb {
            return false;
        }
        for l in &mut self.labels {
            if *l == lb {
                *l = la;
            }
        }
        true
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    pub fn count(&self) -> usize {
        let mut seen: Vec<usize> = self.labels.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    pub fn size_of(&self, a: usize) -> usize {
        let la = self.labels[a];
        self.labels.iter().filter(|&&l| l == la).count()
    }
}
