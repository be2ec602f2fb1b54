//! Site percolation grid with backwash-free fullness queries.
//!
//! # Two disjoint sets
//!
//! The grid keeps two [`DisjointSet`]s over the same site indices:
//!
//! | Structure | Nodes | Answers |
//! |-----------|-------|---------|
//! | `full` | side² sites + virtual top | [`is_full`](PercolationGrid::is_full) |
//! | `perc` | side² sites + virtual top + virtual bottom | [`percolates`](PercolationGrid::percolates) |
//!
//! Only `perc` ever links to the bottom boundary. With a single structure, an
//! open bottom-row site would become "full" as soon as any path reached the
//! bottom, even without its own path to the top (backwash):
//!
//! ```text
//! row 1   . # #        . = open, # = blocked
//! row 2   . # #
//! row 3   . # .        (3,3) touches only the bottom boundary, yet a single
//!                      structure links it to the top via the virtual bottom
//! ```
//!
//! # Open state
//!
//! Open flags are packed one bit per site, 64 sites per `u64` word, in the
//! same row-major order as the disjoint-set indices.

use crate::error::Result;
use crate::lattice::Lattice;
use crate::union_find::{DisjointSet, UnionFind};

/// N×N site percolation system.
///
/// All sites start blocked. Sites only ever change from blocked to open.
///
/// # Example
///
/// ```
/// use perc_core::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(3)?;
/// grid.open(1, 1)?;
/// grid.open(2, 1)?;
/// assert!(!grid.percolates());
///
/// grid.open(3, 1)?;
/// assert!(grid.percolates());
/// assert!(grid.is_full(3, 1)?);
/// # Ok::<(), perc_core::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    lattice: Lattice,
    open: Vec<u64>,
    open_sites: usize,
    full: DisjointSet,
    perc: DisjointSet,
}

impl PercolationGrid {
    /// Creates a `side × side` grid with every site blocked.
    ///
    /// # Errors
    ///
    /// [`InvalidSize`](crate::PercolationError::InvalidSize) if `side` is zero
    /// or larger than [`MAX_SIDE`](crate::MAX_SIDE).
    pub fn new(side: usize) -> Result<Self> {
        let lattice = Lattice::new(side)?;
        let sites = lattice.num_sites();

        Ok(Self {
            lattice,
            open: vec![0u64; sites.div_ceil(64)],
            open_sites: 0,
            full: DisjointSet::new(sites + 1),
            perc: DisjointSet::new(sites + 2),
        })
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.lattice.side()
    }

    /// Opens `(row, col)` if it is blocked. Opening an open site does nothing.
    ///
    /// Newly opened sites are joined to every open orthogonal neighbor in both
    /// structures, to the virtual top in both structures when in row 1, and to
    /// the virtual bottom in the percolation structure only when in row `side`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::PercolationError::IndexOutOfRange) if either
    /// coordinate is outside `[1, side]`. The grid is left untouched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.lattice.index(row, col)?;
        if self.bit(idx) {
            return Ok(());
        }

        self.set_bit(idx);
        self.open_sites += 1;

        let side = self.lattice.side();
        if row == 1 {
            let top = self.lattice.virtual_top();
            self.full.union(idx, top);
            self.perc.union(idx, top);
        }
        // Bottom link lives in `perc` only.
        if row == side {
            self.perc.union(idx, self.lattice.virtual_bottom());
        }

        let lattice = self.lattice;
        let open = &self.open;
        let (full, perc) = (&mut self.full, &mut self.perc);
        lattice.for_each_neighbor(row, col, |r, c| {
            let n = lattice.index_unchecked(r, c);
            if test_bit(open, n) {
                full.union(idx, n);
                perc.union(idx, n);
            }
        });

        Ok(())
    }

    /// Returns `true` if `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::PercolationError::IndexOutOfRange) on bad coordinates.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.lattice.index(row, col)?;
        Ok(self.bit(idx))
    }

    /// Returns `true` if `(row, col)` is still blocked.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::PercolationError::IndexOutOfRange) on bad coordinates.
    pub fn is_blocked(&self, row: usize, col: usize) -> Result<bool> {
        self.is_open(row, col).map(|open| !open)
    }

    /// Returns `true` if `(row, col)` is open and connected to the top row
    /// through open sites.
    ///
    /// Takes `&mut self` because lookups compress paths inside the fullness
    /// structure. Observable state does not change.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::PercolationError::IndexOutOfRange) on bad coordinates.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.lattice.index(row, col)?;
        if !self.bit(idx) {
            return Ok(false);
        }
        Ok(self.full.connected(idx, self.lattice.virtual_top()))
    }

    /// Number of distinct sites opened so far.
    #[inline]
    #[must_use]
    pub fn open_site_count(&self) -> usize {
        self.open_sites
    }

    /// Fraction of sites that are open.
    #[inline]
    #[must_use]
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / self.lattice.num_sites() as f64
    }

    /// Returns `true` if an open path joins the top row to the bottom row.
    ///
    /// Takes `&mut self` for the same reason as [`is_full`](Self::is_full).
    pub fn percolates(&mut self) -> bool {
        let top = self.lattice.virtual_top();
        let bottom = self.lattice.virtual_bottom();
        self.perc.connected(top, bottom)
    }

    #[inline(always)]
    fn bit(&self, idx: u32) -> bool {
        test_bit(&self.open, idx)
    }

    #[inline(always)]
    fn set_bit(&mut self, idx: u32) {
        let idx = idx as usize;
        self.open[idx >> 6] |= 1u64 << (idx & 63);
    }
}

#[inline(always)]
fn test_bit(words: &[u64], idx: u32) -> bool {
    let idx = idx as usize;
    (words[idx >> 6] >> (idx & 63)) & 1 != 0
}
