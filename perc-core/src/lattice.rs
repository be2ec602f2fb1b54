//! Site indexing for the N×N square lattice.
//!
//! Sites are addressed with 1-indexed `(row, col)` pairs in `[1, side]`. Inside
//! the disjoint-set structures every site gets a flat row-major index, and the
//! two synthetic boundary nodes sit directly after the real sites:
//!
//! ```text
//! side = 3
//!
//!   (1,1) (1,2) (1,3)        0 1 2
//!   (2,1) (2,2) (2,3)   ->   3 4 5        virtual top    = 9
//!   (3,1) (3,2) (3,3)        6 7 8        virtual bottom = 10
//! ```
//!
//! Connectivity is the usual 4-neighbor square lattice:
//!
//! ```text
//!     N
//!     |
//! W - o - E
//!     |
//!     S
//! ```

use crate::error::{PercolationError, Result};

/// Largest supported side length.
///
/// Node indices are `u32`; `side² + 2` must fit.
pub const MAX_SIDE: usize = 65_535;

/// Index arithmetic for a square lattice of fixed side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    side: usize,
}

impl Lattice {
    /// Creates the indexing for a `side × side` lattice.
    ///
    /// # Errors
    ///
    /// [`PercolationError::InvalidSize`] if `side` is zero or exceeds [`MAX_SIDE`].
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 || side > MAX_SIDE {
            return Err(PercolationError::InvalidSize { side });
        }
        Ok(Self { side })
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of real sites (`side²`).
    #[inline]
    #[must_use]
    pub const fn num_sites(&self) -> usize {
        self.side * self.side
    }

    /// Synthetic node joined to every open site in the first row.
    #[inline]
    #[must_use]
    pub const fn virtual_top(&self) -> u32 {
        self.num_sites() as u32
    }

    /// Synthetic node joined to every open site in the last row.
    ///
    /// Only the percolation structure allocates this node.
    #[inline]
    #[must_use]
    pub const fn virtual_bottom(&self) -> u32 {
        self.num_sites() as u32 + 1
    }

    /// Returns `true` if `(row, col)` lies inside `[1, side] × [1, side]`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && row <= self.side && col >= 1 && col <= self.side
    }

    /// Checks `(row, col)` against the lattice bounds.
    ///
    /// # Errors
    ///
    /// [`PercolationError::IndexOutOfRange`] when either coordinate is outside `[1, side]`.
    #[inline]
    pub fn validate(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(PercolationError::IndexOutOfRange {
                row,
                col,
                side: self.side,
            })
        }
    }

    /// Flat row-major index of a validated site.
    ///
    /// # Errors
    ///
    /// [`PercolationError::IndexOutOfRange`] when either coordinate is outside `[1, side]`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Result<u32> {
        self.validate(row, col)?;
        Ok(self.index_unchecked(row, col))
    }

    // Caller has already validated the coordinate.
    #[inline(always)]
    pub(crate) const fn index_unchecked(&self, row: usize, col: usize) -> u32 {
        ((row - 1) * self.side + (col - 1)) as u32
    }

    /// Calls `f(row, col)` for each in-bounds orthogonal neighbor of `(row, col)`.
    ///
    /// Order is up, down, left, right. The site itself is not validated; out of
    /// range neighbors are skipped.
    #[inline]
    pub fn for_each_neighbor<F>(&self, row: usize, col: usize, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        if row > 1 {
            f(row - 1, col);
        }
        if row < self.side {
            f(row + 1, col);
        }
        if col > 1 {
            f(row, col - 1);
        }
        if col < self.side {
            f(row, col + 1);
        }
    }
}
