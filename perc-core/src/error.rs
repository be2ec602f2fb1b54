//! Error type shared by the grid and the estimator.
//!
//! Every fallible operation validates its arguments before touching any
//! state, so an `Err` always leaves the receiver exactly as it was.

use thiserror::Error;

/// Result alias used throughout `perc-core`.
pub type Result<T> = core::result::Result<T, PercolationError>;

/// Errors reported by grid construction, grid queries and estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// Grid side length is zero or too large for the node index space.
    #[error("invalid grid size: side={side} (expected 1..={max})", max = crate::lattice::MAX_SIDE)]
    InvalidSize {
        /// The rejected side length.
        side: usize,
    },

    /// A 1-indexed coordinate fell outside `[1, side]`.
    #[error("index out of range: row={row}, col={col}, side={side}")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid that rejected the coordinate.
        side: usize,
    },

    /// Estimator parameters were rejected (zero side, zero trials, or oversized grid).
    #[error("invalid estimator parameters: side={side}, trials={trials}")]
    InvalidParameters {
        /// Requested side length.
        side: usize,
        /// Requested trial count.
        trials: usize,
    },
}
