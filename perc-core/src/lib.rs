//! # perc-core: Site Percolation and Threshold Estimation
//!
//! `perc-core` models site percolation on an N×N square grid. Sites are opened
//! one at a time; the grid answers whether an open path joins the top row to
//! the bottom row, and whether a given site is connected to the top ("full").
//!
//! ## Overview
//!
//! 1. **[`PercolationGrid`]** - open/blocked state plus two union-find
//!    structures, one with a virtual bottom node and one without. Fullness is
//!    answered from the structure without it, so sites that only touch the
//!    bottom boundary are never reported full (no backwash).
//! 2. **[`ThresholdEstimator`]** - repeated randomized trials, each opening
//!    uniformly drawn sites until the grid percolates, aggregated into a mean,
//!    a sample standard deviation and a 95% confidence interval.
//!
//! ## Quick Start
//!
//! ```
//! use perc_core::{PercolationGrid, ThresholdEstimator};
//!
//! let mut grid = PercolationGrid::new(3)?;
//! for row in 1..=3 {
//!     grid.open(row, 2)?;
//! }
//! assert!(grid.percolates());
//! assert_eq!(grid.open_site_count(), 3);
//!
//! let est = ThresholdEstimator::with_seed(16, 20, 42)?;
//! assert!(est.mean() > 0.0 && est.mean() < 1.0);
//! # Ok::<(), perc_core::PercolationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`union_find`] - Disjoint set forest with union by size and path compression
//! - [`lattice`] - 1-indexed site coordinates to flat node indices
//! - [`grid`] - The percolation system
//! - [`stats`] - Sample mean, standard deviation and confidence interval
//! - [`estimator`] - Monte Carlo driver
//! - [`testing_grids`] - Standard configurations and pattern-built grids

#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Error type and result alias.
pub mod error;

/// Monte Carlo threshold estimation.
pub mod estimator;

/// Percolation grid with backwash-free fullness.
pub mod grid;

/// Site indexing and neighbor enumeration.
pub mod lattice;

/// Aggregate statistics over trial results.
pub mod stats;

/// Pre-configured estimator sizes and grid fixtures.
pub mod testing_grids;

/// Disjoint set (union-find) structure.
pub mod union_find;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::{PercolationError, Result};
pub use estimator::{EstimatorBuilder, ThresholdEstimator, TrialOutcome, run_trial};
pub use grid::PercolationGrid;
pub use lattice::{Lattice, MAX_SIDE};
pub use stats::{CONFIDENCE_95, ThresholdSummary, sample_mean, sample_stddev};
pub use testing_grids::{EstimateConfig, SQUARE_SITE_THRESHOLD, TestGrids};
pub use union_find::{DisjointSet, UnionFind};
