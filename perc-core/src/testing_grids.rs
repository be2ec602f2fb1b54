use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;

/// Site percolation threshold of the infinite square lattice (Newman-Ziff).
pub const SQUARE_SITE_THRESHOLD: f64 = 0.592_746;

/// Grid sides used by the benchmark driver when none are given.
pub const STANDARD_SIDES: [usize; 4] = [20, 50, 100, 200];

/// Predefined estimator configurations for testing and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateConfig {
    /// Grid side length
    pub side: usize,
    /// Number of trials
    pub trials: usize,
}

/// Named estimator configurations.
pub struct TestGrids;

impl TestGrids {
    /// Single site, single trial
    pub const TINY: EstimateConfig = EstimateConfig { side: 1, trials: 1 };

    /// 20x20, 100 trials
    pub const SMALL: EstimateConfig = EstimateConfig {
        side: 20,
        trials: 100,
    };

    /// 100x100, 50 trials
    pub const MEDIUM: EstimateConfig = EstimateConfig {
        side: 100,
        trials: 50,
    };

    /// 200x200, 30 trials
    pub const LARGE: EstimateConfig = EstimateConfig {
        side: 200,
        trials: 30,
    };

    /// All configurations, smallest first
    pub const ALL: [EstimateConfig; 4] = [Self::TINY, Self::SMALL, Self::MEDIUM, Self::LARGE];
}

/// Builds a grid from an ASCII picture, one string per row.
///
/// `.` marks an open site, any other character a blocked one. Sites are opened
/// in row-major order. The picture must be square.
///
/// ```
/// use perc_core::testing_grids::grid_from_pattern;
///
/// let mut grid = grid_from_pattern(&[
///     ".##",
///     ".##",
///     ".#.",
/// ])?;
/// assert!(grid.percolates());
/// assert!(!grid.is_full(3, 3)?);
/// # Ok::<(), perc_core::PercolationError>(())
/// ```
///
/// # Errors
///
/// [`InvalidSize`](crate::PercolationError::InvalidSize) if the picture is empty
/// or a row's length differs from the number of rows.
pub fn grid_from_pattern(rows: &[&str]) -> Result<PercolationGrid> {
    let side = rows.len();
    if let Some(bad) = rows.iter().find(|r| r.chars().count() != side) {
        return Err(PercolationError::InvalidSize {
            side: bad.chars().count(),
        });
    }

    let mut grid = PercolationGrid::new(side)?;
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '.' {
                grid.open(r + 1, c + 1)?;
            }
        }
    }
    Ok(grid)
}
