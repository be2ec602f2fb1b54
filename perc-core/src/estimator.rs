//! Monte Carlo estimation of the site percolation threshold.
//!
//! Each trial starts from a fully blocked grid and opens uniformly drawn sites
//! until the grid percolates. The fraction of open sites at that moment is the
//! trial's threshold. Draws are not filtered: a draw that lands on an already
//! open site is still passed to [`PercolationGrid::open`], which ignores it.
//!
//! # Randomness
//!
//! Trial `i` uses its own [`Xoshiro256PlusPlus`] seeded with
//! `seed.wrapping_add(i)`. Trials share nothing mutable, so they run on the
//! rayon pool by default, and a given seed yields the same per-trial thresholds
//! whether the trials ran in parallel or one after another.
//!
//! # Example
//!
//! ```
//! use perc_core::ThresholdEstimator;
//!
//! let est = ThresholdEstimator::builder()
//!     .side(20)
//!     .trials(10)
//!     .seed(42)
//!     .build()?;
//!
//! assert!(est.confidence_low() <= est.mean());
//! assert!(est.mean() <= est.confidence_high());
//! # Ok::<(), perc_core::PercolationError>(())
//! ```

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;
use crate::lattice::MAX_SIDE;
use crate::stats::ThresholdSummary;

/// Result of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// `open_sites / side²` when the grid first percolated.
    pub threshold: f64,
    /// Distinct sites open when the grid first percolated.
    pub open_sites: usize,
    /// Number of `open` calls made, redraws of open sites included.
    pub draws: u64,
}

/// Runs one trial on a fresh `side × side` grid using `rng` for site draws.
///
/// Rows and columns are drawn independently and uniformly from `[1, side]`.
///
/// # Errors
///
/// [`InvalidSize`](PercolationError::InvalidSize) if `side` is not a valid grid size.
pub fn run_trial<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Result<TrialOutcome> {
    let mut grid = PercolationGrid::new(side)?;
    let mut draws = 0u64;

    while !grid.percolates() {
        let row = rng.gen_range(1..=side);
        let col = rng.gen_range(1..=side);
        grid.open(row, col)?;
        draws += 1;
    }

    Ok(TrialOutcome {
        threshold: grid.open_fraction(),
        open_sites: grid.open_site_count(),
        draws,
    })
}

/// Builder for [`ThresholdEstimator`].
///
/// ```
/// use perc_core::EstimatorBuilder;
///
/// let est = EstimatorBuilder::new()
///     .side(8)
///     .trials(4)
///     .seed(7)
///     .parallel(false)
///     .build()?;
/// assert_eq!(est.thresholds().len(), 4);
/// # Ok::<(), perc_core::PercolationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EstimatorBuilder {
    side: usize,
    trials: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl EstimatorBuilder {
    /// Creates a builder. [`side`](Self::side) and [`trials`](Self::trials)
    /// must be set before [`build`](Self::build).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            side: 0,
            trials: 0,
            seed: None,
            parallel: true,
        }
    }

    /// Grid side length for every trial.
    #[must_use]
    pub const fn side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Number of independent trials.
    #[must_use]
    pub const fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Base seed. Without one, a base seed is drawn from the thread RNG.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs trials on the rayon pool (`true`, the default) or sequentially.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the parameters, runs every trial and aggregates the results.
    ///
    /// # Errors
    ///
    /// [`InvalidParameters`](PercolationError::InvalidParameters) if the side
    /// is zero or above [`MAX_SIDE`], or if the trial count is zero.
    pub fn build(self) -> Result<ThresholdEstimator> {
        let Self {
            side,
            trials,
            seed,
            parallel,
        } = self;

        if side == 0 || side > MAX_SIDE || trials == 0 {
            return Err(PercolationError::InvalidParameters { side, trials });
        }

        let seed = seed.unwrap_or_else(rand::random);
        debug!(side, trials, seed, parallel, "starting threshold estimate");

        let run = move |i: usize| -> Result<TrialOutcome> {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = run_trial(side, &mut rng)?;
            debug!(
                trial = i,
                threshold = outcome.threshold,
                draws = outcome.draws,
                "trial complete"
            );
            Ok(outcome)
        };

        // Slot i always holds trial i.
        let outcomes: Vec<TrialOutcome> = if parallel {
            (0..trials).into_par_iter().map(run).collect::<Result<_>>()?
        } else {
            (0..trials).map(run).collect::<Result<_>>()?
        };

        let thresholds: Vec<f64> = outcomes.iter().map(|o| o.threshold).collect();
        let total_draws = outcomes.iter().map(|o| o.draws).sum();
        let summary = ThresholdSummary::from_samples(&thresholds);

        info!(
            side,
            trials,
            mean = summary.mean,
            stddev = summary.stddev,
            ci_low = summary.confidence_low,
            ci_high = summary.confidence_high,
            "threshold estimate complete"
        );

        Ok(ThresholdEstimator {
            side,
            seed,
            thresholds,
            total_draws,
            summary,
        })
    }
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Percolation threshold estimate from repeated randomized trials.
///
/// All values are computed during construction; the accessors are plain reads.
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
    side: usize,
    seed: u64,
    thresholds: Vec<f64>,
    total_draws: u64,
    summary: ThresholdSummary,
}

impl ThresholdEstimator {
    /// Runs `trials` trials on `side × side` grids with a random base seed.
    ///
    /// # Errors
    ///
    /// [`InvalidParameters`](PercolationError::InvalidParameters) if `side` or
    /// `trials` is zero, or `side` exceeds [`MAX_SIDE`].
    pub fn new(side: usize, trials: usize) -> Result<Self> {
        EstimatorBuilder::new().side(side).trials(trials).build()
    }

    /// Like [`new`](Self::new) with a fixed base seed, for reproducible runs.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_seed(side: usize, trials: usize, seed: u64) -> Result<Self> {
        EstimatorBuilder::new()
            .side(side)
            .trials(trials)
            .seed(seed)
            .build()
    }

    /// Returns a builder for finer control over seeding and scheduling.
    #[must_use]
    pub const fn builder() -> EstimatorBuilder {
        EstimatorBuilder::new()
    }

    /// Sample mean of the per-trial thresholds.
    #[inline]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    /// Sample standard deviation of the per-trial thresholds.
    ///
    /// `NaN` for a single trial.
    #[inline]
    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.summary.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    #[inline]
    #[must_use]
    pub fn confidence_low(&self) -> f64 {
        self.summary.confidence_low
    }

    /// High endpoint of the 95% confidence interval.
    #[inline]
    #[must_use]
    pub fn confidence_high(&self) -> f64 {
        self.summary.confidence_high
    }

    /// Grid side length used by every trial.
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of trials run.
    #[inline]
    #[must_use]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Base seed the trial RNGs were derived from.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-trial thresholds, indexed by trial.
    #[inline]
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Total `open` calls across all trials.
    #[inline]
    #[must_use]
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    /// The full aggregate.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> &ThresholdSummary {
        &self.summary
    }
}
