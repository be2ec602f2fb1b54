//! Sample statistics over per-trial thresholds.

/// z-score for a two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Sample mean. `NaN` for an empty slice.
#[must_use]
pub fn sample_mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation (denominator `n - 1`).
///
/// Fewer than two samples give `NaN`.
#[must_use]
pub fn sample_stddev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = sample_mean(samples);
    let ss: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Aggregate of a completed set of trials.
///
/// Built once from the trial results and never updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSummary {
    /// Number of trials aggregated.
    pub trials: usize,
    /// Sample mean of the thresholds.
    pub mean: f64,
    /// Sample standard deviation (`NaN` when `trials == 1`).
    pub stddev: f64,
    /// `mean - 1.96·stddev/√trials`.
    pub confidence_low: f64,
    /// `mean + 1.96·stddev/√trials`.
    pub confidence_high: f64,
}

impl ThresholdSummary {
    /// Computes mean, standard deviation and the 95% interval of `samples`.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        let trials = samples.len();
        let mean = sample_mean(samples);
        let stddev = sample_stddev(samples);
        let half_width = CONFIDENCE_95 * stddev / (trials as f64).sqrt();

        Self {
            trials,
            mean,
            stddev,
            confidence_low: mean - half_width,
            confidence_high: mean + half_width,
        }
    }

    /// `confidence_high - confidence_low`.
    #[must_use]
    pub fn interval_width(&self) -> f64 {
        self.confidence_high - self.confidence_low
    }
}
