//! Result rows and console/CSV formatting.

use std::time::Duration;

use perc_core::ThresholdEstimator;

/// One completed estimate, ready for printing.
#[derive(Debug, Clone)]
pub struct EstimateRow {
    /// Grid side length.
    pub side: usize,
    /// Trials run.
    pub trials: usize,
    /// Base seed the trial RNGs were derived from.
    pub seed: u64,
    /// Sample mean threshold.
    pub mean: f64,
    /// Sample standard deviation.
    pub stddev: f64,
    /// 95% confidence interval lower bound.
    pub ci_low: f64,
    /// 95% confidence interval upper bound.
    pub ci_high: f64,
    /// `open` calls across all trials.
    pub total_draws: u64,
    /// Wall-clock time for the whole estimate.
    pub elapsed: Duration,
}

impl EstimateRow {
    /// Captures the aggregate of a finished estimator.
    pub fn from_estimator(est: &ThresholdEstimator, elapsed: Duration) -> Self {
        Self {
            side: est.side(),
            trials: est.trials(),
            seed: est.seed(),
            mean: est.mean(),
            stddev: est.stddev(),
            ci_low: est.confidence_low(),
            ci_high: est.confidence_high(),
            total_draws: est.total_draws(),
            elapsed,
        }
    }

    /// Milliseconds per trial.
    pub fn ms_per_trial(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3 / self.trials as f64
    }

    /// Format as CSV row.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{},{:.3}",
            self.side,
            self.trials,
            self.seed,
            self.mean,
            self.stddev,
            self.ci_low,
            self.ci_high,
            self.total_draws,
            self.ms_per_trial(),
        )
    }

    /// The three-line summary printed by the classic statistics driver.
    pub fn classic_summary(&self) -> String {
        format!(
            "mean                    = {}\n\
             stddev                  = {}\n\
             95% confidence interval = [{}, {}]",
            self.mean, self.stddev, self.ci_low, self.ci_high
        )
    }
}

/// CSV header matching [`EstimateRow::to_csv`].
pub const CSV_HEADER: &str = "side,trials,seed,mean,stddev,ci_low,ci_high,draws,ms_per_trial";

/// Format a large number with K/M/G suffixes.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}G", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        format!("{}", n)
    }
}

/// Prints all rows as a console table.
pub fn print_table(rows: &[EstimateRow]) {
    let rule = || {
        println!(
            "{:-<8}+{:-<8}+{:-<10}+{:-<10}+{:-<24}+{:-<10}+{:-<12}",
            "", "", "", "", "", "", ""
        )
    };

    println!();
    println!("{}", "=".repeat(88));
    println!("Percolation Threshold Estimates");
    println!("{}", "=".repeat(88));
    rule();
    println!(
        "{:>8}|{:>8}|{:>10}|{:>10}|{:>24}|{:>10}|{:>12}",
        "Side", "Trials", "mean", "stddev", "95% CI", "draws", "ms/trial"
    );
    rule();
    for r in rows {
        let ci = format!("[{:.5}, {:.5}]", r.ci_low, r.ci_high);
        println!(
            "{:>8}|{:>8}|{:>10.5}|{:>10.5}|{:>24}|{:>10}|{:>12.3}",
            r.side,
            r.trials,
            r.mean,
            r.stddev,
            ci,
            format_number(r.total_draws),
            r.ms_per_trial(),
        );
    }
    rule();
}
