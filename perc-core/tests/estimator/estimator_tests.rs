//! Tests for the Monte Carlo threshold estimator.

use perc_core::{
    EstimatorBuilder, MAX_SIDE, PercolationError, SQUARE_SITE_THRESHOLD, TestGrids,
    ThresholdEstimator, run_trial,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

// =============================================================================
// Parameter validation
// =============================================================================

#[test]
fn test_rejects_invalid_parameters() {
    for (side, trials) in [(0, 10), (10, 0), (0, 0), (MAX_SIDE + 1, 1)] {
        let err = ThresholdEstimator::new(side, trials).unwrap_err();
        assert_eq!(err, PercolationError::InvalidParameters { side, trials });
    }
}

#[test]
fn test_builder_requires_side_and_trials() {
    assert!(EstimatorBuilder::new().build().is_err());
    assert!(EstimatorBuilder::new().side(5).build().is_err());
    assert!(EstimatorBuilder::new().trials(5).build().is_err());
    assert!(EstimatorBuilder::default().side(5).trials(5).build().is_ok());
}

// =============================================================================
// Single trials
// =============================================================================

#[test]
fn test_run_trial_outcome_consistent() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1234);
    let side = 10;
    let outcome = run_trial(side, &mut rng).unwrap();

    assert_eq!(outcome.threshold, outcome.open_sites as f64 / 100.0);
    // A top-to-bottom path needs at least one site per row.
    assert!(outcome.open_sites >= side);
    assert!(outcome.open_sites <= side * side);
    // Redraws of open sites still count as draws.
    assert!(outcome.draws >= outcome.open_sites as u64);
}

#[test]
fn test_run_trial_reproducible_for_seed() {
    let a = run_trial(15, &mut Xoshiro256PlusPlus::seed_from_u64(99)).unwrap();
    let b = run_trial(15, &mut Xoshiro256PlusPlus::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_trial_rejects_zero_side() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    assert_eq!(
        run_trial(0, &mut rng).unwrap_err(),
        PercolationError::InvalidSize { side: 0 }
    );
}

#[test]
fn test_single_site_always_threshold_one() {
    let est = ThresholdEstimator::with_seed(1, 5, 3).unwrap();
    assert!(est.thresholds().iter().all(|&t| t == 1.0));
    assert_eq!(est.mean(), 1.0);
    assert_eq!(est.stddev(), 0.0);
    assert_eq!(est.confidence_low(), 1.0);
    assert_eq!(est.confidence_high(), 1.0);
    assert_eq!(est.total_draws(), 5);
}

#[test]
fn test_single_trial_stddev_is_nan() {
    let cfg = TestGrids::TINY;
    let est = ThresholdEstimator::with_seed(cfg.side, cfg.trials, 11).unwrap();

    assert_eq!(est.trials(), 1);
    assert_eq!(est.mean(), 1.0);
    assert!(est.stddev().is_nan());
    assert!(est.confidence_low().is_nan());
    assert!(est.confidence_high().is_nan());
}

// =============================================================================
// Reproducibility and scheduling
// =============================================================================

#[test]
fn test_same_seed_same_results() {
    let a = ThresholdEstimator::with_seed(20, 12, 42).unwrap();
    let b = ThresholdEstimator::with_seed(20, 12, 42).unwrap();

    assert_eq!(a.seed(), 42);
    assert_eq!(a.thresholds(), b.thresholds());
    assert_eq!(a.mean(), b.mean());
    assert_eq!(a.total_draws(), b.total_draws());
}

#[test]
fn test_parallel_matches_sequential() {
    let build = |parallel| {
        ThresholdEstimator::builder()
            .side(16)
            .trials(24)
            .seed(7)
            .parallel(parallel)
            .build()
            .unwrap()
    };
    let par = build(true);
    let seq = build(false);

    assert_eq!(par.thresholds(), seq.thresholds());
    assert_eq!(par.summary(), seq.summary());
}

#[test]
fn test_trial_i_uses_offset_seed() {
    let est = ThresholdEstimator::with_seed(12, 4, 1000).unwrap();

    for (i, &t) in est.thresholds().iter().enumerate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1000 + i as u64);
        assert_eq!(run_trial(12, &mut rng).unwrap().threshold, t);
    }
}

#[test]
fn test_unseeded_runs_complete() {
    let est = ThresholdEstimator::new(10, 5).unwrap();
    assert_eq!(est.side(), 10);
    assert_eq!(est.trials(), 5);
    assert!(est.thresholds().iter().all(|&t| t > 0.0 && t <= 1.0));
}

// =============================================================================
// Statistical sanity
// =============================================================================

#[test]
fn test_confidence_interval_brackets_mean() {
    for seed in 0..5 {
        let est = ThresholdEstimator::with_seed(20, 10, seed).unwrap();
        assert!(est.confidence_low() <= est.mean(), "seed {}", seed);
        assert!(est.mean() <= est.confidence_high(), "seed {}", seed);

        let s = est.summary();
        assert_eq!(s.mean, est.mean());
        assert_eq!(s.trials, 10);
    }
}

#[test]
fn test_interval_narrows_with_more_trials() {
    let mean_width = |trials: usize| {
        let widths: Vec<f64> = (0..5u64)
            .map(|seed| {
                let est = ThresholdEstimator::with_seed(20, trials, seed * 7919).unwrap();
                est.confidence_high() - est.confidence_low()
            })
            .collect();
        widths.iter().sum::<f64>() / widths.len() as f64
    };

    let few = mean_width(10);
    let many = mean_width(200);
    assert!(many < few, "width with 200 trials ({}) >= width with 10 ({})", many, few);
}

#[test]
fn test_threshold_plausible_for_large_grid() {
    let cfg = TestGrids::LARGE;
    let est = ThresholdEstimator::with_seed(cfg.side, cfg.trials, 2024).unwrap();

    assert!(
        est.mean() > 0.55 && est.mean() < 0.65,
        "mean {} outside plausible band around {}",
        est.mean(),
        SQUARE_SITE_THRESHOLD
    );
    assert!(est.stddev() > 0.0);
}
