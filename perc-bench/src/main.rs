//! Monte Carlo percolation threshold driver.
//!
//! Runs a [`ThresholdEstimator`] for each requested grid side and prints the
//! mean, standard deviation and 95% confidence interval.
//!
//! # Usage
//!
//! ```bash
//! # Classic single estimate: 200x200 grid, 100 trials
//! cargo run --release -p perc-bench -- --sides 200 --trials 100
//!
//! # Sweep the standard sizes with a fixed seed, CSV to stdout
//! cargo run --release -p perc-bench -- --sweep --seed 42 --csv
//! ```

mod report;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perc_core::ThresholdEstimator;
use perc_core::testing_grids::STANDARD_SIDES;

use crate::report::{CSV_HEADER, EstimateRow, format_number, print_table};

#[derive(Parser, Debug)]
#[command(name = "perc-bench")]
#[command(version)]
#[command(about = "Estimate the site percolation threshold by Monte Carlo simulation")]
struct Args {
    /// Grid side lengths to estimate (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = vec![200])]
    sides: Vec<usize>,

    /// Use the standard size sweep instead of --sides
    #[arg(long)]
    sweep: bool,

    /// Number of independent trials per side
    #[arg(long, default_value_t = 30)]
    trials: usize,

    /// Base random seed (random if not given)
    #[arg(long, env = "PERC_SEED")]
    seed: Option<u64>,

    /// Run trials one after another instead of on the thread pool
    #[arg(long)]
    sequential: bool,

    /// Worker threads for the trial pool (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Output results as CSV to stdout
    #[arg(long)]
    csv: bool,

    /// Enable verbose (per-trial) logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn sides(&self) -> Vec<usize> {
        if self.sweep {
            STANDARD_SIDES.to_vec()
        } else {
            self.sides.clone()
        }
    }
}

fn run_estimate(side: usize, args: &Args) -> Result<EstimateRow> {
    let mut builder = ThresholdEstimator::builder()
        .side(side)
        .trials(args.trials)
        .parallel(!args.sequential);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let t0 = Instant::now();
    let est = builder
        .build()
        .with_context(|| format!("estimating threshold for {side}x{side} grid"))?;
    let elapsed = t0.elapsed();

    info!(
        side,
        elapsed_ms = elapsed.as_millis() as u64,
        draws = est.total_draws(),
        "estimate finished"
    );

    Ok(EstimateRow::from_estimator(&est, elapsed))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so CSV on stdout stays clean
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring trial thread pool")?;
    }

    let sides = args.sides();
    info!(?sides, trials = args.trials, seed = ?args.seed, "starting");

    let mut rows = Vec::with_capacity(sides.len());
    for &side in &sides {
        let row = run_estimate(side, &args)?;

        if !args.csv {
            println!();
            println!("{}x{} grid, {} trials (seed {})", side, side, row.trials, row.seed);
            println!("{}", row.classic_summary());
            println!(
                "elapsed                 = {:.3}s ({} draws)",
                row.elapsed.as_secs_f64(),
                format_number(row.total_draws)
            );
        }
        rows.push(row);
    }

    if args.csv {
        println!("{}", CSV_HEADER);
        for r in &rows {
            println!("{}", r.to_csv());
        }
    } else if rows.len() > 1 {
        print_table(&rows);
    }

    Ok(())
}
