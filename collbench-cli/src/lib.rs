#![warn(missing_docs)]
//! Collbench CLI Library
//!
//! Wires the registry, collector, driver, and trend fitter into a binary.
//! A zero-argument invocation runs the full experiment: it creates the
//! output directory if absent, then samples every registered timer across
//! the configured size range on a fixed-size worker pool.

mod collector;
mod config;
mod driver;

pub use collector::*;
pub use config::*;
pub use driver::*;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use collbench_core::{SizeRange, TIMERS};
use collbench_stats::fit_trend;
use tracing::info;

/// Collbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "collbench")]
#[command(version, about = "Collection-construction timing harness")]
pub struct Cli {
    /// Optional subcommand (list, run, trend); defaults to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output directory for series files
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of pool workers
    #[arg(long)]
    pub jobs: Option<usize>,

    /// First sampled size (inclusive)
    #[arg(long)]
    pub start: Option<usize>,

    /// End of the size range (exclusive)
    #[arg(long)]
    pub stop: Option<usize>,

    /// Distance between consecutive sizes
    #[arg(long)]
    pub step: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered timers
    List,
    /// Run the experiment (default)
    Run,
    /// Fit a linear trend to a persisted series file
    Trend {
        /// Path to a series JSON file written by a previous run
        #[arg(name = "SERIES")]
        series: PathBuf,
    },
}

/// Resolved settings after merging CLI flags, config file, and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Size range shared by every timer.
    pub range: SizeRange,
    /// Worker pool size.
    pub jobs: usize,
    /// Directory the series files are written into.
    pub output_dir: PathBuf,
}

impl Settings {
    /// Merge CLI flags over config file values over compiled-in defaults.
    pub fn resolve(cli: &Cli, config: &CollbenchConfig) -> Self {
        let file_range = config.range();
        Self {
            range: SizeRange::new(
                cli.start.unwrap_or(file_range.start),
                cli.stop.unwrap_or(file_range.stop),
                cli.step.unwrap_or(file_range.step),
            ),
            jobs: cli.jobs.unwrap_or(config.runner.jobs),
            output_dir: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.directory)),
        }
    }
}

/// Run the collbench CLI. This is the binary's entire main.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the collbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "collbench=debug"
    } else {
        "collbench=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = CollbenchConfig::discover().unwrap_or_default();
    let settings = Settings::resolve(&cli, &config);

    match cli.command {
        Some(Commands::List) => list_timers(),
        Some(Commands::Trend { ref series }) => fit_series(series, settings.range)?,
        Some(Commands::Run) | None => run_experiment(&settings)?,
    }

    Ok(())
}

/// Print the registered timers and their output file stems.
fn list_timers() {
    for timer in TIMERS {
        println!(
            "{} -> {}.json\n    {}",
            timer.id,
            base_name(timer.id),
            timer.description
        );
    }
}

/// Create the output directory and fan the full batch out over the pool.
fn run_experiment(settings: &Settings) -> anyhow::Result<()> {
    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            settings.output_dir.display()
        )
    })?;

    info!(
        jobs = settings.jobs,
        samples = settings.range.len(),
        output_dir = %settings.output_dir.display(),
        "starting experiment"
    );

    let tasks = plan_tasks(settings.range, &settings.output_dir);
    let paths = run_all(&tasks, settings.jobs).context("collection batch failed")?;

    info!(files = paths.len(), "experiment finished");
    Ok(())
}

/// Fit both strategy series in a persisted file against the size range.
fn fit_series(path: &Path, range: SizeRange) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file {}", path.display()))?;
    let series: TimingSeries = serde_json::from_str(&text)
        .with_context(|| format!("malformed series file {}", path.display()))?;

    let abscissa: Vec<f64> = range.sizes().map(|size| size as f64).collect();
    anyhow::ensure!(
        abscissa.len() == series.len(),
        "range yields {} sizes but series holds {} samples (pass --start/--stop/--step \
         matching the collecting run)",
        abscissa.len(),
        series.len()
    );

    for (label, ordinates) in [("loop", &series.loop_secs), ("comp", &series.comp_secs)] {
        let trend = fit_trend(&abscissa, ordinates)?;
        println!(
            "{label}: slope {:.3e} ± {:.3e} s/element, intercept {:.3e} ± {:.3e} s",
            trend.slope, trend.slope_stderr, trend.intercept, trend.intercept_stderr
        );
    }

    Ok(())
}
