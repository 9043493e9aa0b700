//! Collector
//!
//! Samples one registered timer across the size range and persists the
//! resulting series as JSON, one file per timer. The file stem is derived
//! from the timer identifier.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use collbench_core::{SizeRange, TimingPair, find_timer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors from collecting or persisting a timing series.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The requested identifier is not in the registry.
    #[error("there is no timer with id: {id}")]
    UnknownTimer {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Filesystem failure while writing the series.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    Pool(String),
}

/// The two per-strategy series collected for one timer.
///
/// Invariant: both sequences have the same length, equal to the number of
/// sizes sampled. Serialized keys are exactly `"loop"` and `"comp"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingSeries {
    /// Seconds per size for the loop-accumulation strategy.
    #[serde(rename = "loop")]
    pub loop_secs: Vec<f64>,
    /// Seconds per size for the one-shot `collect()` strategy.
    #[serde(rename = "comp")]
    pub comp_secs: Vec<f64>,
}

impl TimingSeries {
    /// Append one measurement pair.
    pub fn push(&mut self, pair: TimingPair) {
        self.loop_secs.push(pair.loop_secs);
        self.comp_secs.push(pair.comp_secs);
    }

    /// Number of sampled sizes.
    pub fn len(&self) -> usize {
        self.loop_secs.len()
    }

    /// Whether no sizes have been sampled yet.
    pub fn is_empty(&self) -> bool {
        self.loop_secs.is_empty()
    }
}

/// Derive the output file stem from a timer identifier.
///
/// Trims leading/trailing underscores and splits on `_`; with two or more
/// tokens the second is used, otherwise the first.
pub fn base_name(timer_id: &str) -> &str {
    let trimmed = timer_id.trim_matches('_');
    let mut tokens = trimmed.split('_');
    let first = tokens.next().unwrap_or(trimmed);
    tokens.next().unwrap_or(first)
}

/// Persisted files use 4-space indentation.
fn write_series(series: &TimingSeries, path: &Path) -> Result<(), CollectError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    series.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

/// Sample `timer_id` at every size in `range` and write the series to
/// `{output_dir}/{base_name}.json`, overwriting any existing file.
///
/// Returns the path written. Fails with [`CollectError::UnknownTimer`]
/// before touching the filesystem if the identifier is not registered.
pub fn collect_times(
    timer_id: &str,
    range: SizeRange,
    output_dir: &Path,
) -> Result<PathBuf, CollectError> {
    let pid = std::process::id();
    info!(pid, timer_id, "starting collection");

    let timer = find_timer(timer_id).ok_or_else(|| CollectError::UnknownTimer {
        id: timer_id.to_string(),
    })?;

    let mut series = TimingSeries::default();
    for size in range.sizes() {
        series.push((timer.runner_fn)(size));
    }

    let path = output_dir.join(format!("{}.json", base_name(timer_id)));
    write_series(&series, &path)?;

    info!(pid, path = %path.display(), "collection finished");
    Ok(path)
}
