//! Parallel Driver
//!
//! Fans out one collector invocation per registered timer across a
//! fixed-size worker pool. Tasks are independent; each writes its own file
//! and nothing is aggregated. The driver blocks on pool completion and
//! re-raises the first failure, aborting the batch.

use std::path::{Path, PathBuf};

use collbench_core::{SizeRange, TIMERS};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::collector::{CollectError, collect_times};

/// Default number of pool workers.
pub const DEFAULT_JOBS: usize = 3;

/// One collector invocation: everything a worker needs, by value.
#[derive(Debug, Clone)]
pub struct CollectTask {
    /// Registry identifier of the timer to sample.
    pub timer_id: String,
    /// Size range shared by every task in the batch.
    pub range: SizeRange,
    /// Directory the series file is written into.
    pub output_dir: PathBuf,
}

/// Build one task per registered timer, all sharing `range` and `output_dir`.
pub fn plan_tasks(range: SizeRange, output_dir: &Path) -> Vec<CollectTask> {
    TIMERS
        .iter()
        .map(|timer| CollectTask {
            timer_id: timer.id.to_string(),
            range,
            output_dir: output_dir.to_path_buf(),
        })
        .collect()
}

/// Run every task on a pool of `jobs` workers, blocking until all complete.
///
/// Returns the written paths (task order). The first failing task aborts
/// the batch once the pool drains; completed tasks keep their files.
pub fn run_all(tasks: &[CollectTask], jobs: usize) -> Result<Vec<PathBuf>, CollectError> {
    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .build()
        .map_err(|e| CollectError::Pool(e.to_string()))?;

    pool.install(|| {
        tasks
            .par_iter()
            .map(|task| collect_times(&task.timer_id, task.range, &task.output_dir))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small_range() -> SizeRange {
        SizeRange::new(0, 30, 10)
    }

    #[test]
    fn test_plan_covers_registry() {
        let tasks = plan_tasks(small_range(), Path::new("data"));
        assert_eq!(tasks.len(), TIMERS.len());
        for (task, timer) in tasks.iter().zip(TIMERS) {
            assert_eq!(task.timer_id, timer.id);
        }
    }

    #[test]
    fn test_run_all_writes_one_file_per_timer() {
        let dir = TempDir::new().unwrap();
        let tasks = plan_tasks(small_range(), dir.path());
        let paths = run_all(&tasks, DEFAULT_JOBS).unwrap();

        assert_eq!(paths.len(), TIMERS.len());
        for name in ["vec.json", "map.json", "set.json"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_bad_timer_aborts_batch() {
        let dir = TempDir::new().unwrap();
        let mut tasks = plan_tasks(small_range(), dir.path());
        tasks.push(CollectTask {
            timer_id: "nonexistent".to_string(),
            range: small_range(),
            output_dir: dir.path().to_path_buf(),
        });

        let err = run_all(&tasks, 2).unwrap_err();
        assert!(matches!(err, CollectError::UnknownTimer { ref id } if id == "nonexistent"));
    }

    #[test]
    fn test_empty_batch() {
        assert!(run_all(&[], DEFAULT_JOBS).unwrap().is_empty());
    }
}
