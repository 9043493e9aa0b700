//! Configuration loading from collbench.toml
//!
//! Settings can be specified in a `collbench.toml` file discovered by
//! walking up from the current directory. CLI flags override file values;
//! file values override the compiled-in experiment defaults.

use std::path::Path;

use collbench_core::SizeRange;
use serde::{Deserialize, Serialize};

/// Collbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for the experiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of pool workers
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    /// First sampled size (inclusive)
    #[serde(default = "default_start")]
    pub start: usize,
    /// End of the size range (exclusive)
    #[serde(default = "default_stop")]
    pub stop: usize,
    /// Distance between consecutive sizes
    #[serde(default = "default_step")]
    pub step: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            start: default_start(),
            stop: default_stop(),
            step: default_step(),
        }
    }
}

fn default_jobs() -> usize {
    3
}
fn default_start() -> usize {
    10
}
fn default_stop() -> usize {
    10_000_001
}
fn default_step() -> usize {
    10_000
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the series files are written into
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "data".to_string()
}

impl CollbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("collbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// The size range described by the runner section.
    pub fn range(&self) -> SizeRange {
        SizeRange::new(self.runner.start, self.runner.stop, self.runner.step)
    }
}
