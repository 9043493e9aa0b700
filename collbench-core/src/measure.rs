//! Wall-Clock Timing
//!
//! Thin wrapper over the monotonic clock. The persisted unit is seconds,
//! so elapsed time is read out as `f64` directly.

use std::time::Instant;

/// Stopwatch for measuring one construction strategy.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed seconds since the stopwatch was started.
    #[inline(always)]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
