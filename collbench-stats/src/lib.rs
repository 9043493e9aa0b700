#![warn(missing_docs)]
//! Collbench Statistical Engine
//!
//! Closed-form ordinary least squares for the collected timing series:
//! - Slope and intercept, no iterative solver
//! - One-standard-deviation error bounds around the fitted line

mod trend;

pub use trend::{Trend, TrendError, fit_trend};

/// Minimum number of paired samples required to fit a trend.
pub const MIN_TREND_SAMPLES: usize = 2;
