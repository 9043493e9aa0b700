//! Least-Squares Trend Fitting
//!
//! Fits a straight line through paired samples using the closed-form
//! ordinary least-squares estimators, then shifts the fitted line by plus
//! and minus one standard error to form an error corridor. Derived
//! sequences are computed on demand and never persisted.

use thiserror::Error;

use crate::MIN_TREND_SAMPLES;

/// Errors from degenerate fit inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Abscissa and ordinates have different lengths.
    #[error("abscissa has {abscissa} samples but ordinates has {ordinates}")]
    LengthMismatch {
        /// Number of x-values supplied.
        abscissa: usize,
        /// Number of y-values supplied.
        ordinates: usize,
    },

    /// Fewer than two paired samples.
    #[error("trend needs at least 2 samples, got {0}")]
    TooFewSamples(usize),

    /// All x-values are identical, so the slope is undefined.
    #[error("abscissa has zero variance")]
    DegenerateAbscissa,
}

/// A fitted linear trend with its one-standard-deviation error corridor.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    /// X-values of the samples.
    pub abscissa: Vec<f64>,
    /// Observed y-values.
    pub ordinates: Vec<f64>,
    /// Least-squares slope.
    pub slope: f64,
    /// Least-squares intercept.
    pub intercept: f64,
    /// Standard error of the slope.
    pub slope_stderr: f64,
    /// Standard error of the intercept.
    pub intercept_stderr: f64,
    /// Fitted line evaluated over the abscissa.
    pub fitted: Vec<f64>,
    /// Fitted line shifted up by one standard error.
    pub above: Vec<f64>,
    /// Fitted line shifted down by one standard error.
    pub under: Vec<f64>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor n, matching the estimator formulas).
fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Fit a linear trend through `(abscissa, ordinates)` pairs.
///
/// Uses the closed-form estimators:
/// - slope = (mean(x·y) − mean(x)·mean(y)) / var(x)
/// - intercept = mean(y) − slope·mean(x)
/// - slope stderr = sqrt(var(y) / (n·var(x)))
/// - intercept stderr = slope stderr · sqrt(mean(x²))
pub fn fit_trend(abscissa: &[f64], ordinates: &[f64]) -> Result<Trend, TrendError> {
    if abscissa.len() != ordinates.len() {
        return Err(TrendError::LengthMismatch {
            abscissa: abscissa.len(),
            ordinates: ordinates.len(),
        });
    }
    if abscissa.len() < MIN_TREND_SAMPLES {
        return Err(TrendError::TooFewSamples(abscissa.len()));
    }

    let n = abscissa.len() as f64;
    let x_mean = mean(abscissa);
    let x_var = variance(abscissa);
    if x_var == 0.0 {
        return Err(TrendError::DegenerateAbscissa);
    }
    let y_mean = mean(ordinates);

    let xy_mean = abscissa
        .iter()
        .zip(ordinates)
        .map(|(x, y)| x * y)
        .sum::<f64>()
        / n;
    let x_sq_mean = abscissa.iter().map(|x| x * x).sum::<f64>() / n;

    let slope = (xy_mean - x_mean * y_mean) / x_var;
    let intercept = y_mean - slope * x_mean;
    let slope_stderr = (variance(ordinates) / (n * x_var)).sqrt();
    let intercept_stderr = slope_stderr * x_sq_mean.sqrt();

    let line = |s: f64, i: f64| -> Vec<f64> { abscissa.iter().map(|x| s * x + i).collect() };

    Ok(Trend {
        abscissa: abscissa.to_vec(),
        ordinates: ordinates.to_vec(),
        slope,
        intercept,
        slope_stderr,
        intercept_stderr,
        fitted: line(slope, intercept),
        above: line(slope + slope_stderr, intercept + intercept_stderr),
        under: line(slope - slope_stderr, intercept - intercept_stderr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_line(n: usize, slope: f64, intercept: f64) -> (Vec<f64>, Vec<f64>) {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();
        (xs, ys)
    }

    #[test]
    fn test_exact_line_recovery() {
        let (xs, ys) = exact_line(100, 2.0, 1.0);
        let trend = fit_trend(&xs, &ys).unwrap();

        assert!((trend.slope - 2.0).abs() < 1e-9);
        assert!((trend.intercept - 1.0).abs() < 1e-9);

        // The fitted line passes through every observed point.
        for (fitted, observed) in trend.fitted.iter().zip(&ys) {
            assert!((fitted - observed).abs() < 1e-6);
        }
    }

    #[test]
    fn test_error_corridor_brackets_fit() {
        let (xs, ys) = exact_line(50, 2.0, 1.0);
        let trend = fit_trend(&xs, &ys).unwrap();

        assert!(trend.slope_stderr > 0.0);
        for ((above, fitted), under) in trend.above.iter().zip(&trend.fitted).zip(&trend.under) {
            assert!(above >= fitted);
            assert!(fitted >= under);
        }
    }

    #[test]
    fn test_stderr_shrinks_with_sample_count() {
        // For an exact line the slope stderr is 2/sqrt(n); more samples
        // tighten the corridor toward the fitted line.
        let (xs_small, ys_small) = exact_line(100, 2.0, 1.0);
        let (xs_large, ys_large) = exact_line(10_000, 2.0, 1.0);

        let small = fit_trend(&xs_small, &ys_small).unwrap();
        let large = fit_trend(&xs_large, &ys_large).unwrap();

        assert!(large.slope_stderr < small.slope_stderr);
        assert!((large.slope_stderr - 2.0 / (10_000f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_noise_recovery() {
        // Alternating +/- noise around y = 3x + 5 cancels in the estimators.
        let xs: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs
            .iter()
            .enumerate()
            .map(|(i, x)| 3.0 * x + 5.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
            .collect();

        let trend = fit_trend(&xs, &ys).unwrap();
        assert!((trend.slope - 3.0).abs() < trend.slope_stderr);
        assert!((trend.intercept - 5.0).abs() < trend.intercept_stderr.max(0.01));
    }

    #[test]
    fn test_length_mismatch() {
        let err = fit_trend(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TrendError::LengthMismatch {
                abscissa: 3,
                ordinates: 2
            }
        );
    }

    #[test]
    fn test_too_few_samples() {
        assert_eq!(
            fit_trend(&[1.0], &[1.0]).unwrap_err(),
            TrendError::TooFewSamples(1)
        );
        assert_eq!(fit_trend(&[], &[]).unwrap_err(), TrendError::TooFewSamples(0));
    }

    #[test]
    fn test_zero_variance_abscissa() {
        assert_eq!(
            fit_trend(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]).unwrap_err(),
            TrendError::DegenerateAbscissa
        );
    }
}
