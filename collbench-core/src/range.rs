//! Size Range
//!
//! Half-open arithmetic sequence of input sizes, the typed form of the
//! original loose (start, stop, step) range configuration.

use serde::{Deserialize, Serialize};

/// Half-open range of collection sizes to sample.
///
/// `step` must be nonzero; iterating a zero-step range is undefined
/// behavior (it panics) and is deliberately not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    /// First sampled size (inclusive).
    pub start: usize,
    /// End of the range (exclusive).
    pub stop: usize,
    /// Distance between consecutive sizes.
    pub step: usize,
}

impl SizeRange {
    /// Full three-value form.
    pub fn new(start: usize, stop: usize, step: usize) -> Self {
        Self { start, stop, step }
    }

    /// One-value form: start = 0, step = 1.
    pub fn upto(stop: usize) -> Self {
        Self::new(0, stop, 1)
    }

    /// Two-value form: step = 1.
    pub fn from(start: usize, stop: usize) -> Self {
        Self::new(start, stop, 1)
    }

    /// Iterate the sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..self.stop).step_by(self.step)
    }

    /// Number of sizes in the range.
    pub fn len(&self) -> usize {
        if self.stop <= self.start {
            0
        } else {
            (self.stop - self.start).div_ceil(self.step)
        }
    }

    /// Whether the range contains no sizes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_value_form() {
        let range = SizeRange::upto(5);
        assert_eq!(range.sizes().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_two_value_form() {
        let range = SizeRange::from(3, 7);
        assert_eq!(range.sizes().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_three_value_form() {
        let range = SizeRange::new(10, 50, 15);
        assert_eq!(range.sizes().collect::<Vec<_>>(), vec![10, 25, 40]);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn test_len_matches_iteration() {
        for (start, stop, step) in [(0, 0, 1), (0, 1, 1), (10, 10_001, 100), (5, 4, 2)] {
            let range = SizeRange::new(start, stop, step);
            assert_eq!(range.len(), range.sizes().count());
        }
    }

    #[test]
    fn test_experiment_shape() {
        // The fixed experiment range samples exactly 1000 sizes.
        let range = SizeRange::new(10, 10_000_001, 10_000);
        assert_eq!(range.len(), 1000);
    }

    #[test]
    fn test_empty_range() {
        assert!(SizeRange::from(5, 5).is_empty());
        assert!(SizeRange::from(6, 5).is_empty());
    }
}
