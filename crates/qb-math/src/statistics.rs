//! Statistics accumulators and descriptive statistics.
//!
//! [`IncrementalStatistics`] is a streaming accumulator used while
//! simulated payoffs are produced one at a time; it never stores the
//! samples.  [`DescriptiveStatistics`] summarises a retained sample
//! vector (the terminal-price distribution) including order statistics,
//! delegating to `statrs`.

use qb_core::{ensure, errors::Result, Real};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Streaming statistics accumulator.
///
/// Accumulates count, sum, and sum of squares; computes mean, sample
/// variance, standard deviation, and the standard error of the mean.
#[derive(Debug, Clone, Default)]
pub struct IncrementalStatistics {
    count: usize,
    sum: Real,
    sum_sq: Real,
}

impl IncrementalStatistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Number of samples added so far.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as Real)
        }
    }

    /// Unbiased (Bessel-corrected) sample variance.  Returns `None` for
    /// fewer than 2 samples.  Clamped at zero against round-off.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let m = self.sum / n;
        Some(((self.sum_sq / n - m * m) * n / (n - 1.0)).max(0.0))
    }

    /// Sample standard deviation.  Returns `None` for fewer than 2
    /// samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean estimate, `std_dev / √n`.  Returns
    /// `None` for fewer than 2 samples.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }
}

/// Descriptive statistics of a sample, including order statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStatistics {
    /// Sample mean.
    pub mean: Real,
    /// Sample median.
    pub median: Real,
    /// Population standard deviation (divisor `n`).
    pub std: Real,
    /// Minimum sample value.
    pub min: Real,
    /// Maximum sample value.
    pub max: Real,
    /// 25th percentile.
    pub percentile_25: Real,
    /// 75th percentile.
    pub percentile_75: Real,
    /// 95th percentile.
    pub percentile_95: Real,
}

impl DescriptiveStatistics {
    /// Summarise a non-empty sample.
    ///
    /// Fails with `InvalidParameter` on an empty slice.
    pub fn from_sample(sample: &[Real]) -> Result<Self> {
        ensure!(!sample.is_empty(), "cannot summarise an empty sample");

        let mean = sample.mean();
        let std = sample.population_std_dev();
        let min = Statistics::min(sample);
        let max = Statistics::max(sample);

        let mut data = Data::new(sample.to_vec());
        Ok(Self {
            mean,
            median: data.median(),
            std,
            min,
            max,
            percentile_25: data.percentile(25),
            percentile_75: data.percentile(75),
            percentile_95: data.percentile(95),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn incremental_basics() {
        let mut s = IncrementalStatistics::new();
        for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
            s.add(x);
        }
        assert_eq!(s.samples(), 5);
        assert_relative_eq!(s.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(s.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            s.error_estimate().unwrap(),
            (2.5_f64 / 5.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn incremental_empty_and_single() {
        let mut s = IncrementalStatistics::new();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        s.add(1.0);
        assert_eq!(s.mean(), Some(1.0));
        assert!(s.std_dev().is_none());
    }

    #[test]
    fn descriptive_of_known_sample() {
        let sample: Vec<Real> = (1..=100).map(|i| i as Real).collect();
        let d = DescriptiveStatistics::from_sample(&sample).unwrap();
        assert_relative_eq!(d.mean, 50.5, epsilon = 1e-12);
        assert_relative_eq!(d.median, 50.5, epsilon = 1e-9);
        assert_relative_eq!(d.min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.max, 100.0, epsilon = 1e-12);
        // population std of 1..=100
        assert_relative_eq!(d.std, 28.866_070_047_722_12, epsilon = 1e-9);
        assert!(d.percentile_25 > 20.0 && d.percentile_25 < 30.0);
        assert!(d.percentile_75 > 70.0 && d.percentile_75 < 80.0);
        assert!(d.percentile_95 > 90.0 && d.percentile_95 <= 100.0);
        // ordering of the quantiles
        assert!(d.min <= d.percentile_25);
        assert!(d.percentile_25 <= d.median);
        assert!(d.median <= d.percentile_75);
        assert!(d.percentile_75 <= d.percentile_95);
        assert!(d.percentile_95 <= d.max);
    }

    #[test]
    fn descriptive_rejects_empty_sample() {
        assert!(DescriptiveStatistics::from_sample(&[]).is_err());
    }
}
