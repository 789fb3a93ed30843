//! Running statistics over every sample seen (mean to kurtosis)
//!
//! Computes streaming moments using Terriberry's extension of Welford's
//! numerically stable online algorithm. Nothing is ever evicted, so the
//! reported kurtosis describes a window that grows with the stream.

use crate::statistics::moments::{pearson_kurtosis, skewness};
use crate::traits::{MomentSketch, Sketch};

/// Cumulative moments calculator
///
/// Computes mean, variance, skewness and kurtosis in a single pass with O(1)
/// memory. The fourth-order update is written in the classic Terriberry form,
/// which makes it an independent cross-check of the windowed estimators.
///
/// # Example
///
/// ```
/// use kurtstream::statistics::RunningStats;
/// use kurtstream::traits::MomentSketch;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 0.001);
/// assert!((stats.variance() - 4.0).abs() < 0.001);
/// assert!((stats.stddev() - 2.0).abs() < 0.001);
/// assert!((stats.kurtosis() - 2.78125).abs() < 0.001);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean
    m2: f64,
    /// Sum of cubed differences from mean
    m3: f64,
    /// Sum of fourth-power differences from mean
    m4: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty statistics accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
        }
    }

    /// Build an accumulator over a slice of values
    pub fn from_slice(values: &[f64]) -> Self {
        let mut stats = Self::new();
        for &v in values {
            stats.add(v);
        }
        stats
    }

    /// Add a value to the statistics
    pub fn add(&mut self, value: f64) {
        let n1 = self.count as f64;
        self.count += 1;
        let n = self.count as f64;

        let delta = value - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;

        self.mean += delta_n;
        // Order matters: m4 reads the old m3 and m2, m3 reads the old m2
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Get the sample variance
    ///
    /// This is the unbiased variance estimator (Bessel's correction).
    /// Use `variance()` for population variance.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sum of squared differences from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Sum of fourth-power differences from the mean
    pub fn m4(&self) -> f64 {
        self.m4
    }
}

impl Sketch for RunningStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl MomentSketch for RunningStats {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    fn skewness(&self) -> f64 {
        skewness(self.count as f64, self.m2, self.m3)
    }

    fn kurtosis(&self) -> f64 {
        pearson_kurtosis(self.count as f64, self.m2, self.m4)
    }
}
