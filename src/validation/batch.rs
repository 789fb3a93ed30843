//! Direct two-pass moments over a literal window

use crate::statistics::{pearson_kurtosis, skewness};

/// Moments recomputed from scratch over a slice of samples
///
/// First pass computes the mean, second pass sums the powers of the
/// deviations. O(n) per call; this is the oracle the incremental path is
/// checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchMoments {
    /// Number of samples
    pub count: usize,
    /// Mean
    pub mean: f64,
    /// Σ(x - mean)²
    pub m2: f64,
    /// Σ(x - mean)³
    pub m3: f64,
    /// Σ(x - mean)⁴
    pub m4: f64,
}

impl BatchMoments {
    /// Compute the moments of `window`; an empty window yields all zeros
    pub fn from_window(window: &[f64]) -> Self {
        if window.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                m2: 0.0,
                m3: 0.0,
                m4: 0.0,
            };
        }

        // Summing identical samples can round the mean off the sample itself
        let first = window[0];
        if first.is_finite() && window.iter().all(|&x| x == first) {
            return Self {
                count: window.len(),
                mean: first,
                m2: 0.0,
                m3: 0.0,
                m4: 0.0,
            };
        }

        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for &x in window {
            let d = x - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }

        Self {
            count: window.len(),
            mean,
            m2,
            m3,
            m4,
        }
    }

    /// Population variance
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Population skewness, 0 without spread
    pub fn skewness(&self) -> f64 {
        skewness(self.count as f64, self.m2, self.m3)
    }

    /// Pearson kurtosis, 0 without spread
    pub fn kurtosis(&self) -> f64 {
        pearson_kurtosis(self.count as f64, self.m2, self.m4)
    }
}
