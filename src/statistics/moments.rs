//! Central-moment accumulator with constant-time window updates
//!
//! [`MomentState`] holds the sample count, the mean and the unnormalized
//! central sums `M2 = Σ(x-mean)²`, `M3 = Σ(x-mean)³`, `M4 = Σ(x-mean)⁴` over
//! exactly the samples currently in a window. [`MomentState::update`] advances
//! it by one sample in O(1), picking one of three regimes:
//!
//! - **first sample**: the window was empty, the state restarts at `x`.
//! - **filling**: nothing was evicted, the window grows from `n` to `n + 1`
//!   (Welford's update extended to the fourth moment).
//! - **rolling**: the window is full, `x` replaces the evicted sample and `n`
//!   is unchanged.
//!
//! Add-one/remove-one arithmetic does not cancel exactly. A window that turns
//! constant while rolling would keep a residual M2 of either sign, so the state
//! also counts how many of the newest samples are equal and zeroes the central
//! sums once that run covers the whole window. M2 and M4 are clamped at 0.

use crate::math;

/// Pearson kurtosis `n * M4 / M2²` from unnormalized central sums
///
/// Returns 0 when `M2 == 0`. [`MomentState`] stores exactly 0 for a window
/// of identical finite samples and never a negative M2, so windows without
/// spread read 0 rather than NaN or a huge value.
#[inline]
pub fn pearson_kurtosis(n: f64, m2: f64, m4: f64) -> f64 {
    if m2 == 0.0 {
        0.0
    } else {
        n * m4 / (m2 * m2)
    }
}

/// Population skewness `sqrt(n) * M3 / M2^1.5` from unnormalized central sums
///
/// Returns 0 when `M2 == 0`.
#[inline]
pub fn skewness(n: f64, m2: f64, m3: f64) -> f64 {
    if m2 == 0.0 {
        0.0
    } else {
        math::sqrt(n) * m3 / (m2 * math::sqrt(m2))
    }
}

/// Running mean and central sums over the samples of a window
///
/// The state never looks at the window itself: the caller reports whether a
/// sample was evicted. Used on its own with `evicted = None` it accumulates
/// over every sample seen.
///
/// # Example
///
/// ```
/// use kurtstream::statistics::MomentState;
///
/// let mut state = MomentState::new();
/// for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     state.update(x, None);
/// }
///
/// assert!((state.mean() - 3.0).abs() < 1e-12);
/// assert!((state.m2() - 10.0).abs() < 1e-12);
/// assert!((state.m4() - 34.0).abs() < 1e-12);
/// assert!((state.kurtosis() - 1.7).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentState {
    /// Number of samples contributing
    count: usize,
    /// Mean of the contributing samples
    mean: f64,
    /// Σ(x - mean)²
    m2: f64,
    /// Σ(x - mean)³
    m3: f64,
    /// Σ(x - mean)⁴
    m4: f64,
    /// Newest sample
    last: f64,
    /// Consecutive newest samples equal to `last`
    run: usize,
}

impl MomentState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state by one sample
    ///
    /// `evicted` is the sample that left the window to make room for `value`,
    /// or `None` if the window grew. Inputs are not sanitized: NaN or
    /// infinity propagate through the sums per IEEE arithmetic.
    ///
    /// Once the newest `count` samples are all the same finite value the
    /// mean is that value and M2, M3 and M4 are exactly 0.
    pub fn update(&mut self, value: f64, evicted: Option<f64>) {
        let run = if self.count > 0 && value == self.last {
            self.run.saturating_add(1)
        } else {
            1
        };

        let mut next = match evicted {
            None if self.count == 0 => Self::first(value),
            None => self.extended(value),
            // A one-sample window only ever holds the newest sample
            Some(_) if self.count <= 1 => Self::first(value),
            Some(old) => self.rolled(value, old),
        };
        next.last = value;
        next.run = run;

        if run >= next.count && value.is_finite() {
            next.mean = value;
            next.m2 = 0.0;
            next.m3 = 0.0;
            next.m4 = 0.0;
        } else {
            // Rounding residue; NaN passes through
            if next.m2 < 0.0 {
                next.m2 = 0.0;
            }
            if next.m4 < 0.0 {
                next.m4 = 0.0;
            }
        }

        *self = next;
    }

    /// State of a window holding the single sample `value`
    fn first(value: f64) -> Self {
        Self {
            count: 1,
            mean: value,
            ..Self::default()
        }
    }

    /// Grow the window by one sample
    fn extended(&self, value: f64) -> Self {
        let n = (self.count + 1) as f64;

        let delta = value - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * (n - 1.0);

        let mean = self.mean + delta_n;

        let dev_new = value - mean;
        let shift = mean - self.mean;

        let m2 = self.m2 + dev_new * delta;
        let m3 = self.m3 - 3.0 * shift * self.m2 + (m2 - self.m2) * (dev_new - shift);
        let m4 = self.m4 + term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;

        Self {
            count: self.count + 1,
            mean,
            m2,
            m3,
            m4,
            ..*self
        }
    }

    /// Replace `evicted` with `value` in a full window
    fn rolled(&self, value: f64, evicted: f64) -> Self {
        let n = self.count as f64;

        let dif3 = value - evicted;
        let mean = self.mean + dif3 / n;

        let dif4 = evicted - mean;
        let dif5 = value - mean;
        let dif6 = mean - self.mean;
        let dif7 = evicted - self.mean;
        let sum1 = dif4 + dif5;
        let dif6_2 = dif6 * dif6;

        let m2 = self.m2 + dif3 * (dif5 + dif7);
        let m3 = self.m3 - 3.0 * dif6 * self.m2 + dif3 * (dif7 * (dif4 - dif6) + dif5 * sum1);
        let m4 = self.m4 - 4.0 * dif6 * self.m3
            + 6.0 * dif6_2 * self.m2
            + dif3 * (dif6 * dif6_2 + sum1 * (dif5 * dif5 + dif4 * dif4));

        Self {
            mean,
            m2,
            m3,
            m4,
            ..*self
        }
    }

    /// Number of samples contributing
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if no sample contributes
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the contributing samples (0 when empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Σ(x - mean)²
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Σ(x - mean)³
    pub fn m3(&self) -> f64 {
        self.m3
    }

    /// Σ(x - mean)⁴
    pub fn m4(&self) -> f64 {
        self.m4
    }

    /// Population variance `M2 / n`
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample variance `M2 / (n - 1)`
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population skewness
    pub fn skewness(&self) -> f64 {
        skewness(self.count as f64, self.m2, self.m3)
    }

    /// Pearson kurtosis `n * M4 / M2²`, 0 when the window has no spread
    pub fn kurtosis(&self) -> f64 {
        pearson_kurtosis(self.count as f64, self.m2, self.m4)
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_empty() {
        let state = MomentState::new();

        assert!(state.is_empty());
        assert_eq!(state.mean(), 0.0);
        assert_eq!(state.variance(), 0.0);
        assert_eq!(state.kurtosis(), 0.0);
        assert_eq!(state.skewness(), 0.0);
    }

    #[test]
    fn test_first_sample() {
        let mut state = MomentState::new();
        state.update(-7.25, None);

        assert_eq!(state.count(), 1);
        assert_eq!(state.mean(), -7.25);
        assert_eq!(state.m2(), 0.0);
        assert_eq!(state.m3(), 0.0);
        assert_eq!(state.m4(), 0.0);
        assert_eq!(state.kurtosis(), 0.0);
    }

    #[test]
    fn test_filling_matches_definition() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, deviations [-3,-1,-1,-1,0,0,2,4]
        let mut state = MomentState::new();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            state.update(x, None);
        }

        assert_eq!(state.count(), 8);
        assert!(close(state.mean(), 5.0));
        assert!(close(state.m2(), 32.0));
        assert!(close(state.m3(), -27.0 - 3.0 + 8.0 + 64.0));
        assert!(close(state.m4(), 81.0 + 3.0 + 16.0 + 256.0));
        assert!(close(state.variance(), 4.0));
        assert!(close(state.kurtosis(), 8.0 * 356.0 / (32.0 * 32.0)));
    }

    #[test]
    fn test_rolling_matches_definition() {
        // Window [1, 2, 3], then 4 replaces 1
        let mut state = MomentState::new();
        for x in [1.0, 2.0, 3.0] {
            state.update(x, None);
        }
        state.update(4.0, Some(1.0));

        assert_eq!(state.count(), 3);
        assert!(close(state.mean(), 3.0));
        assert!(close(state.m2(), 2.0));
        assert!(close(state.m3(), 0.0));
        assert!(close(state.m4(), 2.0));
        assert!(close(state.kurtosis(), 1.5));
    }

    #[test]
    fn test_rolling_skewed_window() {
        // Window [0, 0, 6] → replace first 0 with 3: [0, 6, 3], mean 3
        let mut state = MomentState::new();
        for x in [0.0, 0.0, 6.0] {
            state.update(x, None);
        }
        state.update(3.0, Some(0.0));

        assert!(close(state.mean(), 3.0));
        assert!(close(state.m2(), 18.0));
        assert!(close(state.m3(), 0.0));
        assert!(close(state.m4(), 162.0));
    }

    #[test]
    fn test_skewness_sign() {
        let mut right = MomentState::new();
        for x in [1.0, 1.0, 1.0, 10.0] {
            right.update(x, None);
        }
        assert!(right.skewness() > 0.0);

        let mut left = MomentState::new();
        for x in [10.0, 10.0, 10.0, 1.0] {
            left.update(x, None);
        }
        assert!(close(left.skewness(), -right.skewness()));
    }

    #[test]
    fn test_constant_input_is_zero() {
        let mut state = MomentState::new();
        for _ in 0..3 {
            state.update(5.0, None);
        }

        assert_eq!(state.m2(), 0.0);
        assert_eq!(state.kurtosis(), 0.0);
        assert!(!state.kurtosis().is_nan());
    }

    /// Fill a window with `history`, then roll `tail` through it
    fn rolled_through<const N: usize>(
        history: [f64; N],
        tail: &[f64],
        mut each: impl FnMut(&MomentState),
    ) -> MomentState {
        let mut window = history;
        let mut state = MomentState::new();
        for x in history {
            state.update(x, None);
        }
        for (i, &x) in tail.iter().enumerate() {
            let old = core::mem::replace(&mut window[i % N], x);
            state.update(x, Some(old));
            each(&state);
        }
        state
    }

    #[test]
    fn test_window_turned_constant_is_zero() {
        for history in [[1.0, 2.0, 3.0], [0.1, 0.7, 0.3]] {
            let state = rolled_through(history, &[0.3, 0.3, 0.3], |_| {});

            assert_eq!(state.mean(), 0.3);
            assert_eq!(state.m2(), 0.0);
            assert_eq!(state.m3(), 0.0);
            assert_eq!(state.m4(), 0.0);
            assert_eq!(state.kurtosis(), 0.0, "history {:?}", history);
            assert_eq!(state.skewness(), 0.0);
        }

        let state = rolled_through([1.0, 2.0, 3.0], &[5.0, 5.0, 5.0], |_| {});
        assert_eq!(state.kurtosis(), 0.0);
    }

    #[test]
    fn test_partial_run_keeps_spread() {
        // [3, 5, 5] still has spread after two equal samples roll in
        let state = rolled_through([1.0, 2.0, 3.0], &[5.0, 5.0], |_| {});

        assert!(close(state.mean(), 13.0 / 3.0));
        assert!(close(state.m2(), 8.0 / 3.0));
        assert!(state.kurtosis() > 0.0);
    }

    #[test]
    fn test_moments_never_negative() {
        // Spread collapses to nearly nothing, then to nothing
        let tail = [0.3, 0.3 + 1e-15, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3];

        let state = rolled_through([0.1, 0.7, 0.3, 0.9, 0.2], &tail, |state| {
            assert!(state.m2() >= 0.0);
            assert!(state.m4() >= 0.0);
            assert!(state.kurtosis() >= 0.0, "kurtosis {}", state.kurtosis());
        });

        assert_eq!(state.kurtosis(), 0.0);
    }

    #[test]
    fn test_infinite_run_is_not_snapped() {
        let mut state = MomentState::new();
        state.update(f64::INFINITY, None);
        state.update(f64::INFINITY, None);

        assert!(state.m2().is_nan());
    }

    #[test]
    fn test_single_slot_window_resets() {
        let mut state = MomentState::new();
        state.update(0.1, None);
        state.update(0.3, Some(0.1));

        assert_eq!(state.count(), 1);
        assert_eq!(state.mean(), 0.3);
        assert_eq!(state.m2(), 0.0);
        assert_eq!(state.kurtosis(), 0.0);
    }

    #[test]
    fn test_two_point_kurtosis() {
        // Any two distinct points have Pearson kurtosis 1
        let mut state = MomentState::new();
        state.update(3.0, None);
        state.update(11.0, None);

        assert!(close(state.kurtosis(), 1.0));
    }

    #[test]
    fn test_nan_propagates() {
        let mut state = MomentState::new();
        state.update(1.0, None);
        state.update(f64::NAN, None);

        assert!(state.mean().is_nan());
    }

    #[test]
    fn test_clear() {
        let mut state = MomentState::new();
        state.update(1.0, None);
        state.update(2.0, None);

        state.clear();

        assert_eq!(state, MomentState::new());
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(pearson_kurtosis(5.0, 10.0, 34.0), 1.7);
        assert_eq!(pearson_kurtosis(5.0, 0.0, 0.0), 0.0);
        assert_eq!(skewness(3.0, 0.0, 1.0), 0.0);
    }
}
