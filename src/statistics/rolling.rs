//! Rolling kurtosis over a fixed-size sliding window
//!
//! Pairs a [`RingBuffer`] with a [`MomentState`]: every sample is written to
//! the ring, and whatever the ring evicts is fed back into the moment update
//! together with the new sample. Both stay consistent after every call.

use crate::config::WindowConfig;
use crate::statistics::moments::MomentState;
use crate::traits::{ConfigError, MomentSketch, Sketch};
use crate::window::RingBuffer;

/// Constant-time rolling moments over the `capacity` most recent samples
///
/// # Example
///
/// ```
/// use kurtstream::statistics::RollingKurtosis;
///
/// let mut rk = RollingKurtosis::new(3).unwrap();
///
/// for x in [1.0, 2.0, 3.0] {
///     rk.update(x);
/// }
/// // 4 evicts 1, the window is now [2, 3, 4]
/// let kurt = rk.update(4.0);
///
/// assert!((kurt - 1.5).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct RollingKurtosis {
    /// Samples currently in the window
    window: RingBuffer<f64>,
    /// Moments over exactly the samples in `window`
    state: MomentState,
    /// Samples seen since construction or the last clear
    seen: u64,
}

impl RollingKurtosis {
    /// Create an estimator over a window of `capacity` samples
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is 0 and
    /// [`ConfigError::CapacityTooLarge`] if the window cannot be allocated. A capacity
    /// of 1 is accepted but always reports a kurtosis of 0.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let window = RingBuffer::new(capacity)?;
        if capacity < 2 {
            log::warn!(
                "rolling window of {} sample cannot measure spread; kurtosis stays 0",
                capacity
            );
        }
        log::debug!("rolling kurtosis window created with capacity {}", capacity);

        Ok(Self {
            window,
            state: MomentState::new(),
            seen: 0,
        })
    }

    /// Create an estimator from a validated window configuration
    pub fn from_config(config: &WindowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Feed one sample and return the kurtosis of the updated window
    pub fn update(&mut self, value: f64) -> f64 {
        let evicted = self.window.insert(value);
        self.state.update(value, evicted);
        self.seen += 1;

        if evicted.is_none() && self.window.is_full() {
            log::debug!(
                "rolling window full after {} samples, switching to rolling updates",
                self.seen
            );
        }

        self.state.kurtosis()
    }

    /// Feed a batch of samples, returning the kurtosis after the last one
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) -> f64 {
        for v in values {
            self.update(v);
        }
        self.state.kurtosis()
    }

    /// Moments over the current window
    pub fn moments(&self) -> &MomentState {
        &self.state
    }

    /// Samples currently in the window, oldest first
    pub fn window(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }

    /// The underlying ring buffer
    pub fn buffer(&self) -> &RingBuffer<f64> {
        &self.window
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if the window has reached its capacity
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }
}

impl Sketch for RollingKurtosis {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        RollingKurtosis::update(self, *item);
    }

    fn clear(&mut self) {
        self.window.clear();
        self.state.clear();
        self.seen = 0;
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.window.size_bytes()
    }

    fn count(&self) -> u64 {
        self.seen
    }
}

impl MomentSketch for RollingKurtosis {
    fn mean(&self) -> f64 {
        self.state.mean()
    }

    fn variance(&self) -> f64 {
        self.state.variance()
    }

    fn skewness(&self) -> f64 {
        self.state.skewness()
    }

    fn kurtosis(&self) -> f64 {
        self.state.kurtosis()
    }
}
