//! Core traits for streaming moment estimators
//!
//! All estimators implement the base [`Sketch`] trait. Estimators that track
//! central moments additionally implement [`MomentSketch`].

use core::fmt::Debug;

/// Error raised while constructing an estimator or its configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Window capacity must hold at least one sample
    ZeroCapacity,
    /// Window storage cannot be addressed or allocated
    CapacityTooLarge,
    /// A channel bank needs at least one channel
    NoChannels,
    /// Sample rate must be finite and positive
    InvalidSampleRate(f64),
    /// Window duration must be finite and positive
    InvalidDuration(f64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "window capacity must be at least 1"),
            ConfigError::CapacityTooLarge => {
                write!(f, "window capacity too large to allocate")
            }
            ConfigError::NoChannels => write!(f, "channel bank needs at least one channel"),
            ConfigError::InvalidSampleRate(hz) => {
                write!(f, "invalid sample rate: {} Hz", hz)
            }
            ConfigError::InvalidDuration(secs) => {
                write!(f, "invalid window duration: {} s", secs)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error raised while feeding a multi-channel frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// Frame does not carry one sample per channel
    FrameLength { expected: usize, found: usize },
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::FrameLength { expected, found } => {
                write!(f, "frame length mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}

/// Core trait for all streaming estimators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Estimators that track the first four central moments
///
/// All accessors use population normalization (divide by `n`). Kurtosis
/// follows the Pearson convention: a normal distribution yields ~3.0.
pub trait MomentSketch: Sketch<Item = f64> {
    /// Mean of the tracked samples
    fn mean(&self) -> f64;

    /// Population variance (`M2 / n`)
    fn variance(&self) -> f64;

    /// Population skewness (`sqrt(n) * M3 / M2^1.5`), 0 without spread
    fn skewness(&self) -> f64;

    /// Pearson kurtosis (`n * M4 / M2^2`), 0 without spread
    fn kurtosis(&self) -> f64;

    /// Population standard deviation
    fn stddev(&self) -> f64 {
        crate::math::sqrt(self.variance())
    }

    /// Excess kurtosis (Pearson kurtosis - 3)
    ///
    /// Note that a window without spread reports -3 here, since its
    /// Pearson kurtosis is defined as 0.
    fn excess_kurtosis(&self) -> f64 {
        self.kurtosis() - 3.0
    }
}
