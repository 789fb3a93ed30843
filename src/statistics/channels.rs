//! Independent rolling estimators for multi-axis sensors
//!
//! Each channel (e.g. the x, y and z axes of an accelerometer) owns its own
//! window and moments. Nothing is shared between channels, so a bank can also
//! be split and driven from separate threads.

use crate::statistics::rolling::RollingKurtosis;
use crate::traits::{ChannelError, ConfigError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A fixed set of [`RollingKurtosis`] estimators sharing one window size
///
/// # Example
///
/// ```
/// use kurtstream::statistics::ChannelBank;
///
/// let mut bank = ChannelBank::new(3, 50).unwrap();
///
/// let kurt = bank.update(&[0.01, -0.98, 0.12]).unwrap();
/// assert_eq!(kurt.len(), 3);
///
/// // One sample per channel is required
/// assert!(bank.update(&[0.0, 1.0]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ChannelBank {
    channels: Vec<RollingKurtosis>,
    /// Kurtosis of each channel after the last frame
    latest: Vec<f64>,
}

impl ChannelBank {
    /// Create `channels` estimators, each over `capacity` samples
    pub fn new(channels: usize, capacity: usize) -> Result<Self, ConfigError> {
        if channels == 0 {
            return Err(ConfigError::NoChannels);
        }

        let bank = (0..channels)
            .map(|_| RollingKurtosis::new(capacity))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "channel bank created with {} channels of capacity {}",
            channels,
            capacity
        );

        Ok(Self {
            channels: bank,
            latest: core::iter::repeat(0.0).take(channels).collect(),
        })
    }

    /// Feed one frame (one sample per channel), returning each channel's kurtosis
    pub fn update(&mut self, frame: &[f64]) -> Result<&[f64], ChannelError> {
        if frame.len() != self.channels.len() {
            return Err(ChannelError::FrameLength {
                expected: self.channels.len(),
                found: frame.len(),
            });
        }

        for ((estimator, out), &x) in self
            .channels
            .iter_mut()
            .zip(self.latest.iter_mut())
            .zip(frame)
        {
            *out = estimator.update(x);
        }

        Ok(&self.latest)
    }

    /// Kurtosis of each channel after the last frame
    pub fn kurtosis(&self) -> &[f64] {
        &self.latest
    }

    /// Estimator for channel `index`
    pub fn channel(&self, index: usize) -> Option<&RollingKurtosis> {
        self.channels.get(index)
    }

    /// All channel estimators
    pub fn channels(&self) -> &[RollingKurtosis] {
        &self.channels
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always false: a bank has at least one channel
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Reset every channel
    pub fn clear(&mut self) {
        for estimator in &mut self.channels {
            crate::traits::Sketch::clear(estimator);
        }
        self.latest.iter_mut().for_each(|k| *k = 0.0);
    }
}
