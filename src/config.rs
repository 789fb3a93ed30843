//! Window configuration
//!
//! A window is sized in samples. Sensors usually describe it as a duration at
//! a nominal sample rate, so [`WindowConfig`] carries both.

use crate::math;
use crate::traits::ConfigError;

/// Nominal sample rate of a wrist-worn IMU stream
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 50.0;

/// Default window duration in seconds
pub const DEFAULT_WINDOW_SECONDS: f64 = 10.0;

/// Largest window whose `f64` storage fits the address space
pub const MAX_CAPACITY: usize = isize::MAX as usize / core::mem::size_of::<f64>();

/// Sliding window size and the sample rate it was derived from
///
/// # Example
///
/// ```
/// use kurtstream::config::WindowConfig;
///
/// let config = WindowConfig::from_duration(4.0, 50.0).unwrap();
/// assert_eq!(config.capacity, 200);
/// assert_eq!(config.window_seconds(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Number of samples in the window
    pub capacity: usize,
    /// Nominal sample rate in Hz
    pub sample_rate_hz: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: (DEFAULT_WINDOW_SECONDS * DEFAULT_SAMPLE_RATE_HZ) as usize,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

impl WindowConfig {
    /// Window of `capacity` samples at the default sample rate
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Window covering `seconds` of a stream sampled at `sample_rate_hz`
    ///
    /// The capacity is rounded to the nearest whole sample.
    pub fn from_duration(seconds: f64, sample_rate_hz: f64) -> Result<Self, ConfigError> {
        if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
            return Err(ConfigError::InvalidSampleRate(sample_rate_hz));
        }
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(ConfigError::InvalidDuration(seconds));
        }

        // `as usize` saturates, so range-check in floating point first
        let samples = math::round(seconds * sample_rate_hz);
        if samples > MAX_CAPACITY as f64 {
            return Err(ConfigError::CapacityTooLarge);
        }

        let config = Self {
            capacity: samples as usize,
            sample_rate_hz,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge);
        }
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate_hz));
        }
        Ok(())
    }

    /// Duration covered by a full window, in seconds
    pub fn window_seconds(&self) -> f64 {
        self.capacity as f64 / self.sample_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = WindowConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.window_seconds(), DEFAULT_WINDOW_SECONDS);
    }

    #[test]
    fn test_from_duration_rounds() {
        let config = WindowConfig::from_duration(0.25, 30.0).unwrap();
        assert_eq!(config.capacity, 8);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            WindowConfig::from_duration(1.0, 0.0).unwrap_err(),
            ConfigError::InvalidSampleRate(0.0)
        );
        assert_eq!(
            WindowConfig::from_duration(-2.0, 50.0).unwrap_err(),
            ConfigError::InvalidDuration(-2.0)
        );
        assert!(matches!(
            WindowConfig::from_duration(f64::NAN, 50.0),
            Err(ConfigError::InvalidDuration(_))
        ));
        // Too short to hold a single sample
        assert_eq!(
            WindowConfig::from_duration(0.001, 50.0).unwrap_err(),
            ConfigError::ZeroCapacity
        );
    }

    #[test]
    fn test_oversized_duration_rejected() {
        assert_eq!(
            WindowConfig::from_duration(1e300, 50.0).unwrap_err(),
            ConfigError::CapacityTooLarge
        );
        // Finite inputs whose product overflows to infinity
        assert_eq!(
            WindowConfig::from_duration(1e200, 1e200).unwrap_err(),
            ConfigError::CapacityTooLarge
        );
        assert_eq!(
            WindowConfig::new(usize::MAX).validate(),
            Err(ConfigError::CapacityTooLarge)
        );
        assert!(WindowConfig::new(MAX_CAPACITY).validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            WindowConfig::new(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );

        let config = WindowConfig {
            capacity: 10,
            sample_rate_hz: f64::INFINITY,
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = WindowConfig::from_duration(2.0, 100.0).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: WindowConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }
}
