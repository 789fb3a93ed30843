//! Moment estimators for streaming signals
//!
//! This module provides constant-time estimators of mean, variance, skewness
//! and kurtosis, either over a sliding window ([`RollingKurtosis`]) or over
//! every sample seen ([`RunningStats`]).
//!
//! # Example
//!
//! ```
//! use kurtstream::statistics::RollingKurtosis;
//! use kurtstream::traits::MomentSketch;
//!
//! // 10 s window of a 50 Hz sensor
//! let mut rk = RollingKurtosis::new(500).unwrap();
//!
//! for i in 0..2_000 {
//!     let tilt = (i as f64 * 0.05).sin();
//!     rk.update(tilt);
//! }
//!
//! println!("Kurtosis: {}", rk.kurtosis());
//! println!("Skewness: {}", rk.skewness());
//! println!("Stddev: {}", rk.stddev());
//! ```

mod channels;
mod moments;
mod rolling;
mod running;

pub use channels::ChannelBank;
pub use moments::{pearson_kurtosis, skewness, MomentState};
pub use rolling::RollingKurtosis;
pub use running::RunningStats;
