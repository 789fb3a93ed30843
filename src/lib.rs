//! # Kurtstream
//!
//! Constant-time rolling moments for streaming signals.
//!
//! Kurtstream keeps the mean, variance, skewness and Pearson kurtosis of the
//! most recent `N` samples of a signal, updating them in O(1) per sample
//! instead of rescanning the window. It is built for sensors that tick tens
//! of times per second on small devices, such as a wrist-worn IMU tracking
//! movement diversity through the kurtosis of its tilt angle.
//!
//! ## Features
//!
//! - **Rolling moments**: [`RollingKurtosis`] over a fixed window
//! - **Cumulative moments**: [`RunningStats`] over every sample seen
//! - **Multi-axis sensors**: [`ChannelBank`] with one window per axis
//! - **Validation**: cross-checks against direct two-pass recomputation and
//!   timing of both approaches
//!
//! ## Quick Start
//!
//! ```rust
//! use kurtstream::prelude::*;
//!
//! let mut rk = RollingKurtosis::new(5).unwrap();
//!
//! for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     rk.update(x);
//! }
//!
//! // Pearson convention: a normal distribution gives ~3.0
//! assert!((rk.kurtosis() - 1.7).abs() < 1e-9);
//! ```
//!
//! ## Numerics
//!
//! Kurtosis and skewness read 0 whenever the stored `M2` is exactly 0. The
//! estimators guarantee that for a window of identical finite samples, however
//! the window got there: they count how many of the newest samples are equal
//! and zero the central sums once that run spans the window. Rolling rounding
//! residue is clamped so `M2` and `M4` are never negative. Non-finite samples
//! are not filtered and propagate through the moments per IEEE arithmetic.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `validation` (default): Recomputation oracle, validation harness, timing
//! - `serde`: Enable serialization of configuration and moment state
//! - `full`: Enable everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod config;
pub mod statistics;
pub mod window;

#[cfg(feature = "validation")]
#[cfg_attr(docsrs, doc(cfg(feature = "validation")))]
pub mod validation;

mod math;

pub mod prelude {
    pub use crate::config::WindowConfig;
    pub use crate::statistics::{ChannelBank, MomentState, RollingKurtosis, RunningStats};
    pub use crate::traits::*;
    pub use crate::window::RingBuffer;

    #[cfg(feature = "validation")]
    pub use crate::validation::{BatchMoments, ValidationHarness};
}

pub use config::WindowConfig;
pub use statistics::{ChannelBank, MomentState, RollingKurtosis, RunningStats};
pub use traits::{ChannelError, ConfigError};
