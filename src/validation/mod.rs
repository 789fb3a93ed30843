//! Correctness and timing checks against direct recomputation
//!
//! The incremental estimators never rescan their window. This module does,
//! deliberately: it recomputes the moments of the literal window contents and
//! compares, and it times both approaches side by side.
//!
//! # Example
//!
//! ```
//! use kurtstream::validation::{compare_timing, BatchMoments, ValidationHarness};
//!
//! let stream: Vec<f64> = (0..1_000).map(|i| ((i * 7919) % 1000) as f64 / 1000.0).collect();
//!
//! let mut harness = ValidationHarness::new(100, 1e-9).unwrap();
//! assert!(harness.run(stream.iter().copied()).is_ok());
//!
//! let timing = compare_timing(&stream, 100).unwrap();
//! println!("speedup: {:.1}x", timing.speedup());
//!
//! let oracle = BatchMoments::from_window(&stream[900..]);
//! assert!((oracle.kurtosis() - timing.batch_kurtosis).abs() < 1e-12);
//! ```

mod batch;
mod harness;
mod timing;

pub use batch::BatchMoments;
pub use harness::{
    relative_difference, Checkpoints, Comparison, Mismatch, Quantity, ValidationHarness,
    ValidationReport,
};
pub use timing::{compare_timing, TimingReport};
