//! Wall-clock comparison of incremental vs. recomputed kurtosis
//!
//! Observational only: results depend on the machine and are never used to
//! decide correctness.

use std::time::{Duration, Instant};

use crate::statistics::RollingKurtosis;
use crate::traits::ConfigError;
use crate::validation::batch::BatchMoments;
use crate::window::RingBuffer;

/// Time spent producing one kurtosis value per sample, both ways
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingReport {
    /// Window capacity
    pub capacity: usize,
    /// Samples processed by each path
    pub ticks: u64,
    /// Total time of the O(1) incremental path
    pub incremental: Duration,
    /// Total time of the O(capacity) recomputation path
    pub batch: Duration,
    /// Kurtosis after the last tick, incremental path
    pub incremental_kurtosis: f64,
    /// Kurtosis after the last tick, recomputation path
    pub batch_kurtosis: f64,
}

impl TimingReport {
    /// How many times faster the incremental path ran
    pub fn speedup(&self) -> f64 {
        let incremental = self.incremental.as_secs_f64();
        if incremental == 0.0 {
            f64::INFINITY
        } else {
            self.batch.as_secs_f64() / incremental
        }
    }

    /// Mean time per tick of the incremental path
    pub fn incremental_per_tick(&self) -> Duration {
        per_tick(self.incremental, self.ticks)
    }

    /// Mean time per tick of the recomputation path
    pub fn batch_per_tick(&self) -> Duration {
        per_tick(self.batch, self.ticks)
    }
}

fn per_tick(total: Duration, ticks: u64) -> Duration {
    if ticks == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(total.as_secs_f64() / ticks as f64)
    }
}

/// Run `samples` through both paths over a window of `capacity`
pub fn compare_timing(samples: &[f64], capacity: usize) -> Result<TimingReport, ConfigError> {
    let mut estimator = RollingKurtosis::new(capacity)?;
    let mut incremental_kurtosis = 0.0;
    let start = Instant::now();
    for &x in samples {
        incremental_kurtosis = estimator.update(x);
    }
    let incremental = start.elapsed();

    let mut ring = RingBuffer::new(capacity)?;
    let mut scratch = Vec::with_capacity(capacity);
    let mut batch_kurtosis = 0.0;
    let start = Instant::now();
    for &x in samples {
        ring.insert(x);
        let (head, tail) = ring.as_slices();
        scratch.clear();
        scratch.extend_from_slice(head);
        scratch.extend_from_slice(tail);
        batch_kurtosis = BatchMoments::from_window(&scratch).kurtosis();
    }
    let batch = start.elapsed();

    let report = TimingReport {
        capacity,
        ticks: samples.len() as u64,
        incremental,
        batch,
        incremental_kurtosis,
        batch_kurtosis,
    };

    log::info!(
        "capacity {}: incremental {:?}/tick, recompute {:?}/tick ({:.1}x)",
        capacity,
        report.incremental_per_tick(),
        report.batch_per_tick(),
        report.speedup()
    );

    Ok(report)
}
