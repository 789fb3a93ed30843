//! Step-by-step cross-check of the incremental estimator
//!
//! The harness drives a [`RollingKurtosis`] sample by sample and, at chosen
//! checkpoints, recomputes the window's moments from its literal contents in
//! two independent ways: the two-pass [`BatchMoments`] definition and a fresh
//! [`RunningStats`] accumulation. Any disagreement beyond the tolerance is
//! recorded as a [`Mismatch`].

use crate::statistics::{RollingKurtosis, RunningStats};
use crate::traits::{ConfigError, MomentSketch, Sketch};
use crate::validation::batch::BatchMoments;

/// When the harness compares against recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoints {
    /// After every sample
    EveryStep,
    /// After every `k`-th sample (k of 0 behaves like 1)
    Every(u64),
    /// Only after the last sample passed to [`ValidationHarness::run`]
    Final,
}

/// Quantity that disagreed with the recomputed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Mean,
    M2,
    M4,
    Kurtosis,
    /// Kurtosis disagreed with the cumulative reference accumulator
    ReferenceKurtosis,
}

/// One checkpoint's incremental and recomputed values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// 1-based index of the sample just fed
    pub step: u64,
    /// Incremental kurtosis
    pub kurtosis: f64,
    /// Two-pass moments over the literal window
    pub batch: BatchMoments,
    /// Kurtosis from [`RunningStats`] over the literal window
    pub reference_kurtosis: f64,
    /// Largest difference among all compared quantities, NaN if any is NaN
    pub max_error: f64,
}

/// A compared quantity that exceeded the tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub step: u64,
    pub quantity: Quantity,
    pub incremental: f64,
    pub expected: f64,
    pub error: f64,
}

/// Outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Samples fed during the run
    pub samples: u64,
    /// Checkpoints evaluated
    pub checks: u64,
    /// Largest difference observed at any checkpoint, NaN once any was NaN
    pub max_error: f64,
    /// Every comparison that exceeded the tolerance
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    /// True if every checkpoint agreed within tolerance
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Difference scaled by magnitude: `|a - b| / max(|a|, |b|, 1)`
///
/// Relative for large values, absolute near zero. NaN when exactly one side
/// is NaN; two NaNs agree.
pub fn relative_difference(a: f64, b: f64) -> f64 {
    if a == b || (a.is_nan() && b.is_nan()) {
        return 0.0;
    }
    (a - b).abs() / a.abs().max(b.abs()).max(1.0)
}

/// Larger of two errors, NaN if either is NaN
fn worst(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Drives an incremental estimator and checks it against recomputation
///
/// # Example
///
/// ```
/// use kurtstream::validation::{Checkpoints, ValidationHarness};
///
/// let mut harness = ValidationHarness::new(4, 1e-9)
///     .unwrap()
///     .with_checkpoints(Checkpoints::EveryStep);
///
/// let report = harness.run([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
///
/// assert_eq!(report.checks, 8);
/// assert!(report.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationHarness {
    estimator: RollingKurtosis,
    tolerance: f64,
    checkpoints: Checkpoints,
    step: u64,
    /// Reused copy of the window contents
    scratch: Vec<f64>,
}

impl ValidationHarness {
    /// Harness over a window of `capacity` samples, checking every step
    pub fn new(capacity: usize, tolerance: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            estimator: RollingKurtosis::new(capacity)?,
            tolerance,
            checkpoints: Checkpoints::EveryStep,
            step: 0,
            scratch: Vec::with_capacity(capacity),
        })
    }

    /// Set when comparisons happen
    pub fn with_checkpoints(mut self, checkpoints: Checkpoints) -> Self {
        self.checkpoints = checkpoints;
        self
    }

    /// The estimator under test
    pub fn estimator(&self) -> &RollingKurtosis {
        &self.estimator
    }

    /// Feed one sample, comparing if this step is a checkpoint
    ///
    /// With [`Checkpoints::Final`] this never compares; use
    /// [`check`](Self::check) or [`run`](Self::run).
    pub fn feed(&mut self, value: f64) -> Option<Comparison> {
        self.estimator.update(value);
        self.step += 1;

        let due = match self.checkpoints {
            Checkpoints::EveryStep => true,
            Checkpoints::Every(k) => self.step % k.max(1) == 0,
            Checkpoints::Final => false,
        };

        if due {
            Some(self.check())
        } else {
            None
        }
    }

    /// Compare the current state against recomputation now
    pub fn check(&mut self) -> Comparison {
        self.scratch.clear();
        self.scratch.extend(self.estimator.window());

        let batch = BatchMoments::from_window(&self.scratch);
        let reference = RunningStats::from_slice(&self.scratch);
        let moments = self.estimator.moments();

        let kurtosis = moments.kurtosis();
        let reference_kurtosis = reference.kurtosis();

        let max_error = [
            relative_difference(moments.mean(), batch.mean),
            relative_difference(moments.m2(), batch.m2),
            relative_difference(moments.m4(), batch.m4),
            relative_difference(kurtosis, batch.kurtosis()),
            relative_difference(kurtosis, reference_kurtosis),
        ]
        .into_iter()
        .fold(0.0, worst);

        Comparison {
            step: self.step,
            kurtosis,
            batch,
            reference_kurtosis,
            max_error,
        }
    }

    /// Feed a whole stream and collect every disagreement
    pub fn run<I: IntoIterator<Item = f64>>(&mut self, samples: I) -> ValidationReport {
        let mut report = ValidationReport::default();

        for x in samples {
            report.samples += 1;
            if let Some(cmp) = self.feed(x) {
                self.record(&cmp, &mut report);
            }
        }

        if self.checkpoints == Checkpoints::Final && report.samples > 0 {
            let cmp = self.check();
            self.record(&cmp, &mut report);
        }

        if report.is_ok() {
            log::debug!(
                "validated {} samples at {} checkpoints, max error {:e}",
                report.samples,
                report.checks,
                report.max_error
            );
        } else {
            log::warn!(
                "{} mismatches over {} checkpoints, max error {:e}",
                report.mismatches.len(),
                report.checks,
                report.max_error
            );
        }

        report
    }

    /// Reset the estimator and step counter
    pub fn clear(&mut self) {
        self.estimator.clear();
        self.step = 0;
    }

    /// NaN is never within tolerance
    fn within_tolerance(&self, error: f64) -> bool {
        error <= self.tolerance
    }

    fn record(&self, cmp: &Comparison, report: &mut ValidationReport) {
        report.checks += 1;
        report.max_error = worst(report.max_error, cmp.max_error);

        if self.within_tolerance(cmp.max_error) {
            return;
        }

        let moments = self.estimator.moments();
        let candidates = [
            (Quantity::Mean, moments.mean(), cmp.batch.mean),
            (Quantity::M2, moments.m2(), cmp.batch.m2),
            (Quantity::M4, moments.m4(), cmp.batch.m4),
            (Quantity::Kurtosis, cmp.kurtosis, cmp.batch.kurtosis()),
            (
                Quantity::ReferenceKurtosis,
                cmp.kurtosis,
                cmp.reference_kurtosis,
            ),
        ];

        for (quantity, incremental, expected) in candidates {
            let error = relative_difference(incremental, expected);
            if !self.within_tolerance(error) {
                log::warn!(
                    "step {}: {:?} incremental {} vs recomputed {} (error {:e})",
                    cmp.step,
                    quantity,
                    incremental,
                    expected,
                    error
                );
                report.mismatches.push(Mismatch {
                    step: cmp.step,
                    quantity,
                    incremental,
                    expected,
                    error,
                });
            }
        }
    }
}
