//! Run-time health numbers for a field run.
//!
//! The hydro scheme conserves total mass up to floating-point roundoff, so
//! drift against the starting value exposes a broken boundary update or a
//! diverging run long before the fields turn to NaN.

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;

/// Total mass of a density field, `sum(f1) * dx`.
pub fn total_mass(f1: ArrayView1<f64>, dx: f64) -> f64 {
    f1.sum() * dx
}

/// Total momentum of a momentum field.
pub fn total_momentum(f2: ArrayView1<f64>) -> f64 {
    f2.sum()
}

/// Largest magnitude in a field; NaN when the field holds NaN.
pub fn max_abs(f: ArrayView1<f64>) -> f64 {
    f.mapv(f64::abs).max().copied().unwrap_or(f64::NAN)
}

/// Smallest value in a field; NaN when the field holds NaN.
pub fn min_value(f: ArrayView1<f64>) -> f64 {
    f.min().copied().unwrap_or(f64::NAN)
}

/// Baseline conserved quantities, captured before the run starts.
#[derive(Debug, Clone)]
pub struct ConservationState {
    pub baseline_mass: f64,
    pub baseline_momentum: f64,
}

impl ConservationState {
    pub fn new(f1: ArrayView1<f64>, f2: ArrayView1<f64>, dx: f64) -> Self {
        Self {
            baseline_mass: total_mass(f1, dx),
            baseline_momentum: total_momentum(f2),
        }
    }
}

/// Drift of the conserved quantities against a baseline.
#[derive(Debug, Clone)]
pub struct ConservationMonitor {
    /// Relative mass error: |m - m0| / |m0|
    pub mass_error: f64,
    /// Absolute momentum error: |p - p0|
    pub momentum_error: f64,
}

impl ConservationMonitor {
    pub fn check(
        baseline: &ConservationState,
        f1: ArrayView1<f64>,
        f2: ArrayView1<f64>,
        dx: f64,
    ) -> Self {
        let mass = total_mass(f1, dx);
        let momentum = total_momentum(f2);

        // A near-zero baseline falls back to absolute drift.
        let mass_error = if baseline.baseline_mass.abs() > 1e-12 {
            (mass - baseline.baseline_mass).abs() / baseline.baseline_mass.abs()
        } else {
            (mass - baseline.baseline_mass).abs()
        };

        Self {
            mass_error,
            momentum_error: (momentum - baseline.baseline_momentum).abs(),
        }
    }
}
