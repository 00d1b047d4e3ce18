//! Explicit schemes for the linear advection equation `df/dt + u*df/dx = 0`.
//!
//! Both schemes share one contract: read the full input field, write the
//! advanced field into a caller-provided buffer, then pin the two end cells
//! to the initial ramp values. Neighbor lookup is circular for every cell
//! and the overwrite corrects the unphysical periodic coupling this would
//! otherwise introduce at the open ends.

use ndarray::{ArrayView1, ArrayViewMut1};

/// One explicit update of the advected field.
///
/// `alpha` is the fixed scheme coefficient `u*dt/(2*dx)`. Implementations
/// never read `out` and never write `f`, so callers may double-buffer.
pub trait AdvectionScheme {
    fn name(&self) -> &'static str;

    fn step(&self, x: ArrayView1<f64>, f: ArrayView1<f64>, out: ArrayViewMut1<f64>, alpha: f64);
}

/// Forward-Time Central-Space. Non-diffusive; develops the oscillations the
/// Lax-Friedrichs variant exists to damp.
pub struct Ftcs;

impl AdvectionScheme for Ftcs {
    fn name(&self) -> &'static str {
        "ftcs"
    }

    fn step(
        &self,
        x: ArrayView1<f64>,
        f: ArrayView1<f64>,
        mut out: ArrayViewMut1<f64>,
        alpha: f64,
    ) {
        let n = f.len();
        debug_assert_eq!(x.len(), n);
        debug_assert_eq!(out.len(), n);
        for i in 0..n {
            let right = f[(i + 1) % n];
            let left = f[(i + n - 1) % n];
            out[i] = f[i] - alpha * (right - left);
        }
        pin_boundary(x, out);
    }
}

/// Lax-Friedrichs: the neighbor average replaces the local value, which adds
/// the numerical diffusion FTCS lacks.
pub struct LaxFriedrichs;

impl AdvectionScheme for LaxFriedrichs {
    fn name(&self) -> &'static str {
        "lax"
    }

    fn step(
        &self,
        x: ArrayView1<f64>,
        f: ArrayView1<f64>,
        mut out: ArrayViewMut1<f64>,
        alpha: f64,
    ) {
        let n = f.len();
        debug_assert_eq!(x.len(), n);
        debug_assert_eq!(out.len(), n);
        for i in 0..n {
            let right = f[(i + 1) % n];
            let left = f[(i + n - 1) % n];
            out[i] = 0.5 * (right + left) - alpha * (right - left);
        }
        pin_boundary(x, out);
    }
}

/// Dirichlet pinning: both ends are held at the initial ramp values. The
/// wrapped reads above only ever land in these two cells, so the overwrite
/// masks the wrap completely.
fn pin_boundary(x: ArrayView1<f64>, mut out: ArrayViewMut1<f64>) {
    let n = out.len();
    out[0] = x[0];
    out[n - 1] = x[n - 1];
}
