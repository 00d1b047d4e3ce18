//! Donor-cell hydrodynamics on a 1-D grid with reflective walls.
//!
//! The state is a density field `f1` and a momentum field `f2`. Each step
//! transports both through the internal boundaries with upwind currents and
//! adds the isothermal pressure gradient `cs^2 * d(f1)/dx` to the momentum.

mod current;

use crate::error::Result;
use crate::solver::HydroParameters;
use current::{donor_cell_current, intercell_velocity};
use ndarray::{Array1, ArrayViewMut1};

pub struct Disc1dHydro<'a> {
    j1: Array1<f64>,
    j2: Array1<f64>,
    params: &'a HydroParameters,
}

impl<'a> Disc1dHydro<'a> {
    pub fn new(params: &'a HydroParameters) -> Disc1dHydro<'a> {
        let n = params.cell_num;
        Disc1dHydro {
            j1: Array1::zeros(n - 1),
            j2: Array1::zeros(n - 1),
            params,
        }
    }

    /// Advance density and momentum by one time step.
    pub fn advance(
        &mut self,
        mut f1: ArrayViewMut1<f64>,
        mut f2: ArrayViewMut1<f64>,
    ) -> Result<()> {
        let n = self.params.cell_num;
        debug_assert_eq!(f1.len(), n);
        debug_assert_eq!(f2.len(), n);
        let r = self.params.time_step / self.params.grid_spacing;
        let cs2 = self.params.sound_speed * self.params.sound_speed;

        // Upwind currents through the n-1 internal boundaries, all taken
        // from the state at the start of the step.
        for b in 0..n - 1 {
            let u = intercell_velocity(b, f1[b], f2[b], f1[b + 1], f2[b + 1])?;
            self.j1[b] = donor_cell_current(u, f1[b], f1[b + 1]);
            self.j2[b] = donor_cell_current(u, f2[b], f2[b + 1]);
        }

        for i in 1..n - 1 {
            f1[i] -= r * (self.j1[i] - self.j1[i - 1]);
        }

        // The interior density pass completes before the pressure gradient
        // is sampled; the edge cells still hold their start-of-step values
        // here since the walls are updated last. Sampling the gradient from
        // the start-of-step density instead destabilizes the scheme.
        for i in 1..n - 1 {
            f2[i] -= r * (self.j2[i] - self.j2[i - 1]);
            f2[i] -= r * cs2 * (f1[i + 1] - f1[i - 1]);
        }

        // Reflective walls: the current through the outermost boundaries is
        // handed back to the edge cells instead of leaving the domain.
        f1[0] -= r * self.j1[0];
        f1[n - 1] += r * self.j1[n - 2];
        f2[0] -= r * self.j2[0];
        f2[n - 1] += r * self.j2[n - 2];

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::current::{donor_cell_current, intercell_velocity};
    use super::*;
    use crate::error::SolverError;
    use ndarray::Array1;

    fn params(cell_num: usize, dx: f64, dt: f64, cs: f64) -> HydroParameters {
        HydroParameters::new(cell_num, dx, cs, dt, 1, 1).unwrap()
    }

    fn currents(f1: &Array1<f64>, f2: &Array1<f64>) -> (Vec<f64>, Vec<f64>) {
        let n = f1.len();
        let mut j1 = Vec::with_capacity(n - 1);
        let mut j2 = Vec::with_capacity(n - 1);
        for b in 0..n - 1 {
            let u = intercell_velocity(b, f1[b], f2[b], f1[b + 1], f2[b + 1]).unwrap();
            j1.push(donor_cell_current(u, f1[b], f1[b + 1]));
            j2.push(donor_cell_current(u, f2[b], f2[b + 1]));
        }
        (j1, j2)
    }

    #[test]
    fn pressure_gradient_samples_the_updated_interior_density() {
        let p = params(5, 1.0, 0.1, 2.0);
        let mut disc = Disc1dHydro::new(&p);
        let f1_0 = Array1::from(vec![1.0, 2.0, 1.5, 1.0, 2.0]);
        let f2_0 = Array1::from(vec![0.5, -1.0, 2.0, 0.3, -0.7]);
        let mut f1 = f1_0.clone();
        let mut f2 = f2_0.clone();
        disc.advance(f1.view_mut(), f2.view_mut()).unwrap();

        let r = p.time_step / p.grid_spacing;
        let cs2 = p.sound_speed * p.sound_speed;
        let (j1, j2) = currents(&f1_0, &f2_0);
        let f1_mid: Vec<f64> = (0..5)
            .map(|i| {
                if i == 0 || i == 4 {
                    f1_0[i]
                } else {
                    f1_0[i] - r * (j1[i] - j1[i - 1])
                }
            })
            .collect();

        let mut expected = f2_0[2];
        expected -= r * (j2[2] - j2[1]);
        expected -= r * cs2 * (f1_mid[3] - f1_mid[1]);
        assert_eq!(f2[2], expected);

        // Cell 1 reads the left wall, which is still at its start-of-step
        // value when the pressure term runs.
        let mut expected = f2_0[1];
        expected -= r * (j2[1] - j2[0]);
        expected -= r * cs2 * (f1_mid[2] - f1_0[0]);
        assert_eq!(f2[1], expected);

        // The density next to cell 2 moved this step, so a gradient taken
        // from the start-of-step density would disagree.
        let mut stale = f2_0[2];
        stale -= r * (j2[2] - j2[1]);
        stale -= r * cs2 * (f1_0[3] - f1_0[1]);
        assert_ne!(f2[2], stale);
    }

    #[test]
    fn reflective_walls_hand_back_edge_currents() {
        let p = params(3, 0.5, 0.05, 1.0);
        let mut disc = Disc1dHydro::new(&p);
        let f1_0 = Array1::from(vec![1.0, 1.5, 2.0]);
        let f2_0 = Array1::from(vec![0.8, 0.4, -0.6]);
        let mut f1 = f1_0.clone();
        let mut f2 = f2_0.clone();
        disc.advance(f1.view_mut(), f2.view_mut()).unwrap();

        let r = p.time_step / p.grid_spacing;
        let (j1, j2) = currents(&f1_0, &f2_0);
        assert_eq!(f1[0], f1_0[0] - r * j1[0]);
        assert_eq!(f1[2], f1_0[2] + r * j1[1]);
        assert_eq!(f2[0], f2_0[0] - r * j2[0]);
        assert_eq!(f2[2], f2_0[2] + r * j2[1]);
    }

    #[test]
    fn mass_is_conserved_with_reflective_walls() {
        let p = params(100, 0.1, 0.01, 1.0);
        let mut disc = Disc1dHydro::new(&p);
        let n = p.cell_num;
        let dx = p.grid_spacing;
        let sigma = n as f64 * dx / 10.0;
        let mid = 0.5 * (n - 1) as f64 * dx;
        let mut f1 = Array1::from_iter((0..n).map(|i| {
            let x = i as f64 * dx;
            0.5 * (-(x - mid) * (x - mid) / (2.0 * sigma * sigma)).exp() + 0.5
        }));
        let mut f2 = &f1 - 0.5;

        let mass0 = f1.sum() * dx;
        for _ in 0..500 {
            disc.advance(f1.view_mut(), f2.view_mut()).unwrap();
        }
        let mass1 = f1.sum() * dx;
        assert!((mass1 - mass0).abs() < 1e-9 * mass0.abs());
    }

    #[test]
    fn symmetric_bump_keeps_total_momentum_after_one_step() {
        let p = params(10000, 0.001, 1e-6, 300.0);
        let mut disc = Disc1dHydro::new(&p);
        let n = p.cell_num;
        let dx = p.grid_spacing;
        let x = Array1::from_iter((0..n).map(|i| i as f64 * dx));
        let mid = x.sum() / n as f64;
        let sigma = n as f64 * dx / 10.0;
        let mut f1 =
            x.mapv(|xi| 0.5 * (-(xi - mid) * (xi - mid) / (2.0 * sigma * sigma)).exp() + 0.5);
        let mut f2 = 100.0 * (&f1 - 0.5);

        let momentum0 = f2.sum();
        disc.advance(f1.view_mut(), f2.view_mut()).unwrap();
        let momentum1 = f2.sum();
        assert!((momentum1 - momentum0).abs() < 1e-5);
    }

    #[test]
    fn advance_fails_fast_on_non_positive_density() {
        let p = params(5, 1.0, 0.1, 2.0);
        let mut disc = Disc1dHydro::new(&p);
        let mut f1 = Array1::from(vec![1.0, 2.0, 1.5, 0.0, 2.0]);
        let mut f2 = Array1::zeros(5);
        let err = disc.advance(f1.view_mut(), f2.view_mut()).unwrap_err();
        assert!(matches!(
            err,
            SolverError::NonPositiveDensity { cell: 3, .. }
        ));
    }
}
