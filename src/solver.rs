//! Run drivers: parameter bundles, the per-scheme state they own, and the
//! iteration loops that feed the frame sink.

use crate::diagnostics::{self, ConservationMonitor, ConservationState};
use crate::disc::advection1d::{AdvectionScheme, Ftcs, LaxFriedrichs};
use crate::disc::grid::Grid1d;
use crate::disc::hydro1d::Disc1dHydro;
use crate::error::{Result, SolverError};
use crate::sink::{FrameSink, at_cadence};
use ndarray::Array1;
use tracing::{debug, info, warn};

/// Setup of one advection run. Both schemes share it.
pub struct AdvectionParameters {
    pub cell_num: usize,
    pub grid_spacing: f64,
    pub velocity: f64,
    pub time_step: f64,
    pub final_step: usize,
    pub render_every: usize,
}

impl AdvectionParameters {
    /// Derives the time step with a tenfold margin below the CFL limit
    /// `dx/|u|`.
    pub fn new(
        cell_num: usize,
        grid_spacing: f64,
        velocity: f64,
        final_step: usize,
        render_every: usize,
    ) -> Result<AdvectionParameters> {
        if !(velocity.is_finite() && velocity != 0.0) {
            return Err(SolverError::BadVelocity(velocity));
        }
        let time_step = grid_spacing / (10.0 * velocity.abs());
        Self::with_time_step(
            cell_num,
            grid_spacing,
            velocity,
            time_step,
            final_step,
            render_every,
        )
    }

    /// Same validation with an explicit time step, for runs that probe the
    /// stability boundary.
    pub fn with_time_step(
        cell_num: usize,
        grid_spacing: f64,
        velocity: f64,
        time_step: f64,
        final_step: usize,
        render_every: usize,
    ) -> Result<AdvectionParameters> {
        if !velocity.is_finite() {
            return Err(SolverError::BadVelocity(velocity));
        }
        validate_common(cell_num, grid_spacing, time_step, final_step, render_every)?;
        Ok(AdvectionParameters {
            cell_num,
            grid_spacing,
            velocity,
            time_step,
            final_step,
            render_every,
        })
    }

    /// Scheme coefficient `u*dt/(2*dx)`.
    pub fn alpha(&self) -> f64 {
        self.velocity * self.time_step / (2.0 * self.grid_spacing)
    }

    /// CFL number `|u|*dt/dx`.
    pub fn cfl_number(&self) -> f64 {
        self.velocity.abs() * self.time_step / self.grid_spacing
    }
}

/// Setup of one hydro run.
pub struct HydroParameters {
    pub cell_num: usize,
    pub grid_spacing: f64,
    pub sound_speed: f64,
    pub time_step: f64,
    pub final_step: usize,
    pub render_every: usize,
}

impl HydroParameters {
    pub fn new(
        cell_num: usize,
        grid_spacing: f64,
        sound_speed: f64,
        time_step: f64,
        final_step: usize,
        render_every: usize,
    ) -> Result<HydroParameters> {
        if !(sound_speed.is_finite() && sound_speed > 0.0) {
            return Err(SolverError::BadSoundSpeed(sound_speed));
        }
        validate_common(cell_num, grid_spacing, time_step, final_step, render_every)?;
        Ok(HydroParameters {
            cell_num,
            grid_spacing,
            sound_speed,
            time_step,
            final_step,
            render_every,
        })
    }

    /// CFL number of the sound waves, `cs*dt/dx`.
    pub fn cfl_number(&self) -> f64 {
        self.sound_speed * self.time_step / self.grid_spacing
    }
}

fn validate_common(
    cell_num: usize,
    grid_spacing: f64,
    time_step: f64,
    final_step: usize,
    render_every: usize,
) -> Result<()> {
    if cell_num < 3 {
        return Err(SolverError::GridTooSmall(cell_num));
    }
    if !(grid_spacing.is_finite() && grid_spacing > 0.0) {
        return Err(SolverError::BadSpacing(grid_spacing));
    }
    if !(time_step.is_finite() && time_step > 0.0) {
        return Err(SolverError::BadTimeStep(time_step));
    }
    if final_step == 0 {
        return Err(SolverError::ZeroIterations);
    }
    if render_every == 0 {
        return Err(SolverError::ZeroCadence);
    }
    Ok(())
}

/// Runs FTCS and Lax-Friedrichs side by side from the same ramp, so one
/// sink receives both fields per frame.
pub struct AdvectionSolver<'a> {
    pub current_step: usize,
    pub f_ftcs: Array1<f64>,
    pub f_lax: Array1<f64>,
    scratch: Array1<f64>,
    grid: &'a Grid1d,
    params: &'a AdvectionParameters,
}

impl<'a> AdvectionSolver<'a> {
    /// Both schemes start from the same field; each then evolves its own
    /// copy.
    pub fn new(
        grid: &'a Grid1d,
        f0: Array1<f64>,
        params: &'a AdvectionParameters,
    ) -> AdvectionSolver<'a> {
        debug_assert_eq!(grid.cell_num(), params.cell_num);
        debug_assert_eq!(f0.len(), params.cell_num);
        AdvectionSolver {
            current_step: 0,
            f_ftcs: f0.clone(),
            f_lax: f0,
            scratch: Array1::zeros(grid.cell_num()),
            grid,
            params,
        }
    }

    /// One step of both schemes from their respective previous states.
    pub fn advance(&mut self) {
        let alpha = self.params.alpha();
        Ftcs.step(
            self.grid.x.view(),
            self.f_ftcs.view(),
            self.scratch.view_mut(),
            alpha,
        );
        std::mem::swap(&mut self.f_ftcs, &mut self.scratch);
        LaxFriedrichs.step(
            self.grid.x.view(),
            self.f_lax.view(),
            self.scratch.view_mut(),
            alpha,
        );
        std::mem::swap(&mut self.f_lax, &mut self.scratch);
        self.current_step += 1;
    }

    pub fn solve(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        info!(
            cells = self.params.cell_num,
            steps = self.params.final_step,
            cfl = self.params.cfl_number(),
            "starting advection run"
        );
        for _ in 0..self.params.final_step {
            let step = self.current_step;
            self.advance();
            if at_cadence(step, self.params.render_every, 1) {
                sink.push(
                    step,
                    self.grid.coords(),
                    &[
                        (Ftcs.name(), self.f_ftcs.view()),
                        (LaxFriedrichs.name(), self.f_lax.view()),
                    ],
                )?;
                debug!(
                    step,
                    ftcs_max = diagnostics::max_abs(self.f_ftcs.view()),
                    lax_max = diagnostics::max_abs(self.f_lax.view()),
                    "rendered frame"
                );
            }
        }
        let ftcs_max = diagnostics::max_abs(self.f_ftcs.view());
        if !ftcs_max.is_finite() {
            warn!(ftcs_max, "ftcs field diverged");
        }
        info!(
            ftcs_max,
            lax_max = diagnostics::max_abs(self.f_lax.view()),
            "advection run finished"
        );
        Ok(())
    }
}

/// Runs the donor-cell hydro pipeline on an owned density/momentum pair.
pub struct HydroSolver<'a> {
    pub current_step: usize,
    pub f1: Array1<f64>,
    pub f2: Array1<f64>,
    velocity: Array1<f64>,
    disc: Disc1dHydro<'a>,
    grid: &'a Grid1d,
    params: &'a HydroParameters,
}

impl<'a> HydroSolver<'a> {
    pub fn new(
        grid: &'a Grid1d,
        f1: Array1<f64>,
        f2: Array1<f64>,
        params: &'a HydroParameters,
    ) -> HydroSolver<'a> {
        debug_assert_eq!(grid.cell_num(), params.cell_num);
        debug_assert_eq!(f1.len(), params.cell_num);
        debug_assert_eq!(f2.len(), params.cell_num);
        HydroSolver {
            current_step: 0,
            f1,
            f2,
            velocity: Array1::zeros(params.cell_num),
            disc: Disc1dHydro::new(params),
            grid,
            params,
        }
    }

    pub fn advance(&mut self) -> Result<()> {
        self.disc.advance(self.f1.view_mut(), self.f2.view_mut())?;
        self.current_step += 1;
        Ok(())
    }

    pub fn solve(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        let dx = self.params.grid_spacing;
        let baseline = ConservationState::new(self.f1.view(), self.f2.view(), dx);
        info!(
            cells = self.params.cell_num,
            steps = self.params.final_step,
            sound_speed = self.params.sound_speed,
            cfl = self.params.cfl_number(),
            "starting hydro run"
        );
        for _ in 0..self.params.final_step {
            let step = self.current_step;
            self.advance()?;
            if at_cadence(step, self.params.render_every, 0) {
                self.refresh_velocity();
                sink.push(
                    step,
                    self.grid.coords(),
                    &[
                        ("density", self.f1.view()),
                        ("velocity", self.velocity.view()),
                    ],
                )?;
                let monitor =
                    ConservationMonitor::check(&baseline, self.f1.view(), self.f2.view(), dx);
                debug!(
                    step,
                    mass_error = monitor.mass_error,
                    momentum = diagnostics::total_momentum(self.f2.view()),
                    min_density = diagnostics::min_value(self.f1.view()),
                    "rendered frame"
                );
                if monitor.mass_error > 1e-6 {
                    warn!(step, mass_error = monitor.mass_error, "total mass drifting");
                }
            }
        }
        let monitor = ConservationMonitor::check(&baseline, self.f1.view(), self.f2.view(), dx);
        info!(
            mass_error = monitor.mass_error,
            momentum_error = monitor.momentum_error,
            "hydro run finished"
        );
        Ok(())
    }

    fn refresh_velocity(&mut self) {
        for i in 0..self.velocity.len() {
            self.velocity[i] = self.f2[i] / self.f1[i];
        }
    }
}
