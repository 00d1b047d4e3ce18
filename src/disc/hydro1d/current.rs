//! Per-boundary kernels for the donor-cell transport step.

use crate::error::{Result, SolverError};

/// Velocity at internal boundary `b`: the mean of the cell velocities
/// `momentum/density` on either side.
///
/// Fails fast when a neighboring density is not strictly positive, before
/// the division can poison the field.
pub fn intercell_velocity(
    b: usize,
    rho_left: f64,
    mom_left: f64,
    rho_right: f64,
    mom_right: f64,
) -> Result<f64> {
    if !(rho_left > 0.0) {
        return Err(SolverError::NonPositiveDensity {
            cell: b,
            value: rho_left,
        });
    }
    if !(rho_right > 0.0) {
        return Err(SolverError::NonPositiveDensity {
            cell: b + 1,
            value: rho_right,
        });
    }
    Ok(0.5 * (mom_left / rho_left + mom_right / rho_right))
}

/// Donor-cell current of a transported quantity across one boundary. The
/// donor is the cell the flow leaves; a still boundary carries no current.
pub fn donor_cell_current(u: f64, q_left: f64, q_right: f64) -> f64 {
    if u > 0.0 {
        u * q_left
    } else if u < 0.0 {
        u * q_right
    } else {
        0.0
    }
}
