use ndarray::{Array1, ArrayView1};

use crate::error::{Result, SolverError};

/// Uniform 1-D grid of cell-center coordinates `x_i = i*dx`.
///
/// Built once at setup and shared read-only by the steppers; nothing
/// mutates it after construction.
pub struct Grid1d {
    pub x: Array1<f64>,
    pub dx: f64,
}

impl Grid1d {
    /// A grid needs the two boundary cells plus at least one interior cell.
    pub fn new(cell_num: usize, dx: f64) -> Result<Grid1d> {
        if cell_num < 3 {
            return Err(SolverError::GridTooSmall(cell_num));
        }
        if !dx.is_finite() || dx <= 0.0 {
            return Err(SolverError::BadSpacing(dx));
        }
        let x = Array1::from_iter((0..cell_num).map(|i| i as f64 * dx));
        Ok(Grid1d { x, dx })
    }

    pub fn cell_num(&self) -> usize {
        self.x.len()
    }

    pub fn coords(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// Domain length `N*dx`, the scale the Gaussian bump width is tied to.
    pub fn extent(&self) -> f64 {
        self.cell_num() as f64 * self.dx
    }

    pub fn midpoint(&self) -> f64 {
        self.x.sum() / self.cell_num() as f64
    }
}
