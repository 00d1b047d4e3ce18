use ndarray::Array1;

use crate::disc::grid::Grid1d;
use crate::error::Result;
use crate::io::params_parser::RunParamParser;
use crate::solver::{AdvectionParameters, HydroParameters};

/// Demo advection run: 100 cells, leftward wave, time step derived with a
/// tenfold CFL margin.
pub fn initialize_params_advection() -> Result<AdvectionParameters> {
    AdvectionParameters::new(100, 0.1, -0.1, 2000, 5)
}

/// Demo hydro run: a metre of isothermal air at millimetre resolution.
pub fn initialize_params_hydro() -> Result<HydroParameters> {
    HydroParameters::new(10000, 0.001, 300.0, 0.000001, 100000, 100)
}

pub fn initialize_params_by_file(
    file_path: &str,
) -> Result<(AdvectionParameters, HydroParameters)> {
    let parser = RunParamParser::parse(file_path)?;
    Ok((parser.advection_params()?, parser.hydro_params()?))
}

pub fn initialize_grid(cell_num: usize, grid_spacing: f64) -> Result<Grid1d> {
    Grid1d::new(cell_num, grid_spacing)
}

/// The advected field starts as the coordinate itself, so the exact solution
/// stays a shifted ramp.
pub fn initial_ramp(grid: &Grid1d) -> Array1<f64> {
    grid.x.clone()
}

fn gaussian(x: f64, mu: f64, sig: f64) -> f64 {
    (-(x - mu) * (x - mu) / (2.0 * sig * sig)).exp()
}

/// Resting gas with a Gaussian overdensity: floor 0.5, peak 1.0, width a
/// tenth of the domain, centred on the mean coordinate.
pub fn initial_density(grid: &Grid1d) -> Array1<f64> {
    let mu = grid.midpoint();
    let sig = grid.extent() / 10.0;
    grid.x.mapv(|x| 0.5 * gaussian(x, mu, sig) + 0.5)
}

/// Momentum proportional to the density perturbation, so the bump launches
/// symmetrically off the floor.
pub fn initial_momentum(density: &Array1<f64>) -> Array1<f64> {
    density.mapv(|rho| 100.0 * (rho - 0.5))
}
