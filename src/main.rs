mod diagnostics;
mod disc;
mod error;
mod initialization;
mod io;
mod sink;
mod solver;

use std::fs;

use tracing::info;

use crate::error::Result;
use crate::io::write_to_csv::CsvFrameSink;
use crate::solver::{AdvectionParameters, AdvectionSolver, HydroParameters, HydroSolver};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("all");
    if !matches!(mode, "advection" | "hydro" | "all") {
        eprintln!("usage: fdflow [advection|hydro|all] [params.json]");
        std::process::exit(2);
    }

    let (advection_params, hydro_params) = match args.get(2) {
        Some(path) => {
            info!(path = %path, "reading run parameters");
            initialization::initialize_params_by_file(path)?
        }
        None => (
            initialization::initialize_params_advection()?,
            initialization::initialize_params_hydro()?,
        ),
    };

    fs::create_dir_all("outputs")?;

    if mode == "advection" || mode == "all" {
        run_advection(&advection_params)?;
    }
    if mode == "hydro" || mode == "all" {
        run_hydro(&hydro_params)?;
    }
    Ok(())
}

fn run_advection(params: &AdvectionParameters) -> Result<()> {
    let grid = initialization::initialize_grid(params.cell_num, params.grid_spacing)?;
    let f0 = initialization::initial_ramp(&grid);
    let mut solver = AdvectionSolver::new(&grid, f0, params);
    let mut sink = CsvFrameSink::new("outputs", "advection");
    solver.solve(&mut sink)
}

fn run_hydro(params: &HydroParameters) -> Result<()> {
    let grid = initialization::initialize_grid(params.cell_num, params.grid_spacing)?;
    let f1 = initialization::initial_density(&grid);
    let f2 = initialization::initial_momentum(&f1);
    let mut solver = HydroSolver::new(&grid, f1, f2, params);
    let mut sink = CsvFrameSink::new("outputs", "hydro");
    solver.solve(&mut sink)
}
