use serde::Deserialize;
use std::fs;

use crate::error::Result;
use crate::solver::{AdvectionParameters, HydroParameters};

#[derive(Deserialize, Debug)]
pub struct AdvectionRunParams {
    pub cell_num: usize,
    pub grid_spacing: f64,
    pub velocity: f64,
    /// Omitted in the file means derive it from the velocity.
    pub time_step: Option<f64>,
    pub final_step: usize,
    pub render_every: usize,
}

#[derive(Deserialize, Debug)]
pub struct HydroRunParams {
    pub cell_num: usize,
    pub grid_spacing: f64,
    pub sound_speed: f64,
    pub time_step: f64,
    pub final_step: usize,
    pub render_every: usize,
}

/// Raw run description as it appears in the JSON file, before validation.
#[derive(Deserialize, Debug)]
pub struct RunParamParser {
    pub advection: AdvectionRunParams,
    pub hydro: HydroRunParams,
}

impl RunParamParser {
    pub fn parse(file_path: &str) -> Result<RunParamParser> {
        let file_content = fs::read_to_string(file_path)?;
        let params = serde_json::from_str(&file_content)?;
        Ok(params)
    }

    pub fn advection_params(&self) -> Result<AdvectionParameters> {
        let raw = &self.advection;
        match raw.time_step {
            Some(time_step) => AdvectionParameters::with_time_step(
                raw.cell_num,
                raw.grid_spacing,
                raw.velocity,
                time_step,
                raw.final_step,
                raw.render_every,
            ),
            None => AdvectionParameters::new(
                raw.cell_num,
                raw.grid_spacing,
                raw.velocity,
                raw.final_step,
                raw.render_every,
            ),
        }
    }

    pub fn hydro_params(&self) -> Result<HydroParameters> {
        let raw = &self.hydro;
        HydroParameters::new(
            raw.cell_num,
            raw.grid_spacing,
            raw.sound_speed,
            raw.time_step,
            raw.final_step,
            raw.render_every,
        )
    }
}
