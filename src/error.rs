//! Error types for fdflow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("grid too small: need at least 3 cells, got {0}")]
    GridTooSmall(usize),

    #[error("grid spacing must be positive and finite, got {0}")]
    BadSpacing(f64),

    #[error("time step must be positive and finite, got {0}")]
    BadTimeStep(f64),

    #[error("advection velocity must be finite and nonzero, got {0}")]
    BadVelocity(f64),
    #[error("sound speed must be positive and finite, got {0}")]
    BadSoundSpeed(f64),

    #[error("iteration budget must be at least 1")]
    ZeroIterations,

    #[error("render cadence must be at least 1")]
    ZeroCadence,

    #[error("non-positive density {value} in cell {cell}")]
    NonPositiveDensity { cell: usize, value: f64 },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
