//! Rendering boundary of the solvers.
//!
//! A solver run hands field snapshots to a [`FrameSink`] at a fixed cadence;
//! everything else about rendering lives behind the trait. Skipping frames
//! never feeds back into the simulation state.

use crate::error::Result;
use ndarray::{Array1, ArrayView1};

/// Receives one frame per rendered iteration: the shared x-axis plus the
/// named field arrays of that pipeline.
pub trait FrameSink {
    fn push(
        &mut self,
        step: usize,
        x: ArrayView1<'_, f64>,
        fields: &[(&'static str, ArrayView1<'_, f64>)],
    ) -> Result<()>;
}

/// True on the iterations a frame is due. `phase` shifts the cadence so a
/// run can render on, say, every fifth step starting from step 1.
pub fn at_cadence(step: usize, every: usize, phase: usize) -> bool {
    debug_assert!(every > 0);
    step % every == phase % every
}

/// One recorded frame.
pub struct Frame {
    pub step: usize,
    pub fields: Vec<(&'static str, Array1<f64>)>,
}

/// Keeps every pushed frame in memory.
pub struct MemorySink {
    pub frames: Vec<Frame>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink { frames: Vec::new() }
    }
}

impl FrameSink for MemorySink {
    fn push(
        &mut self,
        step: usize,
        _x: ArrayView1<'_, f64>,
        fields: &[(&'static str, ArrayView1<'_, f64>)],
    ) -> Result<()> {
        self.frames.push(Frame {
            step,
            fields: fields
                .iter()
                .map(|(name, values)| (*name, values.to_owned()))
                .collect(),
        });
        Ok(())
    }
}

/// Discards every frame.
pub struct NullSink;

impl FrameSink for NullSink {
    fn push(
        &mut self,
        _step: usize,
        _x: ArrayView1<'_, f64>,
        _fields: &[(&'static str, ArrayView1<'_, f64>)],
    ) -> Result<()> {
        Ok(())
    }
}
