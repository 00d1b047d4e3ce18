use csv::Writer;
use ndarray::ArrayView1;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::sink::FrameSink;

/// Writes each frame to its own CSV file, `<prefix>_<step>.csv`, with the
/// cell coordinate in the first column and one column per field.
pub struct CsvFrameSink {
    dir: PathBuf,
    prefix: String,
}

impl CsvFrameSink {
    pub fn new(dir: impl AsRef<Path>, prefix: &str) -> CsvFrameSink {
        CsvFrameSink {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    fn frame_path(&self, step: usize) -> PathBuf {
        self.dir.join(format!("{}_{:06}.csv", self.prefix, step))
    }
}

impl FrameSink for CsvFrameSink {
    fn push(
        &mut self,
        step: usize,
        x: ArrayView1<'_, f64>,
        fields: &[(&'static str, ArrayView1<'_, f64>)],
    ) -> Result<()> {
        let mut writer = Writer::from_path(self.frame_path(step))?;
        let mut header = vec!["x"];
        header.extend(fields.iter().map(|(name, _)| *name));
        writer.write_record(header)?;
        for i in 0..x.len() {
            let mut row = Vec::with_capacity(fields.len() + 1);
            row.push(x[i]);
            row.extend(fields.iter().map(|(_, values)| values[i]));
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
