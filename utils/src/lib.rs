use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub mod metadata;
pub mod table;

pub use metadata::RunMetadata;
pub use table::summary_table;

/// A collected benchmark run: origin metadata plus one entry per measurement.
#[derive(Serialize, Debug)]
pub struct BenchReport<T> {
    pub metadata: RunMetadata,
    pub measurements: Vec<T>,
}

impl<T: Serialize> BenchReport<T> {
    pub fn new(measurements: Vec<T>) -> Self {
        Self {
            metadata: RunMetadata::from_env(),
            measurements,
        }
    }
}

pub fn write_json<T: Serialize>(data: &T, output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let json_data = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json_data.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(())
}
