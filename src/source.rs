use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::Path};

use crate::config::PipelineConfig;
use crate::pipeline::{load_years, LoadOutcome};

/// Read a JSON document from disk without interpreting its shape.
pub fn read_raw_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))
}

/// Read and run the pipeline. I/O and JSON syntax errors are returned;
/// a document with the wrong shape still comes back as an empty outcome.
pub fn load_years_from_file(path: impl AsRef<Path>, cfg: &PipelineConfig) -> Result<LoadOutcome> {
    let raw = read_raw_file(path)?;
    Ok(load_years(&raw, cfg))
}
