// src/store.rs
// JSON persistence for the hero dataset and the failure report.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::data::{Dataset, SubjectFailure};
use crate::error::Result;
use crate::file::{resolve_out_path, write_atomic};

/// Pretty JSON, 2-space indent, trailing newline.
pub fn to_json(ds: &Dataset) -> Result<String> {
    let mut s = serde_json::to_string_pretty(ds)?;
    s.push('\n');
    Ok(s)
}

/// Write the dataset; `hint` may be a file or a directory.
/// Returns the final path written to.
pub fn save_dataset(hint: &Path, ds: &Dataset) -> Result<PathBuf> {
    let path = resolve_out_path(hint, DEFAULT_OUT_FILE)?;
    write_atomic(&path, &to_json(ds)?)?;
    log::info!("Wrote {} heroes to {}", ds.len(), path.display());
    Ok(path)
}

/// Load a dataset written earlier. A missing file is an empty dataset.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Ok(Dataset::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn save_failures(path: &Path, failures: &[SubjectFailure]) -> Result<PathBuf> {
    let path = resolve_out_path(path, "failures.json")?;
    let mut s = serde_json::to_string_pretty(failures)?;
    s.push('\n');
    write_atomic(&path, &s)?;
    Ok(path)
}
