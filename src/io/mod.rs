pub mod writers;

use crate::errors::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse an envelope JSON file.
pub fn read_envelope(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}
