//! CLI command implementations.
//!
//! Available commands:
//! - **score**: Score one assessment envelope
//! - **batch**: Score several firms and summarize them
//! - **status**: Print the status label for a percentage
//! - **init**: Initialize a new `.esgscore.toml` configuration file

pub mod batch;
pub mod init;
pub mod score;
pub mod status;

pub use batch::{handle_batch, BatchConfig};
pub use init::init_config;
pub use score::{handle_score, ScoreConfig};
pub use status::handle_status;

use crate::config::{load_config, load_config_from, EsgscoreConfig};
use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Explicit `--config` wins; otherwise search upward from the current
/// directory.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<EsgscoreConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}

/// Name of the output destination for error messages.
pub(crate) fn output_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    }
}

/// Output destination: a file when `--output` is given, stdout otherwise.
pub(crate) fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Output {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
