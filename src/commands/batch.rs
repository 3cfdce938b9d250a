use super::{open_output, output_label, resolve_config};
use crate::envelope::TargetYear;
use crate::errors::Error;
use crate::io::{
    read_envelope,
    writers::{create_writer, BatchView, OutputFormat},
};
use crate::report::ScoreReport;
use crate::scorer::{score_assessment, summarize_firms};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct BatchConfig {
    pub inputs: Vec<PathBuf>,
    pub year: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let format = config.format.unwrap_or_else(|| settings.default_format());
    let year = TargetYear::new(config.year.as_str());
    ensure_unique_firm_names(&config.inputs)?;

    let firms = score_firms(&config.inputs, &year)?;
    let summary = summarize_firms(&firms);
    info!(
        firms = summary.firm_count,
        reporting = summary.reporting_firms,
        "scored batch"
    );

    let view = BatchView {
        year: year.to_string(),
        firms,
        summary,
        thresholds: settings.thresholds(),
    };

    let out = open_output(config.output.as_ref())?;
    let mut writer = create_writer(format, out);
    writer
        .write_batch(&view)
        .with_context(|| {
            format!("Failed to write {}", output_label(config.output.as_deref()))
        })?;
    Ok(())
}

/// Score every file in parallel, keeping input order. The first unreadable
/// file aborts the batch.
pub fn score_firms(inputs: &[PathBuf], year: &TargetYear) -> Result<Vec<(String, ScoreReport)>> {
    inputs
        .par_iter()
        .map(|path| -> Result<(String, ScoreReport)> {
            let envelope = read_envelope(path)?;
            let report = score_assessment(&envelope, year);
            if report.has_no_data() {
                warn!(input = %path.display(), "no scored responses");
            }
            Ok((firm_name(path), report))
        })
        .collect()
}

/// Firms are keyed by file stem, so two inputs with the same stem would
/// overwrite each other in the output.
fn ensure_unique_firm_names(inputs: &[PathBuf]) -> Result<(), Error> {
    let mut seen = BTreeSet::new();
    for path in inputs {
        let name = firm_name(path);
        if !seen.insert(name.clone()) {
            return Err(Error::invalid_argument(format!(
                "duplicate firm name '{name}' ({})",
                path.display()
            )));
        }
    }
    Ok(())
}

fn firm_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
