use super::{open_output, output_label, resolve_config};
use crate::core::Lang;
use crate::envelope::TargetYear;
use crate::io::{
    read_envelope,
    writers::{create_writer, OutputFormat, ReportView},
};
use crate::metrics::question_summaries;
use crate::scorer::analyze_assessment;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub struct ScoreConfig {
    pub input: PathBuf,
    pub year: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub lang: Option<Lang>,
    pub details: bool,
    pub config: Option<PathBuf>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let format = config.format.unwrap_or_else(|| settings.default_format());
    let lang = config.lang.unwrap_or_else(|| settings.language());

    let envelope = read_envelope(&config.input)?;
    let year = TargetYear::new(config.year.as_str());
    let scored = analyze_assessment(&envelope, &year);
    info!(
        input = %config.input.display(),
        shape = scored.shape.label(),
        responses = scored.responses.len(),
        "scored assessment"
    );

    let questions = if config.details {
        question_summaries(&scored.responses, lang)
    } else {
        Vec::new()
    };

    let view = ReportView {
        source: source_name(&config.input),
        year: year.to_string(),
        report: scored.report,
        thresholds: settings.thresholds(),
        questions,
    };

    let out = open_output(config.output.as_ref())?;
    let mut writer = create_writer(format, out);
    writer
        .write_report(&view)
        .with_context(|| {
            format!("Failed to write {}", output_label(config.output.as_deref()))
        })?;
    Ok(())
}

fn source_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
