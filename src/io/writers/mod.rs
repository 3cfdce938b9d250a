pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::config::StatusThresholds;
use crate::core::Category;
use crate::metrics::{
    best_performing_area, overall_score, score_status_with, worst_performing_area,
    QuestionSummary, ScoreStatus,
};
use crate::report::ScoreReport;
use crate::scorer::FirmSummary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// One scored assessment, with everything a writer needs to render it.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub source: String,
    pub year: String,
    pub report: ScoreReport,
    pub thresholds: StatusThresholds,
    /// Per-question rows; empty unless details were requested.
    pub questions: Vec<QuestionSummary>,
}

impl ReportView {
    pub fn overall(&self) -> u8 {
        overall_score(&self.report)
    }

    pub fn overall_status(&self) -> ScoreStatus {
        score_status_with(f64::from(self.overall()), &self.thresholds)
    }

    pub fn status(&self, category: Category) -> ScoreStatus {
        score_status_with(f64::from(self.report.category(category)), &self.thresholds)
    }

    pub fn best(&self) -> Option<Category> {
        best_performing_area(&self.report)
    }

    pub fn worst(&self) -> Option<Category> {
        worst_performing_area(&self.report)
    }
}

/// Several firms scored together.
#[derive(Debug, Clone)]
pub struct BatchView {
    pub year: String,
    pub firms: Vec<(String, ScoreReport)>,
    pub summary: FirmSummary,
    pub thresholds: StatusThresholds,
}

/// Renders reports. Implementations flush before returning, so a failed
/// write surfaces as an error instead of being dropped with the buffer.
pub trait OutputWriter {
    fn write_report(&mut self, view: &ReportView) -> anyhow::Result<()>;
    fn write_batch(&mut self, view: &BatchView) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

/// "Environment" or "-" when there is no data.
pub(crate) fn area_label(area: Option<Category>) -> &'static str {
    area.map(|c| c.as_str()).unwrap_or("-")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::metrics::AnswerStatus;
    use std::io;

    /// Sink that rejects every write, like `/dev/full`.
    pub struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn sample_view() -> ReportView {
        let mut report = ScoreReport {
            environment: 72,
            social: 45,
            governance: 0,
            total_score: 58.5,
            ..ScoreReport::empty()
        };
        report
            .breakdown
            .entry(Category::Environment)
            .or_default()
            .insert("Energy".to_string(), 72);
        report
            .breakdown
            .entry(Category::Social)
            .or_default()
            .insert("General".to_string(), 45);

        ReportView {
            source: "acme.json".to_string(),
            year: "2023".to_string(),
            report,
            thresholds: StatusThresholds::default(),
            questions: vec![QuestionSummary {
                category: Category::Governance,
                indicator: "Board".to_string(),
                text: "Board independence".to_string(),
                status: AnswerStatus::NotAnswered,
            }],
        }
    }
}
