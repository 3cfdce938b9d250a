use super::{BatchView, OutputWriter, ReportView};
use crate::core::Category;
use crate::metrics::{QuestionSummary, ScoreStatus};
use crate::report::ScoreReport;
use crate::scorer::FirmSummary;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    source: &'a str,
    year: &'a str,
    report: &'a ScoreReport,
    overall_score: u8,
    overall_status: ScoreStatus,
    status: BTreeMap<Category, ScoreStatus>,
    best_performing_area: Option<Category>,
    worst_performing_area: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    questions: Option<&'a [QuestionSummary]>,
}

#[derive(Serialize)]
struct BatchDocument<'a> {
    year: &'a str,
    firms: BTreeMap<&'a str, &'a ScoreReport>,
    summary: &'a FirmSummary,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, view: &ReportView) -> anyhow::Result<()> {
        let document = ReportDocument {
            source: &view.source,
            year: &view.year,
            report: &view.report,
            overall_score: view.overall(),
            overall_status: view.overall_status(),
            status: Category::ALL.iter().map(|c| (*c, view.status(*c))).collect(),
            best_performing_area: view.best(),
            worst_performing_area: view.worst(),
            questions: (!view.questions.is_empty()).then_some(view.questions.as_slice()),
        };
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, view: &BatchView) -> anyhow::Result<()> {
        let document = BatchDocument {
            year: &view.year,
            firms: view
                .firms
                .iter()
                .map(|(name, report)| (name.as_str(), report))
                .collect(),
            summary: &view.summary,
        };
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
