use super::{area_label, BatchView, OutputWriter, ReportView};
use crate::core::Category;
use crate::metrics::{overall_score, score_status_with};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, view: &ReportView) -> anyhow::Result<()> {
        self.write_header(&format!("ESG Assessment Report: {}", view.source), &view.year)?;
        self.write_summary(view)?;
        self.write_breakdown(view)?;
        self.write_questions(view)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, view: &BatchView) -> anyhow::Result<()> {
        self.write_header("ESG Firm Results", &view.year)?;

        writeln!(self.writer, "| Firm | Environment | Social | Governance | Overall | Status |")?;
        writeln!(self.writer, "|------|-------------|--------|------------|---------|--------|")?;
        for (name, report) in &view.firms {
            let overall = overall_score(report);
            writeln!(
                self.writer,
                "| {} | {}% | {}% | {}% | {}% | {} |",
                name,
                report.environment,
                report.social,
                report.governance,
                overall,
                score_status_with(f64::from(overall), &view.thresholds)
            )?;
        }
        writeln!(self.writer)?;

        let summary = &view.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Firms reporting: {} of {}",
            summary.reporting_firms, summary.firm_count
        )?;
        for (category, mean) in &summary.category_means {
            writeln!(self.writer, "- Mean {category}: {mean:.2}%")?;
        }
        writeln!(self.writer, "- Mean overall: {:.2}%", summary.overall_mean)?;
        if let Some(top) = &summary.top_firm {
            writeln!(self.writer, "- Top firm: {top}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, title: &str, year: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Assessment year: {year}")?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, view: &ReportView) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Score | Status |")?;
        writeln!(self.writer, "|----------|-------|--------|")?;
        for category in Category::ALL {
            writeln!(
                self.writer,
                "| {} | {}% | {} |",
                category,
                view.report.category(category),
                view.status(category)
            )?;
        }
        writeln!(
            self.writer,
            "| **Overall** | **{}%** | **{}** |",
            view.overall(),
            view.overall_status()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Best performing area: {}", area_label(view.best()))?;
        writeln!(self.writer, "- Worst performing area: {}", area_label(view.worst()))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, view: &ReportView) -> anyhow::Result<()> {
        if view.report.breakdown.values().all(|indicators| indicators.is_empty()) {
            return Ok(());
        }

        writeln!(self.writer, "## Indicator Breakdown")?;
        writeln!(self.writer)?;
        for (category, indicators) in &view.report.breakdown {
            writeln!(self.writer, "### {category}")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Indicator | Score |")?;
            writeln!(self.writer, "|-----------|-------|")?;
            for (indicator, pct) in indicators {
                writeln!(self.writer, "| {indicator} | {pct}% |")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_questions(&mut self, view: &ReportView) -> anyhow::Result<()> {
        if view.questions.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Questions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Indicator | Question | Result |")?;
        writeln!(self.writer, "|----------|-----------|----------|--------|")?;
        for row in &view.questions {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.category,
                row.indicator,
                row.text.replace('|', "\\|"),
                row.status.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
