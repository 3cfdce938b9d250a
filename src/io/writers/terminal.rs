use super::{area_label, BatchView, OutputWriter, ReportView};
use crate::core::Category;
use crate::formatting::{paint_status, percent_bar};
use crate::metrics::{overall_score, score_status_with};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

const BAR_WIDTH: usize = 20;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn rule(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            "═══════════════════════════════════════════".cyan()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, view: &ReportView) -> anyhow::Result<()> {
        self.rule()?;
        writeln!(
            self.writer,
            "{}",
            format!("  ESG ASSESSMENT · {} · {}", view.source, view.year)
                .bold()
                .cyan()
        )?;
        self.rule()?;
        writeln!(self.writer)?;

        for category in Category::ALL {
            let pct = view.report.category(category);
            let status = view.status(category);
            writeln!(
                self.writer,
                "{:<12} {} {:>3}%  {}",
                category.as_str(),
                percent_bar(pct, BAR_WIDTH),
                pct,
                paint_status(status, status.chart_label())
            )?;
        }
        writeln!(self.writer)?;

        let overall_status = view.overall_status();
        writeln!(
            self.writer,
            "{} {}% ({})",
            "Overall score:".bold(),
            view.overall(),
            paint_status(overall_status, overall_status.label())
        )?;
        writeln!(self.writer, "Best performing area:  {}", area_label(view.best()))?;
        writeln!(self.writer, "Worst performing area: {}", area_label(view.worst()))?;

        if view.report.breakdown.values().any(|indicators| !indicators.is_empty()) {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Indicator breakdown".bold())?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Category", "Indicator", "Score", "Status"]);
            for (category, indicators) in &view.report.breakdown {
                for (indicator, pct) in indicators {
                    table.add_row(vec![
                        category.to_string(),
                        indicator.clone(),
                        format!("{pct}%"),
                        score_status_with(f64::from(*pct), &view.thresholds).to_string(),
                    ]);
                }
            }
            writeln!(self.writer, "{table}")?;
        }

        if !view.questions.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Questions".bold())?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Category", "Indicator", "Question", "Result"]);
            for row in &view.questions {
                table.add_row(vec![
                    row.category.to_string(),
                    row.indicator.clone(),
                    row.text.clone(),
                    row.status.label(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, view: &BatchView) -> anyhow::Result<()> {
        self.rule()?;
        writeln!(
            self.writer,
            "{}",
            format!("  ESG FIRM RESULTS · {}", view.year).bold().cyan()
        )?;
        self.rule()?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Firm",
            "Environment",
            "Social",
            "Governance",
            "Overall",
            "Status",
        ]);
        for (name, report) in &view.firms {
            let overall = overall_score(report);
            table.add_row(vec![
                name.clone(),
                format!("{}%", report.environment),
                format!("{}%", report.social),
                format!("{}%", report.governance),
                format!("{overall}%"),
                score_status_with(f64::from(overall), &view.thresholds).to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        let summary = &view.summary;
        writeln!(
            self.writer,
            "Firms reporting: {} of {}",
            summary.reporting_firms, summary.firm_count
        )?;
        for (category, mean) in &summary.category_means {
            writeln!(self.writer, "Mean {:<12} {:.2}%", category.as_str(), mean)?;
        }
        writeln!(self.writer, "{} {:.2}%", "Mean overall:".bold(), summary.overall_mean)?;
        if let Some(top) = &summary.top_firm {
            writeln!(self.writer, "Top firm: {}", top.green())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
