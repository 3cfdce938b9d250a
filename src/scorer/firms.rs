use crate::core::coerce::round2;
use crate::core::Category;
use crate::metrics::overall_score;
use crate::report::ScoreReport;
use serde::Serialize;
use std::collections::BTreeMap;

/// Admin view over many firms' reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirmSummary {
    pub firm_count: usize,
    /// Firms whose report carried any data.
    pub reporting_firms: usize,
    /// Mean category percentage across reporting firms.
    pub category_means: BTreeMap<Category, f64>,
    /// Mean overall score across reporting firms.
    pub overall_mean: f64,
    /// Firm with the highest overall score, first one on ties.
    pub top_firm: Option<String>,
}

/// Aggregate firm reports. Firms with no data are counted but left out of
/// the means, the same way unscored categories are left out of a firm's own
/// total.
pub fn summarize_firms(reports: &[(String, ScoreReport)]) -> FirmSummary {
    let reporting: Vec<&(String, ScoreReport)> = reports
        .iter()
        .filter(|(_, report)| !report.has_no_data())
        .collect();

    let mean = |values: Vec<f64>| -> f64 {
        if values.is_empty() {
            0.0
        } else {
            round2(values.iter().sum::<f64>() / values.len() as f64)
        }
    };

    let category_means = Category::ALL
        .iter()
        .map(|category| {
            let values = reporting
                .iter()
                .map(|(_, report)| f64::from(report.category(*category)))
                .collect();
            (*category, mean(values))
        })
        .collect();

    let overall_mean = mean(
        reporting
            .iter()
            .map(|(_, report)| f64::from(overall_score(report)))
            .collect(),
    );

    let top_firm = reporting
        .iter()
        .fold(None, |best: Option<(&str, u8)>, (name, report)| {
            let score = overall_score(report);
            match best {
                Some((_, current)) if score <= current => best,
                _ => Some((name.as_str(), score)),
            }
        })
        .map(|(name, _)| name.to_string());

    FirmSummary {
        firm_count: reports.len(),
        reporting_firms: reporting.len(),
        category_means,
        overall_mean,
        top_firm,
    }
}
