//! Precomputed score passthrough.
//!
//! When the payload already carries `score.total_score` and
//! `score.max_score`, that object is the baseline report. Three layouts of
//! per-category values are recognized:
//!
//! - canonical: `score.Environment`, `score.Social`, `score.Governance`
//! - legacy lowercase: `score.environment`, ...
//! - raw values with ratios: `score.category_scores.environment` (or the
//!   keys above) divided by `score.category_max.environment`
//!
//! Values are percentages unless a positive `category_max` entry exists for
//! the category, in which case they are raw scores.

use super::accumulator::{Buckets, RatioSum};
use crate::core::coerce::{as_number, clamp_percent, field_number, percent};
use crate::core::Category;
use crate::envelope::EnvelopeShape;
use crate::report::{Breakdown, ScoreReport};
use crate::response::Response;
use serde_json::Value;
use std::collections::BTreeMap;

/// A precomputed score found in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub report: ScoreReport,
    /// Which layout the category values were read from.
    pub format: BaselineFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineFormat {
    Canonical,
    LegacyLowercase,
    CategoryMax,
}

/// Look for a baseline on the payload, then on the `years[]` entry the
/// envelope shape selected.
pub fn find_baseline(envelope: &Value, shape: EnvelopeShape) -> Option<Baseline> {
    envelope
        .get("score")
        .and_then(parse_baseline)
        .or_else(|| {
            shape
                .year_entry(envelope)
                .and_then(|entry| entry.get("score"))
                .and_then(parse_baseline)
        })
}

/// Parse a `score` object. `None` unless both `total_score` and `max_score`
/// are numeric.
pub fn parse_baseline(score: &Value) -> Option<Baseline> {
    let total_score = field_number(score, "total_score")?;
    let max_score = field_number(score, "max_score")?;

    let category_max = score.get("category_max").filter(|v| v.is_object());
    let category_scores = score.get("category_scores").filter(|v| v.is_object());

    let mut report = ScoreReport::empty();
    report.total_score = total_score;
    report.max_score = max_score;

    let (mut saw_legacy, mut saw_ratio) = (false, false);
    for category in Category::ALL {
        let canonical = field_number(score, category.as_str());
        let legacy = field_number(score, category.legacy_key());
        let raw = category_scores.and_then(|scores| lookup_category(scores, category));

        saw_legacy |= canonical.is_none() && (legacy.is_some() || raw.is_some());

        let Some(value) = canonical.or(legacy).or(raw) else {
            continue;
        };

        let max = category_max
            .and_then(|maxes| lookup_category(maxes, category))
            .filter(|max| *max > 0.0);
        let pct = match max {
            Some(max) => {
                saw_ratio = true;
                percent(value, max)
            }
            None => clamp_percent(value),
        };
        report.set_category(category, pct);
    }

    let format = if saw_ratio {
        BaselineFormat::CategoryMax
    } else if saw_legacy {
        BaselineFormat::LegacyLowercase
    } else {
        BaselineFormat::Canonical
    };

    report.breakdown = score
        .get("breakdown")
        .map(parse_breakdown)
        .unwrap_or_default();

    Some(Baseline { report, format })
}

fn lookup_category(map: &Value, category: Category) -> Option<f64> {
    field_number(map, category.as_str()).or_else(|| field_number(map, category.legacy_key()))
}

fn parse_breakdown(value: &Value) -> Breakdown {
    let mut breakdown = Breakdown::new();
    let Some(categories) = value.as_object() else {
        return breakdown;
    };
    for (name, indicators) in categories {
        let Some(category) = Category::parse(name) else {
            continue;
        };
        let Some(indicators) = indicators.as_object() else {
            continue;
        };
        let parsed: BTreeMap<String, u8> = indicators
            .iter()
            .filter_map(|(indicator, pct)| as_number(pct).map(|p| (indicator.clone(), clamp_percent(p))))
            .collect();
        if !parsed.is_empty() {
            breakdown.entry(category).or_default().extend(parsed);
        }
    }
    breakdown
}

/// Overwrite baseline values where response-level score pairs exist.
///
/// `total_score` and `max_score` always pass through unchanged.
pub fn refine_baseline(baseline: Baseline, responses: &[Response]) -> ScoreReport {
    let mut categories: Buckets<Category, RatioSum> = Buckets::default();
    let mut indicators: Buckets<(Category, String), RatioSum> = Buckets::default();

    for response in responses {
        let (Some(category), Some((score, max))) = (response.esg_category(), response.score_pair)
        else {
            continue;
        };
        categories.entry(category).add(score, max);
        indicators
            .entry((category, response.indicator.clone()))
            .add(score, max);
    }

    let mut report = baseline.report;
    for (category, ratio) in categories.iter() {
        if let Some(pct) = ratio.percent() {
            report.set_category(*category, pct);
        }
    }
    for ((category, indicator), ratio) in indicators.iter() {
        if let Some(pct) = ratio.percent() {
            report
                .breakdown
                .entry(*category)
                .or_default()
                .insert(indicator.clone(), pct);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::TargetYear;
    use crate::response::filter_responses;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_requires_total_and_max() {
        assert!(parse_baseline(&json!({"total_score": 50})).is_none());
        assert!(parse_baseline(&json!({"max_score": 100})).is_none());
        assert!(parse_baseline(&json!({"total_score": "n/a", "max_score": 100})).is_none());
        assert!(parse_baseline(&json!({"total_score": 0, "max_score": 100})).is_some());
    }

    #[test]
    fn test_canonical_values_pass_through() {
        let baseline = parse_baseline(&json!({
            "total_score": 180, "max_score": 300,
            "Environment": 70, "Social": 50.4, "Governance": 60,
            "breakdown": {"Environment": {"Energy": 70}, "Unknown": {"X": 1}}
        }))
        .unwrap();
        assert_eq!(baseline.format, BaselineFormat::Canonical);
        let report = baseline.report;
        assert_eq!((report.environment, report.social, report.governance), (70, 50, 60));
        assert_eq!(report.total_score, 180.0);
        assert_eq!(report.max_score, 300.0);
        assert_eq!(report.breakdown.len(), 1);
    }

    #[test]
    fn test_legacy_lowercase_keys_normalized() {
        let baseline = parse_baseline(&json!({
            "total_score": 55, "max_score": 100,
            "environment": 40, "social": 70
        }))
        .unwrap();
        assert_eq!(baseline.format, BaselineFormat::LegacyLowercase);
        assert_eq!(baseline.report.environment, 40);
        assert_eq!(baseline.report.social, 70);
        assert_eq!(baseline.report.governance, 0);
    }

    #[test]
    fn test_category_max_ratios() {
        let baseline = parse_baseline(&json!({
            "total_score": 30, "max_score": 60,
            "category_scores": {"environment": 12, "social": 9, "governance": 9},
            "category_max": {"environment": 20, "social": 20, "governance": 20}
        }))
        .unwrap();
        assert_eq!(baseline.format, BaselineFormat::CategoryMax);
        let report = baseline.report;
        assert_eq!((report.environment, report.social, report.governance), (60, 45, 45));
    }

    #[test]
    fn test_refinement_overwrites_only_paired_categories() {
        let baseline = parse_baseline(&json!({
            "total_score": 200, "max_score": 300,
            "Environment": 90, "Social": 80, "Governance": 30
        }))
        .unwrap();
        let responses = filter_responses(&[
            json!({"question": {"category": "Environment", "indicator": "Energy"},
                   "answer": {"question_score": 3, "question_max": 10}}),
            json!({"question": {"category": "Environment", "indicator": "Energy"},
                   "answer": {"question_score": 2, "question_max": 10}}),
            json!({"question": {"category": "Social"},
                   "answer": {"selected_option_submarks": [0.1]}}),
        ]);

        let report = refine_baseline(baseline, &responses);
        assert_eq!(report.environment, 25);
        assert_eq!(report.social, 80);
        assert_eq!(report.governance, 30);
        assert_eq!(report.total_score, 200.0);
        assert_eq!(report.max_score, 300.0);
        assert_eq!(report.indicators(Category::Environment).unwrap()["Energy"], 25);
    }

    #[test]
    fn test_find_baseline_on_year_entry() {
        let envelope = json!({
            "years": [{"year": 2023, "score": {"total_score": 10, "max_score": 100, "Governance": 10}, "responses": []}]
        });
        let target = TargetYear::from("2023");
        let shape = EnvelopeShape::classify(&envelope, &target);
        let baseline = find_baseline(&envelope, shape).unwrap();
        assert_eq!(baseline.report.governance, 10);

        assert!(find_baseline(&json!({"responses": []}), EnvelopeShape::TopLevelResponses).is_none());
    }
}
