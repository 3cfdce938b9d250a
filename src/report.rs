use crate::core::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Indicator name to percentage, per category.
pub type Breakdown = BTreeMap<Category, BTreeMap<String, u8>>;

/// Denominator used when the report is computed from responses.
pub const COMPUTED_MAX_SCORE: f64 = 100.0;

/// Normalized score report handed to renderers.
///
/// Serializes with the category names as keys so the JSON matches what the
/// presentation layer already reads:
///
/// ```json
/// {"Environment": 60, "Social": 45, "Governance": 80,
///  "total_score": 61.67, "max_score": 100.0,
///  "breakdown": {"Environment": {"Energy": 60}}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "Environment", default)]
    pub environment: u8,
    #[serde(rename = "Social", default)]
    pub social: u8,
    #[serde(rename = "Governance", default)]
    pub governance: u8,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    #[serde(default)]
    pub breakdown: Breakdown,
}

fn default_max_score() -> f64 {
    COMPUTED_MAX_SCORE
}

impl Default for ScoreReport {
    fn default() -> Self {
        Self::empty()
    }
}

impl ScoreReport {
    /// All-zero report with an empty breakdown.
    pub fn empty() -> Self {
        Self {
            environment: 0,
            social: 0,
            governance: 0,
            total_score: 0.0,
            max_score: COMPUTED_MAX_SCORE,
            breakdown: Breakdown::new(),
        }
    }

    pub fn category(&self, category: Category) -> u8 {
        match category {
            Category::Environment => self.environment,
            Category::Social => self.social,
            Category::Governance => self.governance,
        }
    }

    pub(crate) fn set_category(&mut self, category: Category, value: u8) {
        match category {
            Category::Environment => self.environment = value,
            Category::Social => self.social = value,
            Category::Governance => self.governance = value,
        }
    }

    /// Category percentages in the fixed order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.category(*c)))
    }

    /// Indicator percentages for one category, if any were recorded.
    pub fn indicators(&self, category: Category) -> Option<&BTreeMap<String, u8>> {
        self.breakdown.get(&category)
    }

    /// True when the report carries no information at all.
    ///
    /// Zero percentages alone are ambiguous between "no data" and "zero
    /// performance"; an empty breakdown disambiguates.
    pub fn has_no_data(&self) -> bool {
        self.breakdown.values().all(BTreeMap::is_empty)
            && self.categories().all(|(_, value)| value == 0)
            && self.total_score == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_serializes_with_category_keys() {
        let mut report = ScoreReport::empty();
        report.environment = 60;
        report
            .breakdown
            .entry(Category::Environment)
            .or_default()
            .insert("Energy".to_string(), 60);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "Environment": 60,
                "Social": 0,
                "Governance": 0,
                "total_score": 0.0,
                "max_score": 100.0,
                "breakdown": {"Environment": {"Energy": 60}}
            })
        );
    }

    #[test]
    fn test_deserialize_roundtrips_breakdown_keys() {
        let value = json!({"Environment": 10, "breakdown": {"Social": {"General": 5}}});
        let report: ScoreReport = serde_json::from_value(value).unwrap();
        assert_eq!(report.environment, 10);
        assert_eq!(report.max_score, 100.0);
        assert_eq!(report.indicators(Category::Social).unwrap()["General"], 5);
    }

    #[test]
    fn test_empty_report_has_no_data() {
        assert!(ScoreReport::empty().has_no_data());
        let mut report = ScoreReport::empty();
        report.governance = 1;
        assert!(!report.has_no_data());
    }
}
