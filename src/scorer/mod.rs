//! Single entry point from raw payload to [`ScoreReport`].
//!
//! ```rust
//! use esgscore::scorer::score_assessment;
//! use esgscore::envelope::TargetYear;
//! use serde_json::json;
//!
//! let envelope = json!({
//!     "years": [{"year": 2023, "responses": [
//!         {"category": "Environment", "question_score": 5, "question_max": 10}
//!     ]}]
//! });
//! let report = score_assessment(&envelope, &TargetYear::from("2023"));
//! assert_eq!(report.environment, 50);
//! ```

pub mod cache;
pub mod firms;

use crate::aggregation::{baseline::BaselineFormat, compute_report, find_baseline, refine_baseline};
use crate::envelope::{extract_with_shape, EnvelopeShape, TargetYear};
use crate::report::ScoreReport;
use crate::response::{filter_responses, Response};
use serde_json::Value;
use tracing::{debug, debug_span};

pub use cache::ScoreCache;
pub use firms::{summarize_firms, FirmSummary};

/// Everything the scorer learned about one payload.
#[derive(Debug, Clone)]
pub struct ScoredAssessment {
    pub shape: EnvelopeShape,
    pub responses: Vec<Response>,
    /// Set when a precomputed score was used as the baseline.
    pub baseline: Option<BaselineFormat>,
    pub report: ScoreReport,
}

/// Normalize, filter, then either refine a precomputed baseline or compute
/// from scratch.
pub fn analyze_assessment(envelope: &Value, year: &TargetYear) -> ScoredAssessment {
    let span = debug_span!("score_assessment", year = %year);
    let _enter = span.enter();

    let shape = EnvelopeShape::classify(envelope, year);
    let records = extract_with_shape(envelope, shape);
    let responses = filter_responses(&records);
    debug!(
        shape = shape.label(),
        extracted = records.len(),
        kept = responses.len(),
        "normalized envelope"
    );

    let (report, baseline) = match find_baseline(envelope, shape) {
        Some(baseline) => {
            let format = baseline.format;
            debug!(?format, "using precomputed score as baseline");
            (refine_baseline(baseline, &responses), Some(format))
        }
        None => (compute_report(&responses), None),
    };

    ScoredAssessment {
        shape,
        responses,
        baseline,
        report,
    }
}

/// Score a raw payload for `year`. Never fails; malformed input yields an
/// all-zero report.
pub fn score_assessment(envelope: &Value, year: &TargetYear) -> ScoreReport {
    analyze_assessment(envelope, year).report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_envelope() {
        let report = score_assessment(&json!({}), &TargetYear::from("2023"));
        assert_eq!(report, ScoreReport::empty());
    }

    #[test]
    fn test_baseline_is_preferred_over_computation() {
        let envelope = json!({
            "score": {"total_score": 75, "max_score": 100, "Environment": 75, "Social": 75, "Governance": 75},
            "responses": [
                {"question": {"category": "Social"}, "answer": {"selected_option_submarks": [0.1]}}
            ]
        });
        let scored = analyze_assessment(&envelope, &TargetYear::from(2023));
        assert_eq!(scored.baseline, Some(BaselineFormat::Canonical));
        assert_eq!(scored.report.social, 75);
        assert_eq!(scored.report.total_score, 75.0);
    }

    #[test]
    fn test_incomplete_score_object_is_ignored() {
        let envelope = json!({
            "score": {"total_score": 75},
            "responses": [
                {"question": {"category": "Social"}, "answer": {"selected_option_submarks": [0.4]}}
            ]
        });
        let scored = analyze_assessment(&envelope, &TargetYear::from(2023));
        assert_eq!(scored.baseline, None);
        assert_eq!(scored.report.social, 40);
        assert_eq!(scored.report.total_score, 40.0);
    }
}
