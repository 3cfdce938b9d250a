//! Display metrics derived from a [`ScoreReport`].
//!
//! The overall score uses one formula everywhere:
//! `round(total_score / max_score × 100)`. Dividing by a fixed 300 assumes
//! `total_score` is a sum of three category percentages, which is not what
//! the aggregator produces.

pub mod status;
pub mod summary;

use crate::core::coerce::clamp_percent;
use crate::core::Category;
use crate::report::ScoreReport;

pub use status::{score_status, score_status_with, ScoreStatus};
pub use summary::{question_summaries, AnswerStatus, QuestionSummary};

/// Overall percentage; 0 when `max_score` is not positive.
pub fn overall_score(report: &ScoreReport) -> u8 {
    if report.max_score <= 0.0 || !report.max_score.is_finite() {
        return 0;
    }
    clamp_percent(report.total_score / report.max_score * 100.0)
}

/// Highest category; ties go to the earliest in Environment, Social,
/// Governance order. `None` when the report has no data.
pub fn best_performing_area(report: &ScoreReport) -> Option<Category> {
    pick_area(report, |candidate, current| candidate > current)
}

/// Lowest category, same tie-breaking as [`best_performing_area`].
pub fn worst_performing_area(report: &ScoreReport) -> Option<Category> {
    pick_area(report, |candidate, current| candidate < current)
}

fn pick_area(report: &ScoreReport, better: impl Fn(u8, u8) -> bool) -> Option<Category> {
    if report.has_no_data() {
        return None;
    }
    report
        .categories()
        .fold(None, |best: Option<(Category, u8)>, (category, value)| match best {
            Some((_, current)) if !better(value, current) => best,
            _ => Some((category, value)),
        })
        .map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(environment: u8, social: u8, governance: u8, total: f64) -> ScoreReport {
        ScoreReport {
            environment,
            social,
            governance,
            total_score: total,
            ..ScoreReport::empty()
        }
    }

    #[test]
    fn test_overall_score_canonical_formula() {
        assert_eq!(overall_score(&report(60, 70, 80, 70.0)), 70);
        let baseline = ScoreReport {
            max_score: 300.0,
            ..report(0, 0, 0, 180.0)
        };
        assert_eq!(overall_score(&baseline), 60);
    }

    #[test]
    fn test_overall_score_handles_zero_max() {
        let broken = ScoreReport {
            max_score: 0.0,
            ..report(10, 10, 10, 10.0)
        };
        assert_eq!(overall_score(&broken), 0);
    }

    #[test]
    fn test_best_and_worst_area() {
        let r = report(40, 90, 10, 46.67);
        assert_eq!(best_performing_area(&r), Some(Category::Social));
        assert_eq!(worst_performing_area(&r), Some(Category::Governance));
    }

    #[test]
    fn test_ties_break_by_fixed_order() {
        let r = report(50, 50, 50, 50.0);
        assert_eq!(best_performing_area(&r), Some(Category::Environment));
        assert_eq!(worst_performing_area(&r), Some(Category::Environment));

        let r = report(20, 70, 70, 53.33);
        assert_eq!(best_performing_area(&r), Some(Category::Social));
    }

    #[test]
    fn test_no_data_has_no_area() {
        assert_eq!(best_performing_area(&ScoreReport::empty()), None);
        assert_eq!(worst_performing_area(&ScoreReport::empty()), None);
    }
}
