//! Category and indicator aggregation.
//!
//! Two paths produce a [`ScoreReport`]:
//!
//! - **Computed**: weighted percentages accumulated per category and per
//!   `(category, indicator)` from the filtered responses.
//! - **Baseline**: the payload already carries a precomputed `score` object;
//!   it is kept, and categories are only overwritten where response-level
//!   `question_score` / `question_max` pairs exist. See [`baseline`].

pub mod accumulator;
pub mod baseline;

use crate::core::coerce::round2;
use crate::core::Category;
use crate::report::{ScoreReport, COMPUTED_MAX_SCORE};
use crate::response::Response;
use accumulator::{Buckets, WeightedSum};

pub use baseline::{find_baseline, refine_baseline, Baseline};

/// Weighted sums for every category and indicator seen.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub categories: Buckets<Category, WeightedSum>,
    pub indicators: Buckets<(Category, String), WeightedSum>,
}

impl Aggregation {
    /// Accumulate scored responses. Unanswered responses, the year sentinel
    /// and unknown categories contribute nothing.
    pub fn collect(responses: &[Response]) -> Self {
        let mut aggregation = Self::default();
        for response in responses {
            let Some(category) = response.esg_category() else {
                continue;
            };
            let Some(fraction) = response.answer.fraction() else {
                continue;
            };
            aggregation
                .categories
                .entry(category)
                .add(response.weight, fraction);
            aggregation
                .indicators
                .entry((category, response.indicator.clone()))
                .add(response.weight, fraction);
        }
        aggregation
    }

    /// Categories with at least one scored response, in fixed order.
    pub fn scored_categories(&self) -> Vec<(Category, u8)> {
        Category::ALL
            .iter()
            .filter_map(|category| {
                self.categories
                    .get(category)
                    .and_then(WeightedSum::percent)
                    .map(|pct| (*category, pct))
            })
            .collect()
    }

    /// Build the report. Categories without scored responses stay 0 and are
    /// left out of the overall mean.
    pub fn into_report(self) -> ScoreReport {
        let mut report = ScoreReport::empty();

        let scored = self.scored_categories();
        for (category, pct) in &scored {
            report.set_category(*category, *pct);
        }

        for ((category, indicator), sum) in self.indicators.iter() {
            if let Some(pct) = sum.percent() {
                report
                    .breakdown
                    .entry(*category)
                    .or_default()
                    .insert(indicator.clone(), pct);
            }
        }

        report.total_score = mean_percent(scored.iter().map(|(_, pct)| *pct));
        report.max_score = COMPUTED_MAX_SCORE;
        report
    }
}

/// Compute a report from scratch.
pub fn compute_report(responses: &[Response]) -> ScoreReport {
    Aggregation::collect(responses).into_report()
}

/// Arithmetic mean rounded to two decimals; 0 for an empty input.
fn mean_percent(values: impl Iterator<Item = u8>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| {
        (sum + f64::from(v), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}
