//! Typed view of raw response records.
//!
//! A record either nests its question metadata under `question` or hoists
//! `category`, `text` and `questionId` onto the record itself. Both are
//! parsed into the same [`Response`]; nothing here fails, malformed fields
//! fall back to their defaults.

use crate::core::coerce::{as_number, field_array, field_number, sum_numbers};
use crate::core::{Category, CategoryKey, LocalizedText, DEFAULT_INDICATOR};
use serde_json::Value;

/// Which layout the record used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Nested,
    Flat,
}

/// How a question was answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Pre-computed score with its own maximum.
    Scored { score: f64, max: f64 },
    /// Sum of the selected options' sub-scores.
    Submarks(f64),
    Unanswered,
}

impl Answer {
    /// Scored fraction used for weighted aggregation.
    ///
    /// Score/max pairs are clamped to [0, 1]. Submark sums are used as-is and
    /// bounded later when the category percentage is clamped.
    pub fn fraction(&self) -> Option<f64> {
        match self {
            Answer::Scored { score, max } => Some((score / max).clamp(0.0, 1.0)),
            Answer::Submarks(sum) => Some(sum.max(0.0)),
            Answer::Unanswered => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub shape: ResponseShape,
    pub question_id: Option<String>,
    pub category: CategoryKey,
    pub indicator: String,
    pub weight: f64,
    pub text: LocalizedText,
    pub answer: Answer,
    /// Response-level `question_score` / `question_max`, kept separately
    /// because baseline refinement only trusts these pairs.
    pub score_pair: Option<(f64, f64)>,
}

impl Response {
    /// Parse a raw record. Returns `None` when no category can be resolved.
    pub fn from_value(record: &Value) -> Option<Self> {
        let nested = record.get("question").filter(|q| q.is_object());
        let shape = if nested.is_some() {
            ResponseShape::Nested
        } else {
            ResponseShape::Flat
        };

        // Question metadata lives under `question` or on the record itself.
        let meta = |key: &str| nested.and_then(|q| q.get(key)).or_else(|| record.get(key));

        let category = meta("category")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CategoryKey::parse)?;

        let indicator = meta("indicator")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_INDICATOR)
            .to_string();

        let weight = meta("weight")
            .and_then(as_number)
            .filter(|w| *w > 0.0)
            .unwrap_or(1.0);

        let question_id = ["questionId", "question_id", "id"]
            .iter()
            .find_map(|key| meta(*key))
            .and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

        let text = LocalizedText::from_value(meta("text"));
        let answer_obj = record.get("answer").filter(|a| a.is_object());
        let score_pair = score_pair(answer_obj).or_else(|| score_pair(Some(record)));
        let answer = parse_answer(answer_obj, score_pair);

        Some(Self {
            shape,
            question_id,
            category,
            indicator,
            weight,
            text,
            answer,
            score_pair,
        })
    }

    /// Aggregation category, `None` for the year sentinel and unknown names.
    pub fn esg_category(&self) -> Option<Category> {
        self.category.category()
    }

    /// Percentage this single answer represents, for display.
    pub fn percent(&self) -> Option<u8> {
        self.answer
            .fraction()
            .map(|fraction| crate::core::coerce::clamp_percent(fraction * 100.0))
    }
}

fn score_pair(source: Option<&Value>) -> Option<(f64, f64)> {
    let source = source?;
    let score = field_number(source, "question_score")?;
    let max = field_number(source, "question_max")?;
    Some((score, max))
}

fn parse_answer(answer: Option<&Value>, pair: Option<(f64, f64)>) -> Answer {
    if let Some((score, max)) = pair.filter(|(_, max)| *max > 0.0) {
        return Answer::Scored { score, max };
    }
    match answer.and_then(|a| field_array(a, "selected_option_submarks")) {
        Some(submarks) => Answer::Submarks(sum_numbers(submarks)),
        None => Answer::Unanswered,
    }
}

/// Keep records with a resolvable category other than the year sentinel and
/// parse them.
pub fn filter_responses(records: &[Value]) -> Vec<Response> {
    records
        .iter()
        .filter_map(Response::from_value)
        .filter(|response| !response.category.is_year_selection())
        .collect()
}
