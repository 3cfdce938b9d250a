//! Response-shape normalization.
//!
//! The retrieval API has returned at least four different payload layouts
//! over time. [`EnvelopeShape::classify`] decides which one a payload uses,
//! in a fixed precedence order, and [`extract_responses`] pulls the single
//! ordered list of raw response records out of it.
//!
//! Precedence (first match wins):
//!
//! 1. top-level `responses` array
//! 2. top-level `assessment_responses` array
//! 3. `years[]` entry whose `year` / `assessment_year` matches the target
//! 4. `years[0]` when no entry matches
//! 5. the payload itself when it is an array
//! 6. nothing

pub mod year;

use crate::core::coerce::field_array;
use serde_json::Value;

pub use year::TargetYear;

/// Keys probed, in order, on a `years[]` entry.
const YEAR_ENTRY_LIST_KEYS: [&str; 3] = ["responses", "assessment_responses", "questions"];

/// Known envelope layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    TopLevelResponses,
    TopLevelAssessmentResponses,
    /// Index of the `years[]` entry matching the target year.
    MatchedYear(usize),
    /// No entry matched; the first year is used instead.
    FallbackYear,
    BareArray,
    Unrecognized,
}

impl EnvelopeShape {
    /// Discriminate the payload layout. Earlier rules win.
    pub fn classify(envelope: &Value, target: &TargetYear) -> Self {
        if field_array(envelope, "responses").is_some() {
            return Self::TopLevelResponses;
        }
        if field_array(envelope, "assessment_responses").is_some() {
            return Self::TopLevelAssessmentResponses;
        }
        if let Some(years) = field_array(envelope, "years") {
            if let Some(index) = years.iter().position(|entry| target.matches_entry(entry)) {
                return Self::MatchedYear(index);
            }
            if !years.is_empty() {
                return Self::FallbackYear;
            }
        }
        if envelope.is_array() {
            return Self::BareArray;
        }
        Self::Unrecognized
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TopLevelResponses => "responses",
            Self::TopLevelAssessmentResponses => "assessment_responses",
            Self::MatchedYear(_) => "years[matched]",
            Self::FallbackYear => "years[0]",
            Self::BareArray => "array",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// The `years[]` entry this shape reads from, if any.
    pub fn year_entry<'a>(&self, envelope: &'a Value) -> Option<&'a Value> {
        let years = field_array(envelope, "years")?;
        match self {
            Self::MatchedYear(index) => years.get(*index),
            Self::FallbackYear => years.first(),
            _ => None,
        }
    }
}

/// Extract the ordered list of raw response records for `target`.
pub fn extract_responses(envelope: &Value, target: &TargetYear) -> Vec<Value> {
    let shape = EnvelopeShape::classify(envelope, target);
    extract_with_shape(envelope, shape)
}

/// Extract using an already classified shape.
pub fn extract_with_shape(envelope: &Value, shape: EnvelopeShape) -> Vec<Value> {
    match shape {
        EnvelopeShape::TopLevelResponses => cloned(field_array(envelope, "responses")),
        EnvelopeShape::TopLevelAssessmentResponses => {
            cloned(field_array(envelope, "assessment_responses"))
        }
        EnvelopeShape::MatchedYear(_) | EnvelopeShape::FallbackYear => shape
            .year_entry(envelope)
            .map(extract_from_year_entry)
            .unwrap_or_default(),
        EnvelopeShape::BareArray => envelope.as_array().cloned().unwrap_or_default(),
        EnvelopeShape::Unrecognized => Vec::new(),
    }
}

/// Pull responses out of a single `years[]` entry.
///
/// `data` is either the list itself or a wrapper whose first element holds a
/// `responses` array.
fn extract_from_year_entry(entry: &Value) -> Vec<Value> {
    if let Some(list) = YEAR_ENTRY_LIST_KEYS
        .iter()
        .find_map(|key| field_array(entry, key))
    {
        return list.clone();
    }

    match field_array(entry, "data") {
        Some(data) => match data.first().and_then(|first| field_array(first, "responses")) {
            Some(inner) => inner.clone(),
            None => data.clone(),
        },
        None => Vec::new(),
    }
}

fn cloned(list: Option<&Vec<Value>>) -> Vec<Value> {
    list.cloned().unwrap_or_default()
}
