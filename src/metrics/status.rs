use crate::config::StatusThresholds;
use serde::{Serialize, Serializer};
use std::fmt;

/// Maturity label for a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreStatus {
    /// Malformed input (NaN or negative).
    NotAvailable,
    YetToStart,
    Basic,
    Developing,
    Intermediate,
    Advanced,
}

impl ScoreStatus {
    /// Label used in summaries and narrative text.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreStatus::NotAvailable => "N/A",
            ScoreStatus::YetToStart => "Yet to Start",
            ScoreStatus::Basic => "Basic",
            ScoreStatus::Developing => "Developing",
            ScoreStatus::Intermediate => "Intermediate",
            ScoreStatus::Advanced => "Advanced",
        }
    }

    /// Uppercase label used on chart bars.
    pub fn chart_label(&self) -> &'static str {
        match self {
            ScoreStatus::NotAvailable => "N/A",
            ScoreStatus::YetToStart => "NOT STARTED",
            ScoreStatus::Basic => "BASIC",
            ScoreStatus::Developing => "DEVELOPING",
            ScoreStatus::Intermediate => "INTERMEDIATE",
            ScoreStatus::Advanced => "ADVANCED",
        }
    }
}

/// Serialized as the display label, the same vocabulary the other writers
/// print.
impl Serialize for ScoreStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a percentage with the default thresholds.
pub fn score_status(percentage: f64) -> ScoreStatus {
    score_status_with(percentage, &StatusThresholds::default())
}

/// Classify a percentage. Upper bounds are inclusive; only exactly 0 is
/// "Yet to Start", so 0.5 is Basic.
pub fn score_status_with(percentage: f64, thresholds: &StatusThresholds) -> ScoreStatus {
    if percentage.is_nan() || percentage < 0.0 {
        return ScoreStatus::NotAvailable;
    }
    if percentage == 0.0 {
        ScoreStatus::YetToStart
    } else if percentage <= thresholds.basic {
        ScoreStatus::Basic
    } else if percentage <= thresholds.developing {
        ScoreStatus::Developing
    } else if percentage <= thresholds.intermediate {
        ScoreStatus::Intermediate
    } else {
        ScoreStatus::Advanced
    }
}
