pub mod coerce;
pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use text::{Lang, LocalizedText};

/// Sentinel category carried by the year picker question; never aggregated.
pub const YEAR_SELECTION: &str = "Year Selection";

/// Indicator label used when a question does not name one.
pub const DEFAULT_INDICATOR: &str = "General";

/// The three top-level assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Environment,
    Social,
    Governance,
}

impl Category {
    /// Fixed iteration order. Tie-breaking in derived metrics depends on it.
    pub const ALL: [Category; 3] = [Category::Environment, Category::Social, Category::Governance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Environment => "Environment",
            Category::Social => "Social",
            Category::Governance => "Governance",
        }
    }

    /// Lowercase key used by legacy score payloads (`score.environment`).
    pub fn legacy_key(&self) -> &'static str {
        match self {
            Category::Environment => "environment",
            Category::Social => "social",
            Category::Governance => "governance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "environment" | "environmental" => Some(Self::Environment),
            "social" => Some(Self::Social),
            "governance" => Some(Self::Governance),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category as it appears on a raw response, before aggregation decides
/// whether it counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryKey {
    Esg(Category),
    YearSelection,
    Other(String),
}

impl CategoryKey {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(YEAR_SELECTION) {
            return CategoryKey::YearSelection;
        }
        match Category::parse(raw) {
            Some(category) => CategoryKey::Esg(category),
            None => CategoryKey::Other(raw.trim().to_string()),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryKey::Esg(category) => Some(*category),
            _ => None,
        }
    }

    pub fn is_year_selection(&self) -> bool {
        matches!(self, CategoryKey::YearSelection)
    }
}
