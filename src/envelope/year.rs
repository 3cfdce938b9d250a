use crate::core::coerce::as_number;
use serde_json::Value;
use std::fmt;

/// Year an assessment is requested for.
///
/// Route parameters deliver the year as a string while stored records may
/// carry it as a number, so matching is loose: trimmed string equality, or
/// numeric equality when both sides parse as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TargetYear(String);

impl TargetYear {
    pub fn new(year: impl Into<String>) -> Self {
        Self(year.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn as_number(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    /// Loose comparison against a `year` / `assessment_year` field value.
    pub fn matches(&self, value: &Value) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let as_text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return false,
        };
        if as_text == self.0 {
            return true;
        }
        match (self.as_number(), as_number(value)) {
            (Some(target), Some(candidate)) => target == candidate,
            _ => false,
        }
    }

    /// True when either year field on a `years[]` entry matches.
    pub fn matches_entry(&self, entry: &Value) -> bool {
        ["year", "assessment_year"]
            .iter()
            .filter_map(|key| entry.get(*key))
            .any(|value| self.matches(value))
    }
}

impl fmt::Display for TargetYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetYear {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TargetYear {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

macro_rules! target_year_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for TargetYear {
            fn from(value: $t) -> Self {
                Self(value.to_string())
            }
        })*
    };
}

target_year_from_int!(i32, i64, u16, u32);
