use serde::{Deserialize, Serialize};

/// Upper bounds (inclusive) of the status buckets.
///
/// `0` is always "Yet to Start"; `(0, basic]` is Basic, `(basic, developing]`
/// Developing, `(developing, intermediate]` Intermediate, and anything above
/// Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    #[serde(default = "default_basic")]
    pub basic: f64,

    #[serde(default = "default_developing")]
    pub developing: f64,

    #[serde(default = "default_intermediate")]
    pub intermediate: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            basic: default_basic(),
            developing: default_developing(),
            intermediate: default_intermediate(),
        }
    }
}

impl StatusThresholds {
    // Pure function: Check if a bound lies in (0, 100]
    pub fn is_valid_bound(bound: f64) -> bool {
        bound > 0.0 && bound <= 100.0
    }

    /// Bounds must lie in (0, 100] and be strictly increasing.
    pub fn validate(&self) -> Result<(), String> {
        for (name, bound) in [
            ("basic", self.basic),
            ("developing", self.developing),
            ("intermediate", self.intermediate),
        ] {
            if !Self::is_valid_bound(bound) {
                return Err(format!("{name} threshold must be in (0, 100], got {bound}"));
            }
        }
        if !(self.basic < self.developing && self.developing < self.intermediate) {
            return Err(format!(
                "thresholds must increase: basic {} < developing {} < intermediate {}",
                self.basic, self.developing, self.intermediate
            ));
        }
        Ok(())
    }
}

fn default_basic() -> f64 {
    30.0
}
fn default_developing() -> f64 {
    50.0
}
fn default_intermediate() -> f64 {
    80.0
}
