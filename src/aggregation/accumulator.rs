use crate::core::coerce::percent;
use std::collections::BTreeMap;

/// Running weighted sum for one bucket (a category or an indicator).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedSum {
    pub weight_sum: f64,
    pub score_sum: f64,
}

impl WeightedSum {
    pub fn add(&mut self, weight: f64, fraction: f64) {
        self.weight_sum += weight;
        self.score_sum += weight * fraction;
    }

    pub fn is_scored(&self) -> bool {
        self.weight_sum > 0.0
    }

    /// `round(100 × score_sum / weight_sum)`, clamped to [0, 100].
    pub fn percent(&self) -> Option<u8> {
        self.is_scored()
            .then(|| percent(self.score_sum, self.weight_sum))
    }
}

/// Unweighted `Σscore / Σmax` sums used to refine a precomputed baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioSum {
    pub score: f64,
    pub max: f64,
}

impl RatioSum {
    pub fn add(&mut self, score: f64, max: f64) {
        self.score += score;
        self.max += max;
    }

    pub fn percent(&self) -> Option<u8> {
        (self.max > 0.0).then(|| percent(self.score, self.max))
    }
}

/// Accumulator keyed by an ordered key, so output order is deterministic.
#[derive(Debug, Clone)]
pub struct Buckets<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for Buckets<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V: Default> Buckets<K, V> {
    pub fn entry(&mut self, key: K) -> &mut V {
        self.entries.entry(key).or_default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}
