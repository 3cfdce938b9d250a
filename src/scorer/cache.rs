use super::score_assessment;
use crate::envelope::TargetYear;
use crate::report::ScoreReport;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use xxhash_rust::xxh64::xxh64;

const DEFAULT_CAPACITY: usize = 64;

/// Memoizes reports on `(payload, year)`.
///
/// Payloads are keyed by an xxh64 hash of their serialized form. Object keys
/// serialize in sorted order, so equal payloads hash equally regardless of
/// the order fields arrived in. Oldest entries are evicted first.
#[derive(Debug)]
pub struct ScoreCache {
    capacity: usize,
    entries: HashMap<(u64, TargetYear), ScoreReport>,
    order: VecDeque<(u64, TargetYear)>,
    hits: u64,
    misses: u64,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ScoreCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn score(&mut self, envelope: &Value, year: &TargetYear) -> ScoreReport {
        let key = (payload_hash(envelope), year.clone());
        if let Some(report) = self.entries.get(&key) {
            self.hits += 1;
            return report.clone();
        }

        self.misses += 1;
        let report = score_assessment(envelope, year);
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, report.clone());
        report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation or the last [`clear`](Self::clear).
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

fn payload_hash(envelope: &Value) -> u64 {
    xxh64(envelope.to_string().as_bytes(), 0)
}
