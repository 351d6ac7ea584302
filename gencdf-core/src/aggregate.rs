use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// Frequency table plus running min/max over all recorded values.
///
/// Keys are the exact parsed floats: `"1"` and `"1.0"` parse to the same
/// key and collapse into one count. No binning of near-equal values.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    counts: HashMap<OrderedFloat<f64>, u64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value` and fold it into the running range.
    pub fn record(&mut self, value: f64) {
        if self.min.map_or(true, |m| value < m) {
            self.min = Some(value);
        }
        if self.max.map_or(true, |m| value > m) {
            self.max = Some(value);
        }
        *self.counts.entry(OrderedFloat(value)).or_insert(0) += 1;
    }

    /// Zero-count entry used by the padder. Leaves the observed range and
    /// the total untouched; the key still joins the sorted walk.
    pub(crate) fn insert_sentinel(&mut self, value: f64) {
        self.counts.entry(OrderedFloat(value)).or_insert(0);
    }

    /// Smallest recorded value; `None` until the first `record`.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest recorded value; `None` until the first `record`.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Number of distinct keys, sentinels included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts. Sentinels contribute nothing.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, value: f64) -> u64 {
        self.counts.get(&OrderedFloat(value)).copied().unwrap_or(0)
    }

    /// Entries in ascending value order.
    pub fn sorted_entries(&self) -> Vec<(f64, u64)> {
        let mut entries: Vec<(f64, u64)> = self.counts.iter().map(|(k, &c)| (k.0, c)).collect();
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        entries
    }
}
