//! Observed-value history for a point
//!
//! Every successful read appends one sample; nothing else mutates the log.
//! The log is seeded with a single sample at construction time, so it is
//! never empty and `last_value` always has something to return.

use bacpoint_link::PointValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed value with the time it was captured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub timestamp: DateTime<Utc>,
    pub value: PointValue,
}

/// How many samples a history log keeps
///
/// In config files a bare number means `Capacity`; leaving the field out
/// means `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum HistoryRetention {
    /// Keep at most this many samples, discarding the oldest first
    Capacity(usize),
    /// Keep every sample
    #[default]
    Unbounded,
}

impl HistoryRetention {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, HistoryRetention::Unbounded)
    }
}

/// Append-only log of observed point values
///
/// Timestamps are clamped to be monotonically non-decreasing even if the
/// wall clock steps backwards between appends. A capacity of zero is treated
/// as one; the log always retains at least the most recent sample.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    samples: Vec<HistorySample>,
    retention: HistoryRetention,
}

impl HistoryLog {
    /// Create an unbounded log seeded with one sample holding `initial`
    pub fn new(initial: PointValue) -> Self {
        Self::with_retention(initial, HistoryRetention::Unbounded)
    }

    /// Create a log with an explicit retention policy
    pub fn with_retention(initial: PointValue, retention: HistoryRetention) -> Self {
        Self {
            samples: vec![HistorySample {
                timestamp: Utc::now(),
                value: initial,
            }],
            retention,
        }
    }

    /// Append one observed value, stamped now (or the previous stamp if the
    /// clock went backwards)
    pub fn append(&mut self, value: PointValue) {
        let mut timestamp = Utc::now();
        if let Some(last) = self.samples.last() {
            if timestamp < last.timestamp {
                timestamp = last.timestamp;
            }
        }
        self.samples.push(HistorySample { timestamp, value });
        self.trim();
    }

    /// Most recent sample's value
    pub fn last_value(&self) -> &PointValue {
        static NULL: PointValue = PointValue::Null;
        self.samples.last().map(|s| &s.value).unwrap_or(&NULL)
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&HistorySample> {
        self.samples.last()
    }

    /// All samples, oldest first
    pub fn samples(&self) -> &[HistorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn retention(&self) -> HistoryRetention {
        self.retention
    }

    fn trim(&mut self) {
        if let HistoryRetention::Capacity(capacity) = self.retention {
            let capacity = capacity.max(1);
            if self.samples.len() > capacity {
                let excess = self.samples.len() - capacity;
                self.samples.drain(..excess);
            }
        }
    }
}
