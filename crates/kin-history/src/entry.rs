//! History entries: one immutable record per completed calculation.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used in persisted entries.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One value in an entry's results map: a solved number, or the formula
/// label string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

/// Immutable record of one completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Formula family label, e.g. "Free Fall".
    pub topic: String,
    /// Input snapshot; `null` marks the quantity that was solved for.
    pub inputs: BTreeMap<String, Option<f64>>,
    /// Solved values plus the formula label under the `formula` key.
    pub results: BTreeMap<String, ResultValue>,
}

impl HistoryEntry {
    /// Build an entry stamped with the current local time.
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        inputs: BTreeMap<String, Option<f64>>,
        results: BTreeMap<String, ResultValue>,
    ) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            topic: topic.into(),
            inputs,
            results,
        }
    }
}
