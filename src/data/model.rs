use std::collections::BTreeMap;

use serde::Serialize;

use super::constants::CONFIG_KEYS;

// ---------------------------------------------------------------------------
// RawConfig – recognised header key/value pairs
// ---------------------------------------------------------------------------

/// Configuration values found in the run header, kept as the literal text
/// that followed the colon. Keys missing from the file are missing here too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawConfig(BTreeMap<String, String>);

impl RawConfig {
    /// Record `value` under `key` when `key` is one of [`CONFIG_KEYS`].
    /// Returns whether the key was recognised. A repeated key overwrites.
    pub(crate) fn record(&mut self, key: &str, value: &str) -> bool {
        if !CONFIG_KEYS.contains(&key) {
            return false;
        }
        self.0.insert(key.to_string(), value.to_string());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Sample – one decoded measurement row
// ---------------------------------------------------------------------------

/// One retained measurement: engine speed, torque and power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Revolutions per minute, rounded to the nearest integer.
    pub rpm: i64,
    /// Motor torque in N·m, two decimals.
    pub torque: f64,
    /// Power in horsepower, two decimals.
    pub hp: f64,
}

// ---------------------------------------------------------------------------
// AggregatedBin – averaged values over one RPM bucket
// ---------------------------------------------------------------------------

/// Mean torque and power of all samples falling in `[rpm, rpm + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregatedBin {
    /// Lower edge of the bucket.
    pub rpm: i64,
    pub torque: f64,
    pub hp: f64,
}

/// An `(x, y)` point of a chart series, x being RPM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
}
