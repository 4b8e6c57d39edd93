//! Instants as milliseconds since the Unix epoch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A point in time, in milliseconds since the Unix epoch.
///
/// Decoding cannot always produce a real instant (objects without an
/// identifier, malformed tokens), so the type carries an explicit
/// [`UNKNOWN`](Self::UNKNOWN) sentinel rather than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Sentinel for "no valid instant".
    pub const UNKNOWN: Timestamp = Timestamp(f64::NAN);

    pub fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch; NaN for [`UNKNOWN`](Self::UNKNOWN).
    pub fn millis(self) -> f64 {
        self.0
    }

    /// Whether this carries a real instant rather than the sentinel.
    pub fn is_known(self) -> bool {
        !self.0.is_nan()
    }

    /// Convert to a calendar datetime.
    ///
    /// `None` for the sentinel and for values outside chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(self.0 as i64)
    }

    /// JSON form: integral in-range instants as numbers, everything a JSON
    /// number cannot represent (the sentinel included) as null.
    pub fn to_json(self) -> Value {
        if self.0.is_finite()
            && self.0.fract() == 0.0
            && self.0 >= i64::MIN as f64
            && self.0 < i64::MAX as f64
        {
            return Value::from(self.0 as i64);
        }
        serde_json::Number::from_f64(self.0).map_or(Value::Null, Value::Number)
    }
}

impl PartialEq for Timestamp {
    /// Numeric equality, except that [`UNKNOWN`](Self::UNKNOWN) compares
    /// equal to itself so decoded results can be compared directly.
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0 == other.0
    }
}
