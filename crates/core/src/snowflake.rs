//! Snowflake identifiers and the creation time they embed.
//!
//! A snowflake is a 64-bit unsigned integer carried over the wire as a
//! decimal string: milliseconds since the platform epoch in the high bits,
//! worker/process/sequence data in the low 22.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::EntityError;
use crate::timestamp::Timestamp;

/// Milliseconds between the Unix epoch and the platform epoch
/// (2015-01-01T00:00:00Z).
pub const PLATFORM_EPOCH_MILLIS: f64 = 1_420_070_400_000.0;

/// 2^22: shifts out the worker/process/sequence bits of a snowflake.
const TIMESTAMP_DIVISOR: f64 = 4_194_304.0;

/// An opaque snowflake token.
///
/// The raw string is kept verbatim. Construction is lenient: malformed
/// tokens are stored as-is and decode to [`Timestamp::UNKNOWN`]. Callers
/// that want up-front validation go through [`FromStr`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snowflake(String);

impl Snowflake {
    /// Wrap a raw token. Empty input means "no identity yet".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw decimal-string token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Milliseconds since the *platform* epoch encoded in this snowflake.
    ///
    /// NaN when the token is not a decimal integer. Tokens past 2^53 - 1
    /// round to the nearest representable double before the shift.
    pub fn epoch_millis(&self) -> f64 {
        if !self.0.bytes().all(|b| b.is_ascii_digit()) {
            trace!(id = %self.0, "snowflake is not a decimal integer");
            return f64::NAN;
        }
        let parsed: f64 = self.0.parse().unwrap_or(f64::NAN);
        (parsed / TIMESTAMP_DIVISOR).floor()
    }

    /// The creation instant encoded in this snowflake, in Unix time.
    pub fn timestamp(&self) -> Timestamp {
        let local = self.epoch_millis();
        if local.is_nan() {
            return Timestamp::UNKNOWN;
        }
        Timestamp::from_millis(local + PLATFORM_EPOCH_MILLIS)
    }
}

/// Creation instant for an optional identifier.
///
/// Objects that have not been assigned an id yet decode to
/// [`Timestamp::UNKNOWN`].
pub fn creation_time(id: Option<&Snowflake>) -> Timestamp {
    match id {
        Some(id) => id.timestamp(),
        None => Timestamp::UNKNOWN,
    }
}

impl core::fmt::Display for Snowflake {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Snowflake {
    type Err = EntityError;

    /// Strict parse: decimal digits only, within unsigned 64-bit range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EntityError::InvalidSnowflake(s.to_owned()));
        }
        if s.parse::<u64>().is_err() {
            return Err(EntityError::SnowflakeOutOfRange(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
