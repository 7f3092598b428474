//! Fixed-point nanosecond timestamps and the wire formats they arrive in

use std::ops::Sub;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, Result};

/// A point in time as whole nanoseconds since the Unix epoch.
///
/// Packet capture stacks report observation times at nanosecond
/// resolution; a fixed-point integer keeps them exact where a float
/// representation would start rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nanos(i64);

impl Nanos {
    /// Create a timestamp from whole nanoseconds since the Unix epoch
    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Get the raw nanosecond offset from the Unix epoch
    pub fn as_nanos(self) -> i64 {
        self.0
    }
}

/// Differences are widened to `i128` so they are exact over the whole
/// representable range. Negative differences are meaningful (clock skew
/// between the observing hosts) and preserved.
impl Sub for Nanos {
    type Output = i128;

    fn sub(self, rhs: Nanos) -> i128 {
        self.0 as i128 - rhs.0 as i128
    }
}

/// Naive datetime formats accepted from producers, tried in order.
/// The fractional part is optional and honored to nanosecond precision.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp string into nanoseconds since the Unix epoch.
///
/// Producers emit naive UTC timestamps such as
/// `2020-01-01T00:00:00.000000500`. RFC 3339 strings with an explicit
/// offset are normalized to UTC, and a bare date reads as midnight UTC.
pub fn parse_timestamp(input: &str) -> Result<Nanos> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::timestamp("empty timestamp string"));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return nanos_since_epoch(datetime.timestamp_nanos_opt(), input);
    }

    for format in NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return nanos_since_epoch(datetime.and_utc().timestamp_nanos_opt(), input);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN);
        return nanos_since_epoch(midnight.and_utc().timestamp_nanos_opt(), input);
    }

    Err(AppError::timestamp(format!(
        "unrecognized timestamp '{}'",
        input
    )))
}

/// Nanosecond timestamps only span roughly 1677..=2262; anything outside
/// cannot be represented and is rejected rather than silently wrapped.
fn nanos_since_epoch(nanos: Option<i64>, input: &str) -> Result<Nanos> {
    nanos.map(Nanos::from_nanos).ok_or_else(|| {
        AppError::timestamp(format!(
            "timestamp '{}' is outside the representable nanosecond range",
            input
        ))
    })
}
