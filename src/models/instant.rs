//! Lenient instant representation for directory and ledger dates.
//!
//! Upstream records carry dates in several shapes depending on which system
//! wrote them. [`RawInstant`] accepts all of them on the wire and resolves to a
//! UTC instant on demand. Anything that cannot be resolved yields `None`, and
//! callers decide how lenient to be.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Epoch values at or above this magnitude are read as milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// A date as stored by an upstream collaborator.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RawInstant;
///
/// let wrapped: RawInstant = serde_json::from_str(r#"{"_seconds": 1760572800}"#).unwrap();
/// let text: RawInstant = serde_json::from_str(r#""2025-10-16""#).unwrap();
/// assert_eq!(wrapped.to_utc(), text.to_utc());
///
/// let junk = RawInstant::from("not a date");
/// assert!(junk.to_utc().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    /// Structured timestamp object.
    Timestamp {
        /// Whole seconds since the Unix epoch.
        seconds: i64,
        /// Sub-second nanoseconds.
        #[serde(default)]
        nanoseconds: u32,
    },
    /// Epoch-seconds wrapper as emitted by some document stores.
    EpochSeconds {
        /// Whole seconds since the Unix epoch.
        #[serde(rename = "_seconds")]
        seconds: i64,
        /// Sub-second nanoseconds.
        #[serde(default, rename = "_nanoseconds")]
        nanoseconds: u32,
    },
    /// A native UTC instant.
    Native(DateTime<Utc>),
    /// A bare epoch number, in seconds or milliseconds.
    Epoch(i64),
    /// Free text: ISO-8601 variants or an epoch string.
    Text(String),
}

impl RawInstant {
    /// Resolves this value to a UTC instant, or `None` if it is unparseable.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            RawInstant::Timestamp {
                seconds,
                nanoseconds,
            }
            | RawInstant::EpochSeconds {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
            RawInstant::Native(instant) => Some(*instant),
            RawInstant::Epoch(value) => from_epoch(*value),
            RawInstant::Text(text) => parse_text(text),
        }
    }
}

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value.unsigned_abs() >= EPOCH_MILLIS_THRESHOLD.unsigned_abs() {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    text.parse::<i64>().ok().and_then(from_epoch)
}

impl From<DateTime<Utc>> for RawInstant {
    fn from(instant: DateTime<Utc>) -> Self {
        RawInstant::Native(instant)
    }
}

impl From<NaiveDate> for RawInstant {
    fn from(date: NaiveDate) -> Self {
        RawInstant::Native(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<&str> for RawInstant {
    fn from(text: &str) -> Self {
        RawInstant::Text(text.to_string())
    }
}

impl From<String> for RawInstant {
    fn from(text: String) -> Self {
        RawInstant::Text(text)
    }
}
