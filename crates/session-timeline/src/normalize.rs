//! Timestamp normalization -- coerces typed or serialized timestamps into [`Instant`]s.
//!
//! Instants are local wall-clock times without a zone. RFC 3339 strings are
//! accepted, but only their wall-clock part is kept: the offset is dropped,
//! never applied.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// A normalized, comparable local point in time.
pub type Instant = NaiveDateTime;

/// Naive layouts tried in order after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A timestamp as handed over by a collaborator, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Instant(Instant),
    Text(String),
}

impl From<Instant> for RawTime {
    fn from(value: Instant) -> Self {
        RawTime::Instant(value)
    }
}

impl From<&str> for RawTime {
    fn from(value: &str) -> Self {
        RawTime::Text(value.to_string())
    }
}

impl From<String> for RawTime {
    fn from(value: String) -> Self {
        RawTime::Text(value)
    }
}

/// Normalize a typed or serialized timestamp into an [`Instant`].
///
/// Accepted string forms:
/// - `2026-03-01T09:15:00`, optionally with fractional seconds
/// - `2026-03-01 09:15:00` (the `Display` form of [`Instant`])
/// - `2026-03-01T09:15` and `2026-03-01 09:15`
/// - RFC 3339 such as `2026-03-01T09:15:00+02:00` (offset discarded)
///
/// Normalizing an already-typed instant returns it unchanged, so
/// `normalize(normalize(x)?) == normalize(x)`.
///
/// # Errors
/// Returns `TimelineError::Parse` if the string is not a valid calendar timestamp.
pub fn normalize(value: impl Into<RawTime>) -> Result<Instant> {
    match value.into() {
        RawTime::Instant(instant) => Ok(instant),
        RawTime::Text(text) => parse_instant(&text),
    }
}

fn parse_instant(input: &str) -> Result<Instant> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimelineError::Parse {
            input: input.to_string(),
            reason: "empty timestamp".to_string(),
        });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    let mut last_error = None;
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(instant) => return Ok(instant),
            Err(e) => last_error = Some(e),
        }
    }

    Err(TimelineError::Parse {
        input: input.to_string(),
        reason: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unrecognized format".to_string()),
    })
}
