//! Timeline window derivation.
//!
//! The visible window starts at the earliest session start rounded down to the
//! hour and ends at the latest session end rounded up to the hour. Any sub-hour
//! remainder on the end (minutes, seconds or a fraction of a second) pushes it to
//! the next hour; an end that already lies on an hour boundary is kept.

use chrono::{Local, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::normalize::Instant;
use crate::session::Session;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// The hour-aligned `[start, end)` window all sessions of one event are laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineBounds {
    /// Earliest session start, floored to the hour.
    pub start: Instant,
    /// Latest session end, ceiled to the hour.
    pub end: Instant,
    /// `end - start` in hours. Always positive.
    pub duration_hours: f64,
}

impl TimelineBounds {
    /// Build a window from two hour boundaries, deriving `duration_hours`.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidBounds` unless `start < end` and both lie
    /// on an hour boundary.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if end <= start {
            return Err(TimelineError::InvalidBounds(format!(
                "end {} is not after start {}",
                end, start
            )));
        }
        for instant in [start, end] {
            if floor_to_hour(instant) != instant {
                return Err(TimelineError::InvalidBounds(format!(
                    "{} is not on an hour boundary",
                    instant
                )));
            }
        }
        Ok(Self::spanning(start, end))
    }

    fn spanning(start: Instant, end: Instant) -> Self {
        let duration = end - start;
        let duration_hours = duration.num_seconds() as f64 / SECONDS_PER_HOUR
            + f64::from(duration.subsec_nanos()) / (SECONDS_PER_HOUR * 1e9);
        Self {
            start,
            end,
            duration_hours,
        }
    }

    /// Whether `instant` falls inside the half-open window.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Round an instant down to the start of its hour.
pub fn floor_to_hour(instant: Instant) -> Instant {
    instant.date().and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(instant.hour()))
}

/// Round an instant up to the next hour unless it already lies on one.
///
/// # Panics
/// Panics if the next hour is past the last instant chrono can represent.
/// [`Session`] ends are validated against this at construction.
pub fn ceil_to_hour(instant: Instant) -> Instant {
    let floor = floor_to_hour(instant);
    if floor == instant {
        instant
    } else {
        floor + TimeDelta::hours(1)
    }
}

/// Compute the timeline window for a set of sessions, anchoring an empty set at
/// the current local hour.
///
/// See [`compute_bounds_at`].
pub fn compute_bounds(sessions: &[Session]) -> TimelineBounds {
    compute_bounds_at(sessions, Local::now().naive_local())
}

/// Compute the timeline window for a set of sessions.
///
/// An empty set yields a one-hour window starting at `now` floored to the hour,
/// so a renderer always has a non-degenerate window. In the last hour chrono
/// can represent, that window ends at the floor instead. For a non-empty set the
/// result depends only on the sessions' start and end instants, not on their
/// order, and `now` is ignored.
pub fn compute_bounds_at(sessions: &[Session], now: Instant) -> TimelineBounds {
    let mut spans = sessions.iter().map(|s| (s.start(), s.end()));

    let Some(first) = spans.next() else {
        let floor = floor_to_hour(now);
        tracing::debug!(start = %floor, "no sessions, using default one-hour window");
        // The last hour chrono can represent has no following boundary; end
        // the window there instead.
        return match floor.checked_add_signed(TimeDelta::hours(1)) {
            Some(end) => TimelineBounds::spanning(floor, end),
            None => TimelineBounds::spanning(floor - TimeDelta::hours(1), floor),
        };
    };

    let (earliest, latest) = spans.fold(first, |(lo, hi), (start, end)| {
        (lo.min(start), hi.max(end))
    });

    let bounds = TimelineBounds::spanning(floor_to_hour(earliest), ceil_to_hour(latest));
    tracing::debug!(
        sessions = sessions.len(),
        start = %bounds.start,
        end = %bounds.end,
        hours = bounds.duration_hours,
        "derived timeline bounds"
    );
    bounds
}
