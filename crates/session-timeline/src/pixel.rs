//! Mapping between wall-clock time on a [`TimelineBounds`] window and vertical pixels.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::bounds::TimelineBounds;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::normalize::Instant;
use crate::session::Session;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Where one session is drawn, relative to the top of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub session_id: String,
    /// Offset from the top of the window. Never negative.
    pub top_px: f64,
    /// Never negative.
    pub height_px: f64,
}

/// Converts hours and sessions into pixel offsets at a fixed density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapper {
    pixels_per_hour: f64,
}

impl Default for PixelMapper {
    fn default() -> Self {
        Self {
            pixels_per_hour: LayoutConfig::DEFAULT_PIXELS_PER_HOUR,
        }
    }
}

impl PixelMapper {
    /// # Errors
    /// Returns `TimelineError::InvalidConfig` unless `pixels_per_hour` is finite
    /// and strictly positive.
    pub fn new(pixels_per_hour: f64) -> Result<Self> {
        LayoutConfig::with_pixels_per_hour(pixels_per_hour).validate()?;
        Ok(Self { pixels_per_hour })
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self> {
        Self::new(config.pixels_per_hour)
    }

    pub fn pixels_per_hour(&self) -> f64 {
        self.pixels_per_hour
    }

    /// Number of hour rows to render; a partial last hour still gets a row.
    pub fn hour_count(&self, bounds: &TimelineBounds) -> usize {
        bounds.duration_hours.ceil().max(0.0) as usize
    }

    /// Total height of the window in pixels.
    pub fn timeline_height(&self, bounds: &TimelineBounds) -> f64 {
        bounds.duration_hours * self.pixels_per_hour
    }

    /// Top of hour row `hour_index`. Out-of-range indices extrapolate.
    pub fn hour_index_to_y(&self, hour_index: i64) -> f64 {
        hour_index as f64 * self.pixels_per_hour
    }

    /// Inverse of [`hour_index_to_y`](Self::hour_index_to_y), in fractional hours.
    pub fn y_to_hour_index(&self, y: f64) -> f64 {
        y / self.pixels_per_hour
    }

    /// Wall-clock time at the top of hour row `hour_index`.
    ///
    /// Returns `None` only when the result is outside chrono's representable range.
    pub fn hour_index_to_time(&self, bounds: &TimelineBounds, hour_index: i64) -> Option<Instant> {
        TimeDelta::try_hours(hour_index).and_then(|offset| bounds.start.checked_add_signed(offset))
    }

    /// Place a session on the window.
    ///
    /// A session that starts before the window (which [`compute_bounds`] never
    /// produces for its own input) is pinned to the top; its height still
    /// reflects its full duration.
    ///
    /// [`compute_bounds`]: crate::bounds::compute_bounds
    pub fn session_to_layout(&self, bounds: &TimelineBounds, session: &Session) -> LayoutRect {
        let minutes_from_start = minutes(session.start() - bounds.start);
        let duration_minutes = minutes(session.duration());

        let top_px = (minutes_from_start / 60.0 * self.pixels_per_hour).max(0.0);
        let height_px = (duration_minutes / 60.0 * self.pixels_per_hour).max(0.0);

        if minutes_from_start < 0.0 {
            tracing::trace!(
                session = session.id(),
                window_start = %bounds.start,
                "session starts before window, clamped to top"
            );
        }

        LayoutRect {
            session_id: session.id().to_string(),
            top_px,
            height_px,
        }
    }
}

fn minutes(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_MINUTE
}
