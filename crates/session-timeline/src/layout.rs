//! The layout facade a rendering layer talks to.
//!
//! [`TimelineLayout`] derives the bounds of a session snapshot once and answers
//! the two questions a renderer asks: what does the timeline look like, and where
//! does this session go.

use serde::{Deserialize, Serialize};

use crate::bounds::{compute_bounds, TimelineBounds};
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::normalize::Instant;
use crate::pixel::{LayoutRect, PixelMapper};
use crate::session::Session;

/// One hour row of the timeline grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourMark {
    pub index: usize,
    pub y_px: f64,
    pub time: Instant,
}

/// Everything needed to draw the empty timeline grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDescription {
    pub bounds: TimelineBounds,
    pub hour_count: usize,
    pub height_px: f64,
    pub pixels_per_hour: f64,
    pub hours: Vec<HourMark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    bounds: TimelineBounds,
    mapper: PixelMapper,
}

impl TimelineLayout {
    /// Derive bounds from `sessions` and set up the pixel mapping.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidConfig` if `config` fails validation.
    pub fn new(sessions: &[Session], config: &LayoutConfig) -> Result<Self> {
        let mapper = PixelMapper::from_config(config)?;
        Ok(Self {
            bounds: compute_bounds(sessions),
            mapper,
        })
    }

    /// Lay out against bounds the caller already holds.
    ///
    /// Only `start` and `end` are trusted; `duration_hours` is derived again
    /// from them.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidBounds` if the window is empty, inverted
    /// or not hour-aligned, and `TimelineError::InvalidConfig` if `config`
    /// fails validation.
    pub fn with_bounds(bounds: TimelineBounds, config: &LayoutConfig) -> Result<Self> {
        Ok(Self {
            bounds: TimelineBounds::new(bounds.start, bounds.end)?,
            mapper: PixelMapper::from_config(config)?,
        })
    }

    pub fn bounds(&self) -> &TimelineBounds {
        &self.bounds
    }

    pub fn mapper(&self) -> &PixelMapper {
        &self.mapper
    }

    pub fn describe(&self) -> TimelineDescription {
        let hour_count = self.mapper.hour_count(&self.bounds);
        let hours = (0..hour_count)
            .filter_map(|index| {
                let time = self.mapper.hour_index_to_time(&self.bounds, index as i64)?;
                Some(HourMark {
                    index,
                    y_px: self.mapper.hour_index_to_y(index as i64),
                    time,
                })
            })
            .collect();

        TimelineDescription {
            bounds: self.bounds,
            hour_count,
            height_px: self.mapper.timeline_height(&self.bounds),
            pixels_per_hour: self.mapper.pixels_per_hour(),
            hours,
        }
    }

    pub fn place(&self, session: &Session) -> LayoutRect {
        self.mapper.session_to_layout(&self.bounds, session)
    }

    /// Place every session, in input order.
    pub fn place_all(&self, sessions: &[Session]) -> Vec<LayoutRect> {
        sessions.iter().map(|s| self.place(s)).collect()
    }
}
