//! The validated session record.
//!
//! A [`Session`] can only be built through [`Session::new`] (or its parsing and
//! deserializing wrappers), all of which enforce `start < end`. Layout and
//! overlap code can therefore rely on every session having positive length.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::normalize::{normalize, Instant, RawTime};

/// Category of a programme item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    #[default]
    Lecture,
    Break,
    Drinking,
}

/// A session as received from the event store, before validation.
///
/// `location` is accepted as an alias for `room`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub start: RawTime,
    pub end: RawTime,
    #[serde(alias = "location")]
    pub room: String,
    #[serde(default)]
    pub kind: SessionKind,
}

/// A time-bounded programme item in one room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    id: String,
    start: Instant,
    end: Instant,
    room: String,
    kind: SessionKind,
}

impl Session {
    /// Build a session from already-normalized instants.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidSession` if the id is blank, if
    /// `end <= start`, or if `end` is so close to the last representable instant
    /// that it could not be rounded up to the next hour.
    pub fn new(
        id: impl Into<String>,
        start: Instant,
        end: Instant,
        room: impl Into<String>,
        kind: SessionKind,
    ) -> Result<Self> {
        let id = id.into();
        let invalid = |reason: String| TimelineError::InvalidSession {
            id: id.clone(),
            reason,
        };

        if id.trim().is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if end <= start {
            return Err(invalid(format!(
                "end ({}) must be after start ({})",
                end, start
            )));
        }
        if end.checked_add_signed(TimeDelta::hours(1)).is_none() {
            return Err(invalid(format!("end ({}) is out of range", end)));
        }

        Ok(Self {
            id,
            start,
            end,
            room: room.into(),
            kind,
        })
    }

    /// Normalize `start` and `end`, then validate as in [`Session::new`].
    ///
    /// # Errors
    /// Returns `TimelineError::Parse` for an unparseable timestamp, or
    /// `TimelineError::InvalidSession` for an invalid range.
    pub fn parse(
        id: impl Into<String>,
        start: impl Into<RawTime>,
        end: impl Into<RawTime>,
        room: impl Into<String>,
        kind: SessionKind,
    ) -> Result<Self> {
        Self::new(id, normalize(start)?, normalize(end)?, room, kind)
    }

    /// A copy of this session moved to a new time range.
    pub fn rescheduled(&self, start: Instant, end: Instant) -> Result<Self> {
        Self::new(self.id.clone(), start, end, self.room.clone(), self.kind)
    }

    /// A copy of this session moved to another room.
    pub fn moved_to(&self, room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Always strictly positive.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = TimelineError;

    fn try_from(record: SessionRecord) -> Result<Self> {
        Session::parse(record.id, record.start, record.end, record.room, record.kind)
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        SessionRecord {
            id: session.id,
            start: RawTime::Instant(session.start),
            end: RawTime::Instant(session.end),
            room: session.room,
            kind: session.kind,
        }
    }
}
