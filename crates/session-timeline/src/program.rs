//! An in-memory event programme that only accepts conflict-free edits.
//!
//! [`Program`] plays the role of the scheduling collaborator: it owns the
//! session snapshot, runs the overlap check before every add or edit, and
//! reports a clash as a [`ProgramError`] instead of committing it. It does no
//! persistence.

use thiserror::Error;

use crate::config::LayoutConfig;
use crate::error::{Result, TimelineError};
use crate::layout::TimelineLayout;
use crate::overlap::find_overlap;
use crate::session::{Session, SessionRecord};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgramError {
    #[error("Session '{0}' already exists")]
    DuplicateId(String),

    #[error("Unknown session '{0}'")]
    UnknownSession(String),

    /// The room already has a session in the requested time range.
    #[error("Room '{room}' is already booked by '{existing_id}' in this time range")]
    RoomConflict { room: String, existing_id: String },

    #[error(transparent)]
    Invalid(#[from] TimelineError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    sessions: Vec<Session>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a programme from sessions that must already be conflict-free.
    ///
    /// # Errors
    /// Fails on the first duplicate id or room clash, in input order.
    pub fn from_sessions(
        sessions: impl IntoIterator<Item = Session>,
    ) -> std::result::Result<Self, ProgramError> {
        let mut program = Self::new();
        for session in sessions {
            program.add(session)?;
        }
        Ok(program)
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Add a new session.
    ///
    /// # Errors
    /// `DuplicateId` if a session with the same id exists, `RoomConflict` if the
    /// room is already booked for an overlapping range.
    pub fn add(&mut self, session: Session) -> std::result::Result<(), ProgramError> {
        if self.get(session.id()).is_some() {
            return Err(ProgramError::DuplicateId(session.id().to_string()));
        }
        self.ensure_free(&session)?;

        tracing::debug!(session = session.id(), room = session.room(), "session added");
        self.sessions.push(session);
        Ok(())
    }

    /// Validate a raw record from the event store and add it.
    ///
    /// # Errors
    /// `Invalid` if the record does not describe a valid session, otherwise as
    /// [`add`](Self::add).
    pub fn add_record(&mut self, record: SessionRecord) -> std::result::Result<(), ProgramError> {
        self.add(Session::try_from(record)?)
    }

    /// Replace the session with the same id.
    ///
    /// The replaced version is excluded from the overlap check, so moving a
    /// session within its own former slot always succeeds.
    ///
    /// # Errors
    /// `UnknownSession` if no session has this id, `RoomConflict` if the new
    /// range clashes with another session.
    pub fn update(&mut self, session: Session) -> std::result::Result<(), ProgramError> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id() == session.id())
            .ok_or_else(|| ProgramError::UnknownSession(session.id().to_string()))?;
        self.ensure_free(&session)?;

        tracing::debug!(session = session.id(), room = session.room(), "session updated");
        self.sessions[index] = session;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Session> {
        let index = self.sessions.iter().position(|s| s.id() == id)?;
        tracing::debug!(session = id, "session removed");
        Some(self.sessions.remove(index))
    }

    /// Whether `candidate` could be added or applied without a room clash.
    pub fn fits(&self, candidate: &Session) -> bool {
        find_overlap(candidate, &self.sessions).is_none()
    }

    /// Lay out the current snapshot.
    pub fn layout(&self, config: &LayoutConfig) -> Result<TimelineLayout> {
        TimelineLayout::new(&self.sessions, config)
    }

    fn ensure_free(&self, candidate: &Session) -> std::result::Result<(), ProgramError> {
        match find_overlap(candidate, &self.sessions) {
            Some(existing) => Err(ProgramError::RoomConflict {
                room: candidate.room().to_string(),
                existing_id: existing.id().to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<Session>> for Program {
    type Error = ProgramError;

    fn try_from(sessions: Vec<Session>) -> std::result::Result<Self, ProgramError> {
        Program::from_sessions(sessions)
    }
}
