//! Error types for session-timeline operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A timestamp string that is not a valid calendar timestamp.
    #[error("Invalid timestamp '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A session that breaks the `start < end` invariant or is otherwise unusable.
    #[error("Invalid session '{id}': {reason}")]
    InvalidSession { id: String, reason: String },

    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    /// A caller-supplied window that is empty, inverted or not hour-aligned.
    #[error("Invalid timeline bounds: {0}")]
    InvalidBounds(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
