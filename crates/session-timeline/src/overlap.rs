//! Detect sessions that would occupy the same room at the same time.
//!
//! Time ranges are half-open: a session ending at 10:00 and another starting at
//! 10:00 in the same room do NOT conflict. Pool entries sharing the candidate's
//! id are treated as the candidate's own prior version and skipped, so that
//! checking an edit never reports a clash with itself.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// A detected room clash between two sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub candidate_id: String,
    pub existing_id: String,
    pub room: String,
    /// Length of the shared range, rounded up to whole minutes.
    pub overlap_minutes: i64,
}

impl Conflict {
    fn between(candidate: &Session, existing: &Session) -> Self {
        let overlap_start = candidate.start().max(existing.start());
        let overlap_end = candidate.end().min(existing.end());
        Self {
            candidate_id: candidate.id().to_string(),
            existing_id: existing.id().to_string(),
            room: candidate.room().to_string(),
            overlap_minutes: minutes_rounded_up(overlap_end - overlap_start),
        }
    }
}

fn minutes_rounded_up(delta: TimeDelta) -> i64 {
    let whole = delta.num_minutes();
    if delta > TimeDelta::minutes(whole) {
        whole + 1
    } else {
        whole
    }
}

/// Same room and `a.start < b.end && a.end > b.start`.
fn shares_room_and_time(a: &Session, b: &Session) -> bool {
    a.room() == b.room() && a.start() < b.end() && a.end() > b.start()
}

/// A clash with anything but the candidate's own prior version.
fn clashes(candidate: &Session, other: &Session) -> bool {
    other.id() != candidate.id() && shares_room_and_time(candidate, other)
}

/// Whether `candidate` conflicts with any session in `pool`.
pub fn has_overlap(candidate: &Session, pool: &[Session]) -> bool {
    find_overlap(candidate, pool).is_some()
}

/// The first session in `pool` that `candidate` conflicts with, in pool order.
pub fn find_overlap<'a>(candidate: &Session, pool: &'a [Session]) -> Option<&'a Session> {
    let found = pool.iter().find(|other| clashes(candidate, other));
    if let Some(other) = found {
        tracing::debug!(
            candidate = candidate.id(),
            existing = other.id(),
            room = candidate.room(),
            "room conflict detected"
        );
    }
    found
}

/// Find every pair of sessions in a programme that clash.
///
/// Each unordered pair is reported once, with the earlier-listed session as the
/// candidate. Results follow input order. Ids play no part here: two records
/// that share an id but clash are still reported.
pub fn find_all_conflicts(sessions: &[Session]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if shares_room_and_time(a, b) {
                conflicts.push(Conflict::between(a, b));
            }
        }
    }

    tracing::debug!(
        sessions = sessions.len(),
        conflicts = conflicts.len(),
        "audited programme for room conflicts"
    );
    conflicts
}
