//! Tests for the in-memory programme and its edit checks.

use chrono::NaiveDate;
use session_timeline::{
    LayoutConfig, Program, ProgramError, RawTime, Session, SessionKind, SessionRecord,
    TimelineError,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn session(id: &str, room: &str, start: (u32, u32), end: (u32, u32)) -> Session {
    let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    Session::new(
        id,
        day.and_hms_opt(start.0, start.1, 0).unwrap(),
        day.and_hms_opt(end.0, end.1, 0).unwrap(),
        room,
        SessionKind::Lecture,
    )
    .unwrap()
}

fn program() -> Program {
    Program::from_sessions([
        session("opening", "Zaal 1", (9, 0), (10, 0)),
        session("workshop", "Zaal 2", (9, 0), (11, 0)),
        session("lunch", "Foyer", (12, 0), (13, 0)),
    ])
    .unwrap()
}

// ── add ─────────────────────────────────────────────────────────────────────

#[test]
fn add_accepts_adjacent_session() {
    let mut program = program();

    program
        .add(session("talk", "Zaal 1", (10, 0), (11, 0)))
        .unwrap();

    assert_eq!(program.len(), 4);
    assert!(program.get("talk").is_some());
}

#[test]
fn add_rejects_room_clash_and_leaves_programme_untouched() {
    let mut program = program();
    let before = program.clone();

    let err = program
        .add(session("talk", "Zaal 1", (9, 30), (10, 30)))
        .unwrap_err();

    assert_eq!(
        err,
        ProgramError::RoomConflict {
            room: "Zaal 1".to_string(),
            existing_id: "opening".to_string(),
        }
    );
    assert_eq!(program, before);
}

#[test]
fn add_rejects_duplicate_id() {
    let mut program = program();

    let err = program
        .add(session("opening", "Zaal 3", (15, 0), (16, 0)))
        .unwrap_err();

    assert_eq!(err, ProgramError::DuplicateId("opening".to_string()));
}

#[test]
fn add_record_validates_before_adding() {
    let mut program = Program::new();
    let record = SessionRecord {
        id: "bad".to_string(),
        start: RawTime::from("2026-03-01T10:00:00"),
        end: RawTime::from("2026-03-01T10:00:00"),
        room: "Zaal 1".to_string(),
        kind: SessionKind::Break,
    };

    let err = program.add_record(record).unwrap_err();

    assert!(matches!(
        err,
        ProgramError::Invalid(TimelineError::InvalidSession { .. })
    ));
    assert!(program.is_empty());
}

#[test]
fn from_sessions_stops_at_first_clash() {
    let err = Program::from_sessions([
        session("a", "X", (9, 0), (10, 0)),
        session("b", "X", (9, 59), (10, 30)),
    ])
    .unwrap_err();

    assert!(matches!(err, ProgramError::RoomConflict { ref existing_id, .. } if existing_id == "a"));
}

// ── update ──────────────────────────────────────────────────────────────────

#[test]
fn update_within_own_slot_succeeds() {
    let mut program = program();
    let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let shifted = program
        .get("opening")
        .unwrap()
        .rescheduled(
            day.and_hms_opt(9, 15, 0).unwrap(),
            day.and_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();

    program.update(shifted.clone()).unwrap();

    assert_eq!(program.get("opening"), Some(&shifted));
    assert_eq!(program.len(), 3);
}

#[test]
fn update_into_occupied_room_is_rejected() {
    let mut program = program();
    let moved = program.get("opening").unwrap().moved_to("Zaal 2");

    let err = program.update(moved).unwrap_err();

    assert!(matches!(err, ProgramError::RoomConflict { ref existing_id, .. } if existing_id == "workshop"));
    assert_eq!(program.get("opening").unwrap().room(), "Zaal 1");
}

#[test]
fn update_of_unknown_session_fails() {
    let mut program = program();

    let err = program
        .update(session("ghost", "Zaal 9", (9, 0), (10, 0)))
        .unwrap_err();

    assert_eq!(err, ProgramError::UnknownSession("ghost".to_string()));
}

// ── remove / fits / layout ──────────────────────────────────────────────────

#[test]
fn remove_frees_the_slot() {
    let mut program = program();
    let clash = session("talk", "Zaal 1", (9, 0), (10, 0));
    assert!(!program.fits(&clash));

    let removed = program.remove("opening").unwrap();

    assert_eq!(removed.id(), "opening");
    assert!(program.fits(&clash));
    assert!(program.remove("opening").is_none());
}

#[test]
fn layout_covers_current_snapshot() {
    let program = program();

    let layout = program.layout(&LayoutConfig::default()).unwrap();
    let description = layout.describe();

    assert_eq!(description.hour_count, 4); // 09:00–13:00
    let rect = layout.place(program.get("lunch").unwrap());
    assert_eq!(rect.top_px, 240.0);
    assert_eq!(rect.height_px, 80.0);
}
