//! Tests for timeline window derivation.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use session_timeline::{
    compute_bounds, compute_bounds_at, floor_to_hour, Instant, Session, SessionKind,
};

/// Helper to build an instant on 2026-03-01.
fn at(hour: u32, min: u32, sec: u32) -> Instant {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

fn session(id: &str, start: Instant, end: Instant) -> Session {
    Session::new(id, start, end, "Main hall", SessionKind::Lecture).unwrap()
}

#[test]
fn start_floors_and_end_ceils() {
    let sessions = vec![
        session("a", at(9, 15, 0), at(10, 45, 0)),
        session("b", at(13, 0, 0), at(13, 40, 0)),
    ];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.start, at(9, 0, 0));
    assert_eq!(bounds.end, at(14, 0, 0));
    assert_eq!(bounds.duration_hours, 5.0);
}

#[test]
fn end_on_the_hour_is_not_pushed_forward() {
    let sessions = vec![session("a", at(9, 0, 0), at(11, 0, 0))];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.start, at(9, 0, 0));
    assert_eq!(bounds.end, at(11, 0, 0));
    assert_eq!(bounds.duration_hours, 2.0);
}

#[test]
fn seconds_alone_trigger_the_ceiling() {
    let sessions = vec![session("a", at(9, 0, 0), at(11, 0, 30))];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.end, at(12, 0, 0));
}

#[test]
fn short_session_inside_one_hour_gets_a_one_hour_window() {
    let sessions = vec![session("a", at(9, 10, 0), at(9, 20, 0))];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.start, at(9, 0, 0));
    assert_eq!(bounds.end, at(10, 0, 0));
    assert_eq!(bounds.duration_hours, 1.0);
}

#[test]
fn latest_end_need_not_belong_to_latest_start() {
    // The long opening session ends after the last session starts and ends.
    let sessions = vec![
        session("long", at(8, 30, 0), at(17, 5, 0)),
        session("late", at(15, 0, 0), at(16, 0, 0)),
    ];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.start, at(8, 0, 0));
    assert_eq!(bounds.end, at(18, 0, 0));
}

#[test]
fn order_does_not_matter() {
    let mut sessions = vec![
        session("a", at(11, 5, 0), at(12, 0, 0)),
        session("b", at(9, 45, 0), at(10, 15, 0)),
        session("c", at(14, 0, 0), at(15, 20, 0)),
    ];

    let forward = compute_bounds(&sessions);
    sessions.reverse();
    let backward = compute_bounds(&sessions);

    assert_eq!(forward, backward);
}

#[test]
fn empty_set_gives_one_hour_window_at_current_hour() {
    let now = at(14, 37, 12);

    let bounds = compute_bounds_at(&[], now);

    assert_eq!(bounds.start, at(14, 0, 0));
    assert_eq!(bounds.end, at(15, 0, 0));
    assert_eq!(bounds.duration_hours, 1.0);
}

#[test]
fn empty_set_at_the_last_representable_hour_does_not_overflow() {
    let bounds = compute_bounds_at(&[], NaiveDateTime::MAX);

    assert_eq!(bounds.duration_hours, 1.0);
    assert_eq!(bounds.end, floor_to_hour(NaiveDateTime::MAX));
    assert_eq!(bounds.end - bounds.start, TimeDelta::hours(1));
}

#[test]
fn empty_set_with_local_clock_is_hour_aligned() {
    let bounds = compute_bounds(&[]);

    assert_eq!(bounds.duration_hours, 1.0);
    assert_eq!(bounds.end - bounds.start, TimeDelta::hours(1));
    assert_eq!(bounds.start.minute(), 0);
    assert_eq!(bounds.start.second(), 0);
    assert_eq!(bounds.start.nanosecond(), 0);
}

#[test]
fn now_is_ignored_for_non_empty_sets() {
    let sessions = vec![session("a", at(9, 15, 0), at(10, 45, 0))];

    let bounds = compute_bounds_at(&sessions, at(20, 0, 0));

    assert_eq!(bounds.start, at(9, 0, 0));
    assert_eq!(bounds.end, at(11, 0, 0));
}

#[test]
fn session_running_past_midnight_extends_into_next_day() {
    let next_day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let sessions = vec![session(
        "party",
        at(22, 30, 0),
        next_day.and_hms_opt(1, 15, 0).unwrap(),
    )];

    let bounds = compute_bounds(&sessions);

    assert_eq!(bounds.start, at(22, 0, 0));
    assert_eq!(bounds.end, next_day.and_hms_opt(2, 0, 0).unwrap());
    assert_eq!(bounds.duration_hours, 4.0);
}

#[test]
fn contains_is_half_open() {
    let sessions = vec![session("a", at(9, 0, 0), at(10, 0, 0))];
    let bounds = compute_bounds(&sessions);

    assert!(bounds.contains(at(9, 0, 0)));
    assert!(bounds.contains(at(9, 59, 59)));
    assert!(!bounds.contains(at(10, 0, 0)));
}

#[test]
fn repeated_computation_is_identical() {
    let sessions = vec![
        session("a", at(9, 15, 0), at(10, 45, 0)),
        session("b", at(13, 0, 0), at(13, 40, 0)),
    ];

    let first = compute_bounds(&sessions);
    let second = compute_bounds(&sessions);

    assert_eq!(first, second);
    assert_eq!(first.duration_hours.to_bits(), second.duration_hours.to_bits());
}
