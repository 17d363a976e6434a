//! WASM bindings for session-timeline.
//!
//! Exposes timeline layout and room conflict detection to a JavaScript
//! rendering layer via `wasm-bindgen`. All complex types are passed as JSON
//! strings: sessions go in as `{id, start, end, room, kind}` objects (with
//! `location` accepted for `room`) and results come back as JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p session-timeline-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/session-timeline-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/session_timeline_wasm.wasm
//! ```

use serde::Serialize;
use session_timeline::{
    find_all_conflicts as audit_conflicts, find_overlap as first_overlap, LayoutConfig, LayoutRect,
    Session, TimelineDescription, TimelineLayout,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LayoutDto {
    timeline: TimelineDescription,
    sessions: Vec<LayoutRect>,
}

#[derive(Debug, Serialize)]
struct OverlapDto {
    id: String,
    room: String,
}

// ---------------------------------------------------------------------------
// Boundary helpers. Errors stay plain strings here so the logic can be unit
// tested off-wasm; the exports convert them to `JsValue`.
// ---------------------------------------------------------------------------

fn parse_sessions(json: &str) -> Result<Vec<Session>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid sessions JSON: {}", e))
}

fn parse_session(json: &str) -> Result<Session, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid session JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn build_layout(sessions: &[Session], pixels_per_hour: Option<f64>) -> Result<TimelineLayout, String> {
    let config = pixels_per_hour
        .map(LayoutConfig::with_pixels_per_hour)
        .unwrap_or_default();
    TimelineLayout::new(sessions, &config).map_err(|e| e.to_string())
}

fn describe(sessions_json: &str, pixels_per_hour: Option<f64>) -> Result<String, String> {
    let sessions = parse_sessions(sessions_json)?;
    to_json(&build_layout(&sessions, pixels_per_hour)?.describe())
}

fn layout(sessions_json: &str, pixels_per_hour: Option<f64>) -> Result<String, String> {
    let sessions = parse_sessions(sessions_json)?;
    let layout = build_layout(&sessions, pixels_per_hour)?;
    to_json(&LayoutDto {
        timeline: layout.describe(),
        sessions: layout.place_all(&sessions),
    })
}

fn overlap(candidate_json: &str, pool_json: &str) -> Result<Option<OverlapDto>, String> {
    let candidate = parse_session(candidate_json)?;
    let pool = parse_sessions(pool_json)?;
    Ok(first_overlap(&candidate, &pool).map(|s| OverlapDto {
        id: s.id().to_string(),
        room: s.room().to_string(),
    }))
}

fn conflicts(sessions_json: &str) -> Result<String, String> {
    let sessions = parse_sessions(sessions_json)?;
    to_json(&audit_conflicts(&sessions))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Describe the timeline grid for a set of sessions.
///
/// Returns a JSON string with `bounds`, `hour_count`, `height_px`,
/// `pixels_per_hour` and one `{index, y_px, time}` entry per hour row.
/// `pixels_per_hour` defaults to 80.
#[wasm_bindgen(js_name = "describeTimeline")]
pub fn describe_timeline(sessions_json: &str, pixels_per_hour: Option<f64>) -> Result<String, JsValue> {
    describe(sessions_json, pixels_per_hour).map_err(|e| JsValue::from_str(&e))
}

/// Describe the timeline and place every session on it.
///
/// Returns a JSON string `{timeline, sessions}` where `sessions` holds one
/// `{session_id, top_px, height_px}` rectangle per input session, in input order.
#[wasm_bindgen(js_name = "layoutSessions")]
pub fn layout_sessions(sessions_json: &str, pixels_per_hour: Option<f64>) -> Result<String, JsValue> {
    layout(sessions_json, pixels_per_hour).map_err(|e| JsValue::from_str(&e))
}

/// Whether a candidate session clashes with any session in the pool.
///
/// A pool entry with the candidate's id is its prior version and is ignored.
#[wasm_bindgen(js_name = "hasOverlap")]
pub fn has_overlap(candidate_json: &str, pool_json: &str) -> Result<bool, JsValue> {
    overlap(candidate_json, pool_json)
        .map(|found| found.is_some())
        .map_err(|e| JsValue::from_str(&e))
}

/// The first session the candidate clashes with, as `{id, room}` JSON, or
/// `undefined` if it fits.
#[wasm_bindgen(js_name = "findOverlap")]
pub fn find_overlap(candidate_json: &str, pool_json: &str) -> Result<Option<String>, JsValue> {
    overlap(candidate_json, pool_json)
        .and_then(|found| found.as_ref().map(to_json).transpose())
        .map_err(|e| JsValue::from_str(&e))
}

/// Every clashing pair in a programme, as a JSON array of
/// `{candidate_id, existing_id, room, overlap_minutes}` objects.
#[wasm_bindgen(js_name = "findAllConflicts")]
pub fn find_all_conflicts(sessions_json: &str) -> Result<String, JsValue> {
    conflicts(sessions_json).map_err(|e| JsValue::from_str(&e))
}
