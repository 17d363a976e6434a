//! # session-timeline
//!
//! Hour-aligned timeline layout and room-conflict detection for event day
//! schedules.
//!
//! Given the sessions of one event, the crate derives a visible window that
//! starts and ends on whole hours, maps every session onto that window as a
//! pixel rectangle, and detects sessions that would occupy the same room at
//! the same time. Everything here is a pure function over an immutable
//! snapshot: callers recompute on every change to their session collection.
//!
//! ## Quick start
//!
//! ```rust
//! use session_timeline::{LayoutConfig, Session, SessionKind, TimelineLayout};
//!
//! let sessions = vec![
//!     Session::parse("keynote", "2026-03-01T09:15:00", "2026-03-01T10:45:00", "Main hall", SessionKind::Lecture).unwrap(),
//!     Session::parse("drinks", "2026-03-01T13:00:00", "2026-03-01T13:40:00", "Foyer", SessionKind::Drinking).unwrap(),
//! ];
//!
//! let layout = TimelineLayout::new(&sessions, &LayoutConfig::default()).unwrap();
//! let timeline = layout.describe();
//! assert_eq!(timeline.hour_count, 5);
//!
//! let rect = layout.place(&sessions[0]);
//! assert_eq!(rect.top_px, 20.0);
//! assert_eq!(rect.height_px, 120.0);
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] — string or typed timestamps → canonical [`Instant`]s
//! - [`session`] — the validated [`Session`] record
//! - [`bounds`] — hour-aligned [`TimelineBounds`] from a session set
//! - [`pixel`] — [`PixelMapper`]: hours and sessions → pixel offsets
//! - [`overlap`] — same-room time overlap detection
//! - [`layout`] — [`TimelineLayout`], the facade a rendering layer talks to
//! - [`program`] — in-memory program that rejects conflicting edits
//! - [`config`] — [`LayoutConfig`]
//! - [`error`] — Error types

pub mod bounds;
pub mod config;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod overlap;
pub mod pixel;
pub mod program;
pub mod session;

pub use bounds::{ceil_to_hour, compute_bounds, compute_bounds_at, floor_to_hour, TimelineBounds};
pub use config::LayoutConfig;
pub use error::TimelineError;
pub use layout::{HourMark, TimelineDescription, TimelineLayout};
pub use normalize::{normalize, Instant, RawTime};
pub use overlap::{find_all_conflicts, find_overlap, has_overlap, Conflict};
pub use pixel::{LayoutRect, PixelMapper};
pub use program::{Program, ProgramError};
pub use session::{Session, SessionKind, SessionRecord};
