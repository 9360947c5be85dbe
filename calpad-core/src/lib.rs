//! Core logic for calpad, a single-user month-view calendar.
//!
//! Everything here is a pure function over snapshots except the store and
//! the intent provider:
//! - `date_range`: month grids, navigation and range labels
//! - `grid`: placing events onto the 42 cells of a month
//! - `side_panel`: the month-grouped event list
//! - `draft`: validating form and AI payloads into events
//! - `store`: whole-record event persistence
//! - `intent`: free-text parsing through an injected provider

pub mod calpad;
pub mod color;
pub mod config;
pub mod date_range;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod intent;
pub mod side_panel;
pub mod store;

pub use color::EventColor;
pub use event::Event;
