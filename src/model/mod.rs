//! # Campus Model
//!
//! Plain DTOs shared by the graph, planner, and cursor.
//! This module is pure data — no I/O, no state.

pub mod waypoint;
pub mod path;

pub use waypoint::{Waypoint, WaypointId, Position};
pub use path::Path;
