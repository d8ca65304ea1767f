//! Waypoint — a named, optionally plotted point on the campus.

use std::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Canonical waypoint identifier (uppercase, underscore-separated).
///
/// Comparison is case-sensitive; callers normalize raw text with
/// [`crate::normalize`] before building or looking up an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(String);

impl WaypointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The id with every `_` separator removed (`ADMIN_BLOCK` → `ADMINBLOCK`).
    pub fn compact(&self) -> String {
        self.0.chars().filter(|c| *c != '_').collect()
    }
}

impl std::fmt::Display for WaypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WaypointId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WaypointId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WaypointId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WaypointId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for WaypointId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WaypointId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Planar campus coordinate. North is the negative-y direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clockwise angle in degrees from north (−y) to the direction of `to`.
    ///
    /// Computed as `atan2(dx, -dy)`, so the result lies in `(-180, 180]`:
    /// north is 0, east (+x) is 90, south (+y) is 180, west (−x) is −90.
    /// The arrow renderer consumes this value as-is.
    pub fn bearing_to(&self, to: &Position) -> f64 {
        let dx = to.x - self.x;
        let dy = to.y - self.y;
        dx.atan2(-dy).to_degrees()
    }
}

/// A waypoint as seen through the campus graph.
///
/// Junctions exist only in the adjacency relation and carry no position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: Option<Position>,
}

impl Waypoint {
    pub fn is_plotted(&self) -> bool {
        self.position.is_some()
    }
}
