//! Boundary normalization of raw place names.
//!
//! Everything that turns outside text into a [`WaypointId`] lives here; the
//! campus graph itself only compares ids.

use crate::campus::CampusGraph;
use crate::model::WaypointId;
use crate::{Error, Result};

/// Normalize free text into a waypoint id.
///
/// Leading and trailing whitespace is dropped, every interior whitespace run
/// becomes a single `_`, and the result is uppercased. Empty or
/// whitespace-only input yields the empty id, which no graph knows.
///
/// This is purely syntactic: `"b 8"` becomes `B_8`, not `B8`. Use
/// [`resolve`] to check the result against the real id set.
pub fn normalize(raw: &str) -> WaypointId {
    let mut out = String::with_capacity(raw.len());
    for (i, word) in raw.split_whitespace().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.extend(word.chars().flat_map(char::to_uppercase));
    }
    WaypointId::from(out)
}

/// Normalize raw text and check it against the graph's id set.
///
/// The exact normalized id wins. Otherwise the id is compared with `_`
/// stripped, so `"b 8"` (normalized `B_8`) resolves to `B8`. The fallback
/// only applies when exactly one waypoint has that compact form.
pub fn resolve(graph: &CampusGraph, raw: &str) -> Result<WaypointId> {
    let id = normalize(raw);
    if graph.contains(id.as_str()) {
        return Ok(id);
    }
    if !id.is_empty() {
        if let Some(canonical) = graph.compact_alias(&id.compact()) {
            tracing::debug!(input = raw, %canonical, "resolved waypoint through compact alias");
            return Ok(canonical.clone());
        }
    }
    Err(Error::UnknownWaypoint(id))
}
