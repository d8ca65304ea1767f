//! Campus data documents and where to load them from.
//!
//! The on-disk format is a single JSON object:
//!
//! ```text
//! {
//!   "positions": { "B8": { "x": 0, "y": 0 }, ... },
//!   "adjacency": { "R3": ["B8", "R1", ...], ... }
//! }
//! ```
//!
//! Neighbor lists keep file order; that order decides ties between
//! equally short routes.

use std::path::PathBuf;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Position, WaypointId};
use crate::Result;
use super::CampusGraph;

/// The campus shipped with the crate.
pub const EMBEDDED_CAMPUS: &str = include_str!("../../data/campus.json");

/// Raw campus tables as read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusData {
    /// Plotted waypoints. Junctions are usually absent here.
    #[serde(default)]
    pub positions: HashMap<WaypointId, Position>,
    /// Directed neighbor lists, taken exactly as written.
    #[serde(default)]
    pub adjacency: HashMap<WaypointId, Vec<WaypointId>>,
}

impl CampusData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where the campus graph comes from.
#[derive(Debug, Clone, Default)]
pub enum CampusSource {
    /// The campus compiled into the crate.
    #[default]
    Embedded,
    /// A JSON campus document on disk.
    File(PathBuf),
    /// An in-memory JSON campus document.
    Json(String),
}

impl CampusSource {
    /// Read and validate the campus. Call once at startup and share the result.
    pub fn load(&self) -> Result<CampusGraph> {
        match self {
            CampusSource::Embedded => CampusGraph::from_json_str(EMBEDDED_CAMPUS),
            CampusSource::File(path) => {
                tracing::debug!(path = %path.display(), "loading campus file");
                let json = std::fs::read_to_string(path)?;
                CampusGraph::from_json_str(&json)
            }
            CampusSource::Json(json) => CampusGraph::from_json_str(json),
        }
    }
}
