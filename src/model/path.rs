//! Path — a non-empty walk of waypoint ids from start to end.

use serde::{Deserialize, Serialize};
use super::WaypointId;

/// An ordered walk: `ids[0]` is the start, the last id is the end.
///
/// Never empty. A path whose start equals its end has exactly one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WaypointId>", into = "Vec<WaypointId>")]
pub struct Path {
    ids: Vec<WaypointId>,
}

impl Path {
    pub fn single(id: WaypointId) -> Self {
        Self { ids: vec![id] }
    }

    /// Build a path from an ordered id list. Returns `None` for an empty list.
    pub fn from_ids(ids: impl IntoIterator<Item = WaypointId>) -> Option<Self> {
        let ids: Vec<WaypointId> = ids.into_iter().collect();
        if ids.is_empty() { None } else { Some(Self { ids }) }
    }

    /// Number of waypoints, including both ends.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.ids.len() - 1
    }

    pub fn start(&self) -> &WaypointId {
        &self.ids[0]
    }

    pub fn end(&self) -> &WaypointId {
        &self.ids[self.ids.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&WaypointId> {
        self.ids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WaypointId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[WaypointId] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|w| w.as_str() == id)
    }

    /// True if no waypoint appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = hashbrown::HashSet::with_capacity(self.ids.len());
        self.ids.iter().all(|id| seen.insert(id))
    }
}

impl TryFrom<Vec<WaypointId>> for Path {
    type Error = String;

    fn try_from(ids: Vec<WaypointId>) -> Result<Self, Self::Error> {
        Self::from_ids(ids).ok_or_else(|| "path must contain at least one waypoint".to_string())
    }
}

impl From<Path> for Vec<WaypointId> {
    fn from(path: Path) -> Self {
        path.ids
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a WaypointId;
    type IntoIter = std::slice::Iter<'a, WaypointId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
