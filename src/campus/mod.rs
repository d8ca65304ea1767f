//! # Campus Graph
//!
//! Immutable map of waypoints: which ones are plotted (and where), and which
//! ones are directly walkable from each other.
//!
//! The adjacency relation is used exactly as given. It is expected to be
//! symmetric because it models corridors, but nothing enforces that; a
//! neighbor id with no adjacency entry of its own simply has no neighbors.
//!
//! Lookups are case-sensitive and never fail: unknown ids have no neighbors
//! and no position. The graph does no normalization; text from the outside
//! world goes through [`crate::normalize::resolve`] first.

pub mod data;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::model::{Position, Waypoint, WaypointId};
use crate::{Error, Result};

pub use data::{CampusData, CampusSource, EMBEDDED_CAMPUS};

/// Ordered neighbor list. Most campus nodes have four or fewer corridors.
type Neighbors = SmallVec<[WaypointId; 4]>;

// ============================================================================
// CampusGraph
// ============================================================================

/// Read-only campus graph. Build once, share freely (e.g. behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    positions: HashMap<WaypointId, Position>,
    adjacency: HashMap<WaypointId, Neighbors>,
    /// compact id (no `_`) → canonical id; `None` when two ids collide
    aliases: HashMap<String, Option<WaypointId>>,
}

impl CampusGraph {
    pub fn builder() -> CampusGraphBuilder {
        CampusGraphBuilder::default()
    }

    /// The campus compiled into the crate.
    pub fn embedded() -> Result<Self> {
        CampusSource::Embedded.load()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_data(CampusData::from_json_str(json)?)
    }

    pub fn load(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        CampusSource::File(path.into()).load()
    }

    /// Validate raw tables and build the graph. See [`CampusGraphBuilder::build`].
    pub fn from_data(data: CampusData) -> Result<Self> {
        let mut builder = Self::builder();

        for (id, pos) in data.positions {
            builder = builder.position(id, pos);
        }

        for (id, neighbors) in data.adjacency {
            builder = builder.waypoint(id.clone());
            for neighbor in neighbors {
                builder = builder.arc(id.clone(), neighbor);
            }
        }

        builder.build()
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Neighbors in declared order. Empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[WaypointId] {
        self.adjacency.get(id).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Plotted position, if any. Junctions have none.
    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Known if it has an adjacency entry or a plotted position.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id) || self.positions.contains_key(id)
    }

    /// Known to the adjacency relation (can start or end a search).
    pub fn is_routable(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn waypoint(&self, id: &str) -> Option<Waypoint> {
        let (key, position) = match self.positions.get_key_value(id) {
            Some((key, pos)) => (key, Some(*pos)),
            None => (self.adjacency.get_key_value(id)?.0, None),
        };
        Some(Waypoint { id: key.clone(), position })
    }

    /// Number of distinct known waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.adjacency.len()
            + self.positions.keys().filter(|id| !self.adjacency.contains_key(*id)).count()
    }

    /// Number of directed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }

    /// All known ids, sorted.
    pub fn ids(&self) -> Vec<&WaypointId> {
        let mut ids: Vec<&WaypointId> = self
            .adjacency
            .keys()
            .chain(self.positions.keys().filter(|id| !self.adjacency.contains_key(*id)))
            .collect();
        ids.sort();
        ids
    }

    /// Plotted waypoints in no particular order.
    pub fn plotted(&self) -> impl Iterator<Item = (&WaypointId, Position)> + '_ {
        self.positions.iter().map(|(id, pos)| (id, *pos))
    }

    /// The only waypoint whose id equals `compact` once `_` is removed.
    ///
    /// `None` when no waypoint has that compact form, or more than one does.
    pub fn compact_alias(&self, compact: &str) -> Option<&WaypointId> {
        self.aliases.get(compact)?.as_ref()
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Directed entries `a → b` where `b` does not list `a`, sorted.
    pub fn asymmetric_edges(&self) -> Vec<(WaypointId, WaypointId)> {
        let mut out: Vec<(WaypointId, WaypointId)> = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
            .filter(|(from, to)| !self.neighbors(to.as_str()).contains(*from))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        out.sort();
        out
    }

    /// Neighbor ids that have no adjacency entry of their own, sorted.
    pub fn dangling_neighbors(&self) -> Vec<WaypointId> {
        let dangling: HashSet<&WaypointId> = self
            .adjacency
            .values()
            .flatten()
            .filter(|id| !self.adjacency.contains_key(*id))
            .collect();
        let mut out: Vec<WaypointId> = dangling.into_iter().cloned().collect();
        out.sort();
        out
    }
}

fn check_id(id: &WaypointId) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidCampus("empty waypoint id".into()));
    }
    if id.as_str().chars().any(char::is_whitespace) {
        return Err(Error::InvalidCampus(format!("waypoint id {id:?} contains whitespace")));
    }
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Incremental construction of a [`CampusGraph`].
#[derive(Debug, Default)]
pub struct CampusGraphBuilder {
    positions: HashMap<WaypointId, Position>,
    adjacency: HashMap<WaypointId, Neighbors>,
}

impl CampusGraphBuilder {
    /// Plot a waypoint.
    pub fn position(mut self, id: impl Into<WaypointId>, pos: Position) -> Self {
        self.positions.insert(id.into(), pos);
        self
    }

    /// Register a waypoint in the adjacency relation with no new neighbors.
    pub fn waypoint(mut self, id: impl Into<WaypointId>) -> Self {
        self.adjacency.entry(id.into()).or_default();
        self
    }

    /// Add a directed entry: `to` becomes a neighbor of `from`.
    /// Repeats are ignored; order of first insertion is kept.
    pub fn arc(mut self, from: impl Into<WaypointId>, to: impl Into<WaypointId>) -> Self {
        let to = to.into();
        let neighbors = self.adjacency.entry(from.into()).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
        self
    }

    /// Add a corridor walkable both ways.
    pub fn edge(self, a: impl Into<WaypointId>, b: impl Into<WaypointId>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.arc(a.clone(), b.clone()).arc(b, a)
    }

    /// Validate and freeze the graph.
    ///
    /// Ids must be non-empty and free of whitespace, and coordinates must be
    /// finite. Asymmetric or dangling adjacency is allowed and only logged.
    pub fn build(self) -> Result<CampusGraph> {
        for (id, pos) in &self.positions {
            check_id(id)?;
            if !pos.x.is_finite() || !pos.y.is_finite() {
                return Err(Error::InvalidCampus(format!("waypoint {id} has a non-finite position")));
            }
        }
        for (id, neighbors) in &self.adjacency {
            check_id(id)?;
            for neighbor in neighbors {
                check_id(neighbor)?;
            }
        }

        let mut aliases: HashMap<String, Option<WaypointId>> = HashMap::new();
        for id in self.adjacency.keys().chain(self.positions.keys()) {
            aliases
                .entry(id.compact())
                .and_modify(|slot| {
                    if slot.as_ref() != Some(id) {
                        *slot = None;
                    }
                })
                .or_insert_with(|| Some(id.clone()));
        }

        let graph = CampusGraph {
            positions: self.positions,
            adjacency: self.adjacency,
            aliases,
        };

        tracing::debug!(
            waypoints = graph.waypoint_count(),
            plotted = graph.positions.len(),
            edges = graph.edge_count(),
            "campus graph built"
        );

        let asymmetric = graph.asymmetric_edges();
        if !asymmetric.is_empty() {
            tracing::warn!(count = asymmetric.len(), first = ?asymmetric[0], "adjacency is not symmetric");
        }
        let dangling = graph.dangling_neighbors();
        if !dangling.is_empty() {
            tracing::warn!(?dangling, "neighbors without adjacency entries");
        }

        Ok(graph)
    }
}
