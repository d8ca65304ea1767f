//! Route planner — fewest-hop routes over the campus graph.
//!
//! Breadth-first search from the start, expanding neighbors in the order the
//! graph declares them. Among several equally short routes the first one
//! discovered wins, so the result is a deterministic function of neighbor
//! order. Every waypoint is enqueued at most once: O(V + E).
//!
//! Hops are counted, not distance walked. Edges carry no weight.

use std::collections::VecDeque;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::campus::CampusGraph;
use crate::model::{Path, WaypointId};
use crate::normalize::resolve;
use crate::{Error, Result};

/// Shortest path from `start` to `end`, or `None` if there is none.
///
/// `start == end` yields `[start]` for any waypoint the graph knows, plotted
/// or routable. Otherwise `None` is returned when either id has no adjacency
/// entry or when the search exhausts without reaching `end`.
pub fn shortest_path<'a>(graph: &'a CampusGraph, start: &'a str, end: &str) -> Option<Path> {
    if start == end && graph.contains(start) {
        return Some(Path::single(WaypointId::from(start)));
    }
    if !graph.is_routable(start) || !graph.is_routable(end) {
        return None;
    }

    let mut queue: VecDeque<&'a str> = VecDeque::from([start]);
    let mut visited: HashSet<&'a str> = HashSet::from([start]);
    let mut parent: HashMap<&'a str, &'a str> = HashMap::new();
    let mut reached = None;

    while let Some(current) = queue.pop_front() {
        if current == end {
            reached = Some(current);
            break;
        }
        for next in graph.neighbors(current) {
            let next = next.as_str();
            if visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    let Some(mut node) = reached else {
        tracing::debug!(start, end, visited = visited.len(), "no route");
        return None;
    };

    let mut ids = vec![WaypointId::from(node)];
    while let Some(&prev) = parent.get(node) {
        ids.push(WaypointId::from(prev));
        node = prev;
    }
    ids.reverse();

    let path = Path::from_ids(ids)?;
    tracing::debug!(start, end, hops = path.hops(), visited = visited.len(), "route found");
    Some(path)
}

/// Plan a route between two canonical ids, classifying failures.
///
/// The destination is checked before the start. An id the graph does not
/// know at all is [`Error::UnknownWaypoint`]; two known ids with no
/// connecting walk are [`Error::NoPathFound`].
pub fn plan_route(graph: &CampusGraph, start: &WaypointId, end: &WaypointId) -> Result<Path> {
    if !graph.contains(end.as_str()) {
        return Err(Error::UnknownWaypoint(end.clone()));
    }
    if !graph.contains(start.as_str()) {
        return Err(Error::UnknownWaypoint(start.clone()));
    }
    shortest_path(graph, start.as_str(), end.as_str()).ok_or_else(|| Error::NoPathFound {
        from: start.clone(),
        to: end.clone(),
    })
}

/// A route request as it arrives from the outside: two raw place names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Detected current location (e.g. from a scanned code).
    pub from: String,
    /// Destination as typed by the traveler.
    pub to: String,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    /// Resolve both names to canonical ids, destination first.
    pub fn resolve(&self, graph: &CampusGraph) -> Result<(WaypointId, WaypointId)> {
        let to = resolve(graph, &self.to)?;
        let from = resolve(graph, &self.from)?;
        Ok((from, to))
    }

    /// Resolve both names and plan the route between them.
    pub fn plan(&self, graph: &CampusGraph) -> Result<Path> {
        let (from, to) = self.resolve(graph)?;
        plan_route(graph, &from, &to)
    }
}
