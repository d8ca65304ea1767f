//! Per-traveler navigation session.
//!
//! Holds what one traveler needs between events: where they were last
//! detected, and the cursor of the route they are walking (if any). The
//! campus graph is shared read-only; every session owns its own cursor.

use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::campus::CampusGraph;
use crate::model::WaypointId;
use crate::navigation::{Instruction, NavigationCursor};
use crate::normalize::resolve;
use crate::planner::plan_route;
use crate::{Error, Result};

/// Which phase the traveler is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionView {
    /// Choosing a destination.
    Search,
    /// Following a route.
    Navigating,
}

/// One traveler's session.
#[derive(Debug, Clone)]
pub struct NavigationSession {
    graph: Arc<CampusGraph>,
    location: Option<WaypointId>,
    cursor: Option<NavigationCursor>,
}

impl NavigationSession {
    pub fn new(graph: Arc<CampusGraph>) -> Self {
        Self { graph, location: None, cursor: None }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    /// Last detected location, if any.
    pub fn location(&self) -> Option<&WaypointId> {
        self.location.as_ref()
    }

    /// Record the traveler's detected location from raw text.
    ///
    /// An unknown place is rejected and the previous location is kept.
    pub fn locate(&mut self, raw: &str) -> Result<WaypointId> {
        let id = resolve(&self.graph, raw)?;
        tracing::debug!(location = %id, "traveler located");
        self.location = Some(id.clone());
        Ok(id)
    }

    /// Plan a route to `destination` and start walking it.
    ///
    /// Checked in order: the destination must be a known place, the
    /// location must have been detected, and a route must exist. On any
    /// failure the session is left as it was.
    pub fn start(&mut self, destination: &str) -> Result<Instruction> {
        let to = resolve(&self.graph, destination)?;
        let from = self.location.clone().ok_or(Error::LocationUnknown)?;
        let path = plan_route(&self.graph, &from, &to)?;

        tracing::info!(%from, %to, hops = path.hops(), "navigation started");
        let cursor = NavigationCursor::new(path, &self.graph);
        let instruction = cursor.current_instruction();
        self.cursor = Some(cursor);
        Ok(instruction)
    }

    /// Move to the next leg. `None` outside navigation.
    pub fn advance(&mut self) -> Option<Instruction> {
        let instruction = self.cursor.as_mut()?.advance();
        if let Instruction::Arrived { at } = &instruction {
            tracing::debug!(%at, "traveler arrived");
        }
        Some(instruction)
    }

    /// The current instruction, without moving. `None` outside navigation.
    pub fn instruction(&self) -> Option<Instruction> {
        self.cursor.as_ref().map(NavigationCursor::current_instruction)
    }

    pub fn cursor(&self) -> Option<&NavigationCursor> {
        self.cursor.as_ref()
    }

    pub fn view(&self) -> SessionView {
        if self.cursor.is_some() { SessionView::Navigating } else { SessionView::Search }
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Abandon the current route. The detected location is kept.
    pub fn return_to_search(&mut self) {
        if self.cursor.take().is_some() {
            tracing::debug!("navigation abandoned");
        }
    }
}
