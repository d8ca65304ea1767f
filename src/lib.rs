//! # campus-nav — Campus Wayfinding Engine
//!
//! Guides a traveler across a fixed campus: fewest-hop route planning over a
//! waypoint graph, then a cursor that turns the route into directional cues.
//!
//! ## Design Principles
//!
//! 1. **Immutable graph**: `CampusGraph` is built once and shared read-only
//! 2. **Normalize at the boundary**: raw text becomes a `WaypointId` exactly once
//! 3. **Typed failures**: unknown places and unreachable places never conflate
//! 4. **Owned progress**: each traveler owns a `NavigationCursor`
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_nav::{CampusGraph, NavigationCursor, RouteRequest};
//!
//! # fn example() -> campus_nav::Result<()> {
//! let graph = CampusGraph::embedded()?;
//! let path = RouteRequest::new("entry", "admin block").plan(&graph)?;
//!
//! let mut cursor = NavigationCursor::new(path, &graph);
//! while !cursor.is_arrived() {
//!     println!("{}", cursor.current_instruction());
//!     cursor.advance();
//! }
//! println!("{}", cursor.current_instruction());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Normalize | `normalize` | raw text → `WaypointId` |
//! | Graph | `campus` | positions + ordered adjacency |
//! | Plan | `planner` | breadth-first shortest path |
//! | Navigate | `navigation` | leg-by-leg bearings, arrival |
//! | Session | `session` | one traveler's location and cursor |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod normalize;
pub mod campus;
pub mod planner;
pub mod navigation;
pub mod session;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Path, Position, Waypoint, WaypointId};
pub use normalize::{normalize, resolve};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use campus::{CampusData, CampusGraph, CampusGraphBuilder, CampusSource};
pub use planner::{plan_route, shortest_path, RouteRequest};
pub use navigation::{CursorState, Instruction, NavigationCursor};
pub use session::{NavigationSession, SessionView};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown place: '{0}'")]
    UnknownWaypoint(WaypointId),

    #[error("Destination unreachable: no route from {from} to {to}")]
    NoPathFound { from: WaypointId, to: WaypointId },

    #[error("Start location not detected")]
    LocationUnknown,

    #[error("Invalid campus data: {0}")]
    InvalidCampus(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for conditions the traveler can fix by trying again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownWaypoint(_) | Error::NoPathFound { .. } | Error::LocationUnknown
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
