//! Navigation cursor — walks a traveler through a planned path one leg at a
//! time, producing a bearing for each leg and an arrival signal at the end.
//!
//! A leg is only shown if both of its ends are plotted. Legs touching an
//! unplotted junction are skipped by moving the cursor forward; the skip is
//! a bounded loop over the path, never recursion.

use serde::{Deserialize, Serialize};

use crate::campus::CampusGraph;
use crate::model::{Path, Position, WaypointId};

/// What the presentation layer should show next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// Walk from `from` to `to`, heading `bearing_degrees` clockwise from north.
    Step {
        from: WaypointId,
        to: WaypointId,
        bearing_degrees: f64,
        /// 1-based number among the legs that are shown. Skipped legs are
        /// not counted.
        step: usize,
        /// Number of legs that are shown for the whole path.
        total_steps: usize,
    },
    /// The traveler has reached the final waypoint.
    Arrived { at: WaypointId },
}

impl Instruction {
    pub fn is_arrived(&self) -> bool {
        matches!(self, Instruction::Arrived { .. })
    }

    pub fn bearing_degrees(&self) -> Option<f64> {
        match self {
            Instruction::Step { bearing_degrees, .. } => Some(*bearing_degrees),
            Instruction::Arrived { .. } => None,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Step { from, to, .. } => write!(f, "{from} → {to}"),
            Instruction::Arrived { at } => write!(f, "Arrived at {at}"),
        }
    }
}

/// Cursor state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorState {
    /// At least one leg remains.
    Advancing,
    /// Terminal. Further advances change nothing.
    Arrived,
}

/// Progress through one planned path. One per traveler; not shared.
///
/// Positions are captured from the graph at construction, so the cursor
/// holds no borrow and never consults the graph again.
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    path: Path,
    positions: Vec<Option<Position>>,
    index: usize,
    total_steps: usize,
}

impl NavigationCursor {
    /// Start at the first leg of `path`, skipping any leading unplotted legs.
    pub fn new(path: Path, graph: &CampusGraph) -> Self {
        let positions = path.iter().map(|id| graph.position(id.as_str())).collect();
        let mut cursor = Self { path, positions, index: 0, total_steps: 0 };
        cursor.total_steps = cursor.shown_legs(0..cursor.last()).count();
        cursor.skip_unplotted();
        cursor
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// Index of the waypoint the traveler is currently at.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> CursorState {
        if self.index >= self.last() {
            CursorState::Arrived
        } else {
            CursorState::Advancing
        }
    }

    pub fn is_arrived(&self) -> bool {
        self.state() == CursorState::Arrived
    }

    /// Hops between the current waypoint and the end.
    pub fn remaining_hops(&self) -> usize {
        self.last() - self.index
    }

    /// The instruction for the current position.
    pub fn current_instruction(&self) -> Instruction {
        self.steps_from(self.index)
            .next()
            .unwrap_or_else(|| self.arrival())
    }

    /// Move one waypoint forward and return the new instruction.
    ///
    /// A no-op once arrived.
    pub fn advance(&mut self) -> Instruction {
        if self.index < self.last() {
            self.index += 1;
            self.skip_unplotted();
        }
        tracing::trace!(index = self.index, state = ?self.state(), "cursor advanced");
        self.current_instruction()
    }

    /// Every displayable leg from the current position onwards.
    pub fn upcoming(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.steps_from(self.index)
    }

    fn last(&self) -> usize {
        self.path.len() - 1
    }

    fn arrival(&self) -> Instruction {
        Instruction::Arrived { at: self.path.end().clone() }
    }

    fn leg(&self, i: usize) -> Option<(Position, Position)> {
        let from = (*self.positions.get(i)?)?;
        let to = (*self.positions.get(i + 1)?)?;
        Some((from, to))
    }

    /// Legs in `range` whose ends are both plotted.
    fn shown_legs(
        &self,
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = (usize, Position, Position)> + '_ {
        range.filter_map(move |i| self.leg(i).map(|(from, to)| (i, from, to)))
    }

    fn steps_from(&self, start: usize) -> impl Iterator<Item = Instruction> + '_ {
        let shown_before = self.shown_legs(0..start).count();
        self.shown_legs(start..self.last())
            .enumerate()
            .filter_map(move |(n, (i, from_pos, to_pos))| {
                Some(Instruction::Step {
                    from: self.path.get(i)?.clone(),
                    to: self.path.get(i + 1)?.clone(),
                    bearing_degrees: from_pos.bearing_to(&to_pos),
                    step: shown_before + n + 1,
                    total_steps: self.total_steps,
                })
            })
    }

    fn skip_unplotted(&mut self) {
        while self.index < self.last() && self.leg(self.index).is_none() {
            tracing::trace!(
                from = %self.path.as_slice()[self.index],
                to = %self.path.as_slice()[self.index + 1],
                "skipping leg without coordinates"
            );
            self.index += 1;
        }
    }
}
