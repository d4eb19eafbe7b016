use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grid::{inward_direction, is_interior};
use crate::{CellSet, Deflection, Direction, Grid, IllegalAction, Position, Turn, GRID_SIZE};

/// Upper bound on the number of steps of any ray.
///
/// A ray is in one of `GRID_SIZE * GRID_SIZE * 4` (position, direction) states
/// and is stopped as soon as it repeats one.
pub const MAX_RAY_STEPS: usize = GRID_SIZE as usize * GRID_SIZE as usize * 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayStatus {
    InProgress,
    Hit,
    Exited,
}

/// How a ray ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RayOutcome {
    /// The ray left the grid through this border cell.
    Exit(Position),
    /// The ray was absorbed by an atom and has no exit.
    Hit,
}

impl RayOutcome {
    pub fn exit(self) -> Option<Position> {
        match self {
            RayOutcome::Exit(position) => Some(position),
            RayOutcome::Hit => None,
        }
    }
}

/// A single probe travelling across the grid.
///
/// Each call to [`Ray::step()`] performs one transition of the ray's state
/// machine: it either terminates the ray, changes its heading in place, or
/// advances it by one cell. Once the status is [`RayStatus::Hit`] or
/// [`RayStatus::Exited`], the ray never changes again.
#[derive(Clone, Debug)]
pub struct Ray {
    entry: Position,
    position: Position,
    direction: Direction,
    /// Set exactly once, when the ray terminates.
    outcome: Option<RayOutcome>,
    steps: usize,
    /// The positions the ray has been at, one set per heading (indexed by `Direction as usize`).
    visited: [CellSet; 4],
}

impl Ray {
    /// Creates a ray at a border cell, heading into the grid.
    pub fn new(entry: Position) -> Result<Self, IllegalAction> {
        let direction = inward_direction(entry)
            .ok_or(IllegalAction::InvalidEntryPoint { position: entry })?;
        Ok(Self {
            entry,
            position: entry,
            direction,
            outcome: None,
            steps: 0,
            visited: [CellSet::new(); 4],
        })
    }

    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Only set once the ray has exited.
    pub fn exit(&self) -> Option<Position> {
        self.outcome.and_then(RayOutcome::exit)
    }

    pub fn status(&self) -> RayStatus {
        match self.outcome {
            None => RayStatus::InProgress,
            Some(RayOutcome::Hit) => RayStatus::Hit,
            Some(RayOutcome::Exit(_)) => RayStatus::Exited,
        }
    }

    /// How many transitions have been performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The outcome of a terminated ray, or `None` while it is still travelling.
    pub fn outcome(&self) -> Option<RayOutcome> {
        self.outcome
    }

    /// Performs one transition and returns the new status.
    pub fn step(&mut self, grid: &Grid) -> RayStatus {
        if self.outcome.is_some() {
            return self.status();
        }
        self.steps += 1;

        // A ray that comes back to a state it was already in is going in circles.
        let seen = &mut self.visited[self.direction as usize];
        if seen.contains(self.position) {
            trace!(position = %self.position, direction = ?self.direction, "Ray is trapped");
            return self.terminate(RayOutcome::Hit);
        }
        *seen = seen.insert(self.position);

        let next = self.position.step(self.direction);

        if self.position == self.entry {
            // An atom right at the edge absorbs the ray before it enters
            if grid.atom_at(next) {
                return self.terminate(RayOutcome::Hit);
            }
            // An atom next to the first cell turns the ray back out where it came in
            if grid.deflection(next, self.direction) != Deflection::None {
                return self.terminate(RayOutcome::Exit(self.entry));
            }
        }

        if !is_interior(next) {
            return self.terminate(RayOutcome::Exit(next));
        }

        if grid.atom_at(next) {
            return self.terminate(RayOutcome::Hit);
        }

        // The ray always turns away from a flanking atom.
        match grid.deflection(next, self.direction) {
            Deflection::None => {
                self.position = next;
            }
            Deflection::Left => {
                self.direction = self.direction.turned(Turn::Right);
            }
            Deflection::Right => {
                self.direction = self.direction.turned(Turn::Left);
            }
            Deflection::Double => {
                self.direction = self.direction.reversed();
            }
        }
        trace!(position = %self.position, direction = ?self.direction, "Ray step");
        RayStatus::InProgress
    }

    /// Steps the ray until it terminates.
    pub fn run(mut self, grid: &Grid) -> RayOutcome {
        loop {
            if let Some(outcome) = self.outcome {
                return outcome;
            }
            self.step(grid);
            debug_assert!(self.steps <= MAX_RAY_STEPS);
        }
    }

    fn terminate(&mut self, outcome: RayOutcome) -> RayStatus {
        self.outcome = Some(outcome);
        trace!(entry = %self.entry, ?outcome, steps = self.steps, "Ray terminated");
        self.status()
    }
}

/// Shoots a ray from `entry` and returns where it ends up.
pub fn trace_ray(grid: &Grid, entry: Position) -> Result<RayOutcome, IllegalAction> {
    Ok(Ray::new(entry)?.run(grid))
}
