use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    is_border, trace_ray, CellSet, Grid, IllegalAction, InvalidAtomPlacement, Position, RayOutcome,
};

/// The score at the start of a game.
pub const STARTING_SCORE: i32 = 25;
/// Cost of every distinct border cell used as a ray's entry or exit.
pub const BORDER_CELL_PENALTY: i32 = 1;
/// Cost of every distinct wrong guess.
pub const INCORRECT_GUESS_PENALTY: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Unfinished,
    Won,
    Lost,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Unfinished => write!(f, "unfinished"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// Everything a player can know about the state of a game, apart from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: i32,
    pub atoms_remaining: usize,
    pub status: GameStatus,
}

/// The state of one game, from setup until it is won or lost.
///
/// The score and status are never stored; they are computed from the border
/// cells used, the number of incorrect guesses, and the atoms remaining.
/// Once the game is won or lost, every action is rejected, so neither can
/// change anymore.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    /// Every border cell that served as an entry or exit point.
    border_cells_used: CellSet,
    /// Every coordinate guessed so far, correct or not.
    guesses: BTreeSet<Position>,
    num_incorrect_guesses: u32,
}

impl GameSession {
    pub fn new(atom_positions: &[Position]) -> Result<Self, InvalidAtomPlacement> {
        Ok(Self::from_grid(Grid::new(atom_positions)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            border_cells_used: CellSet::new(),
            guesses: BTreeSet::new(),
            num_incorrect_guesses: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn border_cells_used(&self) -> CellSet {
        self.border_cells_used
    }

    pub fn num_incorrect_guesses(&self) -> u32 {
        self.num_incorrect_guesses
    }

    pub fn atoms_remaining(&self) -> usize {
        self.grid.atoms_remaining()
    }

    pub fn score(&self) -> i32 {
        STARTING_SCORE
            - BORDER_CELL_PENALTY * self.border_cells_used.len() as i32
            - INCORRECT_GUESS_PENALTY * self.num_incorrect_guesses as i32
    }

    pub fn status(&self) -> GameStatus {
        if self.atoms_remaining() == 0 {
            GameStatus::Won
        } else if self.score() <= 0 {
            GameStatus::Lost
        } else {
            GameStatus::Unfinished
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score(),
            atoms_remaining: self.atoms_remaining(),
            status: self.status(),
        }
    }

    /// Shoots a ray from a border cell.
    ///
    /// The entry cell, and the exit cell if there is one, count towards the
    /// border cells used. Using the same cell again is free.
    pub fn shoot_ray(&mut self, entry: Position) -> Result<RayOutcome, IllegalAction> {
        self.ensure_unfinished()?;
        if !is_border(entry) {
            return Err(IllegalAction::InvalidEntryPoint { position: entry });
        }
        let outcome = trace_ray(&self.grid, entry)?;

        self.border_cells_used = self.border_cells_used.insert(entry);
        if let Some(exit) = outcome.exit() {
            self.border_cells_used = self.border_cells_used.insert(exit);
        }
        debug!(%entry, ?outcome, score = self.score(), "Shot ray");
        Ok(outcome)
    }

    /// Guesses that there is an atom at `position`.
    ///
    /// Only the first wrong guess of a coordinate is penalized. Guessing an
    /// atom that has already been found is a wrong, but free, guess.
    pub fn guess_atom(&mut self, position: Position) -> Result<GuessOutcome, IllegalAction> {
        self.ensure_unfinished()?;
        let first_time = self.guesses.insert(position);
        let outcome = if self.grid.mark_found(position) {
            GuessOutcome::Correct
        } else {
            if first_time {
                self.num_incorrect_guesses += 1;
            }
            GuessOutcome::Incorrect
        };
        debug!(%position, ?outcome, first_time, score = self.score(), "Guessed atom");
        Ok(outcome)
    }

    fn ensure_unfinished(&self) -> Result<(), IllegalAction> {
        match self.status() {
            GameStatus::Unfinished => Ok(()),
            status => Err(IllegalAction::GameAlreadyFinished { status }),
        }
    }
}
