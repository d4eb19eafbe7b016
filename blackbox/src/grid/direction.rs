use serde::{Deserialize, Serialize};

/// The heading of a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// A 90° turn, relative to the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Turn {
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

// Indexed by `Direction as usize`, then `Turn as usize`.
const TURN_TABLE: [[Direction; 2]; 4] = [
    [Direction::West, Direction::East],
    [Direction::North, Direction::South],
    [Direction::East, Direction::West],
    [Direction::South, Direction::North],
];

// Indexed by `Direction as usize`.
const REVERSE_TABLE: [Direction; 4] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
];

// (row, column) delta of one step, indexed by `Direction as usize`.
const OFFSET_TABLE: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl Direction {
    #[must_use]
    pub fn turned(self, turn: Turn) -> Self {
        TURN_TABLE[self as usize][turn as usize]
    }

    /// The opposite heading.
    #[must_use]
    pub fn reversed(self) -> Self {
        REVERSE_TABLE[self as usize]
    }

    pub fn offset(self) -> (i8, i8) {
        OFFSET_TABLE[self as usize]
    }
}
