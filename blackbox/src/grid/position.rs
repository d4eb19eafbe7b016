use serde::{Deserialize, Serialize};

use crate::{Direction, Turn};

/// A cell coordinate on the grid.
///
/// Rows grow southward and columns grow eastward, so `(0, 0)` is the
/// north-west corner. Coordinates are signed so that stepping off the edge of
/// the grid yields an out-of-bounds position instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    /// The neighboring cell in the given direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.offset();
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// The two cells beside this one, perpendicular to `direction`.
    ///
    /// Returns `(left, right)` as seen by something travelling in `direction`.
    pub fn flanks(self, direction: Direction) -> (Self, Self) {
        (
            self.step(direction.turned(Turn::Left)),
            self.step(direction.turned(Turn::Right)),
        )
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, column): (i8, i8)) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
