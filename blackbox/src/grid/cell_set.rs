use crate::{Position, GRID_SIZE};

/// A compact set of grid cells.
///
/// Every cell of the `GRID_SIZE` x `GRID_SIZE` grid gets one bit, in
/// row-major order. Positions outside the grid are never members.
/// Also implements [`IntoIterator`], yielding positions in row-major order.
///
/// Note that its "mutating" methods return a new object instead of really mutating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

fn bit_index(position: Position) -> Option<u32> {
    let Position { row, column } = position;
    if (0..GRID_SIZE).contains(&row) && (0..GRID_SIZE).contains(&column) {
        Some(row as u32 * GRID_SIZE as u32 + column as u32)
    } else {
        None
    }
}

impl CellSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, position: Position) -> bool {
        match bit_index(position) {
            Some(idx) => self.bits & (1u128 << idx) != 0,
            None => false,
        }
    }

    /// Adds a cell. Positions outside the grid are ignored.
    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, position: Position) -> Self {
        match bit_index(position) {
            Some(idx) => Self {
                bits: self.bits | (1u128 << idx),
            },
            None => self,
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, position: Position) -> Self {
        match bit_index(position) {
            Some(idx) => Self {
                bits: self.bits & !(1u128 << idx),
            },
            None => self,
        }
    }
}

impl std::ops::BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl std::ops::BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        iter.into_iter()
            .fold(CellSet::new(), |set, position| set.insert(position))
    }
}

impl IntoIterator for CellSet {
    type Item = Position;

    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}

pub struct CellSetIter {
    bits: u128,
}

impl Iterator for CellSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // This cast is safe, as trailing_zeros is below 100 for a nonzero set
            let idx = self.bits.trailing_zeros() as i8;
            // Clear the flag corresponding to this cell
            self.bits ^= 1u128 << idx;
            Some(Position::new(idx / GRID_SIZE, idx % GRID_SIZE))
        }
    }
}
