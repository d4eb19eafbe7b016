mod cell_set;
mod direction;
mod position;

pub use cell_set::*;
pub use direction::*;
pub use position::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::InvalidAtomPlacement;

/// The side length of the grid, including the border.
pub const GRID_SIZE: i8 = 10;

/// The number of cells that can hold an atom.
pub const INTERIOR_CAPACITY: usize = ((GRID_SIZE - 2) * (GRID_SIZE - 2)) as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomStatus {
    NotFound,
    Found,
}

/// A hidden atom. Its position never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Atom {
    position: Position,
    status: AtomStatus,
}

impl Atom {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> AtomStatus {
        self.status
    }
}

/// What a single cell looks like, for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Corner,
    Border,
    Empty,
    Atom(AtomStatus),
}

/// Which flank cells of a path cell hold an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deflection {
    None,
    /// Only the cell on the left of the heading.
    Left,
    /// Only the cell on the right of the heading.
    Right,
    /// Both cells.
    Double,
}

/// The playing field with its atoms.
///
/// The grid is `GRID_SIZE` x `GRID_SIZE` cells. The outermost ring minus the
/// four corners are the border cells, where rays enter and exit. Atoms can
/// only sit in the interior.
#[derive(Clone, Debug)]
pub struct Grid {
    /// In the order they were supplied.
    atoms: Vec<Atom>,
    /// Derived from `atoms`.
    occupied: CellSet,
}

impl Grid {
    /// Creates a new grid with atoms at the given positions.
    pub fn new(atom_positions: &[Position]) -> Result<Self, InvalidAtomPlacement> {
        let mut atoms = Vec::with_capacity(atom_positions.len());
        let mut occupied = CellSet::new();
        for &position in atom_positions {
            if !is_in_bounds(position) {
                return Err(InvalidAtomPlacement::OutOfBounds { position });
            }
            if is_corner(position) {
                return Err(InvalidAtomPlacement::OnCorner { position });
            }
            if is_border(position) {
                return Err(InvalidAtomPlacement::OnBorder { position });
            }
            if occupied.contains(position) {
                return Err(InvalidAtomPlacement::Duplicate { position });
            }
            occupied = occupied.insert(position);
            atoms.push(Atom {
                position,
                status: AtomStatus::NotFound,
            });
        }
        Ok(Self { atoms, occupied })
    }

    /// Creates a grid with `num_atoms` atoms on distinct, randomly chosen interior cells.
    pub fn random(num_atoms: usize, rng: &mut StdRng) -> Result<Self, InvalidAtomPlacement> {
        if num_atoms > INTERIOR_CAPACITY {
            return Err(InvalidAtomPlacement::TooManyAtoms {
                requested: num_atoms,
                capacity: INTERIOR_CAPACITY,
            });
        }
        let interior: Vec<Position> = (1..GRID_SIZE - 1)
            .flat_map(|row| (1..GRID_SIZE - 1).map(move |column| Position::new(row, column)))
            .collect();
        let positions: Vec<Position> = interior
            .choose_multiple(rng, num_atoms)
            .copied()
            .collect();
        Self::new(&positions)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_remaining(&self) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.status == AtomStatus::NotFound)
            .count()
    }

    pub fn atom_at(&self, position: Position) -> bool {
        self.occupied.contains(position)
    }

    /// Marks the atom at `position` as found.
    ///
    /// Returns `false` if there is no atom there, or it has already been found.
    pub(crate) fn mark_found(&mut self, position: Position) -> bool {
        match self
            .atoms
            .iter_mut()
            .find(|atom| atom.position == position && atom.status == AtomStatus::NotFound)
        {
            Some(atom) => {
                atom.status = AtomStatus::Found;
                true
            }
            None => false,
        }
    }

    /// Checks the two cells flanking `cell` for a ray heading in `direction`.
    pub fn deflection(&self, cell: Position, direction: Direction) -> Deflection {
        let (left, right) = cell.flanks(direction);
        match (self.atom_at(left), self.atom_at(right)) {
            (false, false) => Deflection::None,
            (true, false) => Deflection::Left,
            (false, true) => Deflection::Right,
            (true, true) => Deflection::Double,
        }
    }

    /// The contents of a cell, or `None` if it's outside of the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !is_in_bounds(position) {
            None
        } else if is_corner(position) {
            Some(Cell::Corner)
        } else if is_border(position) {
            Some(Cell::Border)
        } else if let Some(atom) = self.atoms.iter().find(|atom| atom.position == position) {
            Some(Cell::Atom(atom.status))
        } else {
            Some(Cell::Empty)
        }
    }
}

pub fn is_in_bounds(position: Position) -> bool {
    (0..GRID_SIZE).contains(&position.row) && (0..GRID_SIZE).contains(&position.column)
}

fn on_edge(coordinate: i8) -> bool {
    coordinate == 0 || coordinate == GRID_SIZE - 1
}

pub fn is_corner(position: Position) -> bool {
    on_edge(position.row) && on_edge(position.column)
}

/// Is this a cell where rays can enter and exit?
pub fn is_border(position: Position) -> bool {
    is_in_bounds(position)
        && (on_edge(position.row) || on_edge(position.column))
        && !is_corner(position)
}

pub fn is_interior(position: Position) -> bool {
    is_in_bounds(position) && !on_edge(position.row) && !on_edge(position.column)
}

/// The heading of a ray shot from a border cell, pointing into the grid.
///
/// Returns `None` for cells that are not border cells.
pub fn inward_direction(entry: Position) -> Option<Direction> {
    if !is_border(entry) {
        return None;
    }
    let direction = if entry.row == 0 {
        Direction::South
    } else if entry.row == GRID_SIZE - 1 {
        Direction::North
    } else if entry.column == 0 {
        Direction::East
    } else {
        Direction::West
    };
    Some(direction)
}

/// All border cells, clockwise starting from the top edge.
pub fn border_cells() -> impl Iterator<Item = Position> {
    let last = GRID_SIZE - 1;
    let top = (1..last).map(|c| Position::new(0, c));
    let right = (1..last).map(move |r| Position::new(r, last));
    let bottom = (1..last).rev().map(move |c| Position::new(last, c));
    let left = (1..last).rev().map(|r| Position::new(r, 0));
    top.chain(right).chain(bottom).chain(left)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::AtomLayout;

    quickcheck! {
        fn every_cell_has_exactly_one_kind(row: i8, column: i8) -> bool {
            let p = Position::new(row % 12, column % 12);
            let kinds = [is_corner(p) && is_in_bounds(p), is_border(p), is_interior(p)];
            let count = kinds.iter().filter(|&&k| k).count();
            if is_in_bounds(p) { count == 1 } else { count == 0 }
        }
    }

    quickcheck! {
        fn arbitrary_layouts_are_accepted(layout: AtomLayout) -> bool {
            let grid = Grid::new(&layout.atoms).unwrap();
            grid.atoms_remaining() == layout.atoms.len()
                && layout.atoms.iter().all(|&p| grid.atom_at(p))
        }
    }

    #[test]
    fn classify_cells() {
        assert!(is_corner(Position::new(0, 0)));
        assert!(is_corner(Position::new(9, 9)));
        assert!(!is_border(Position::new(0, 9)));
        assert!(is_border(Position::new(0, 1)));
        assert!(is_border(Position::new(5, 9)));
        assert!(!is_border(Position::new(5, 10)));
        assert!(is_interior(Position::new(1, 1)));
        assert!(is_interior(Position::new(8, 8)));
        assert!(!is_interior(Position::new(8, 9)));
        assert_eq!(border_cells().count(), 32);
        assert!(border_cells().all(is_border));
    }

    #[test]
    fn inward_directions() {
        assert_eq!(inward_direction(Position::new(0, 4)), Some(Direction::South));
        assert_eq!(inward_direction(Position::new(9, 4)), Some(Direction::North));
        assert_eq!(inward_direction(Position::new(4, 0)), Some(Direction::East));
        assert_eq!(inward_direction(Position::new(4, 9)), Some(Direction::West));
        assert_eq!(inward_direction(Position::new(0, 0)), None);
        assert_eq!(inward_direction(Position::new(4, 4)), None);
    }

    #[test]
    fn rejects_invalid_atoms() {
        assert_eq!(
            Grid::new(&[Position::new(0, 3)]).unwrap_err(),
            InvalidAtomPlacement::OnBorder {
                position: Position::new(0, 3)
            }
        );
        assert_eq!(
            Grid::new(&[Position::new(9, 0)]).unwrap_err(),
            InvalidAtomPlacement::OnCorner {
                position: Position::new(9, 0)
            }
        );
        assert_eq!(
            Grid::new(&[Position::new(3, 12)]).unwrap_err(),
            InvalidAtomPlacement::OutOfBounds {
                position: Position::new(3, 12)
            }
        );
        assert_eq!(
            Grid::new(&[Position::new(3, 3), Position::new(4, 4), Position::new(3, 3)])
                .unwrap_err(),
            InvalidAtomPlacement::Duplicate {
                position: Position::new(3, 3)
            }
        );
    }

    #[test]
    fn deflection_sides() {
        let grid = Grid::new(&[Position::new(2, 2)]).unwrap();
        // Heading south, west is on the right
        assert_eq!(
            grid.deflection(Position::new(2, 3), Direction::South),
            Deflection::Right
        );
        assert_eq!(
            grid.deflection(Position::new(2, 3), Direction::North),
            Deflection::Left
        );
        assert_eq!(
            grid.deflection(Position::new(3, 3), Direction::South),
            Deflection::None
        );
        let grid = Grid::new(&[Position::new(2, 2), Position::new(2, 4)]).unwrap();
        assert_eq!(
            grid.deflection(Position::new(2, 3), Direction::South),
            Deflection::Double
        );
    }

    #[test]
    fn cell_contents() {
        let mut grid = Grid::new(&[Position::new(4, 5)]).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)), Some(Cell::Corner));
        assert_eq!(grid.cell(Position::new(0, 5)), Some(Cell::Border));
        assert_eq!(grid.cell(Position::new(4, 4)), Some(Cell::Empty));
        assert_eq!(
            grid.cell(Position::new(4, 5)),
            Some(Cell::Atom(AtomStatus::NotFound))
        );
        assert_eq!(grid.cell(Position::new(-1, 5)), None);

        assert!(grid.mark_found(Position::new(4, 5)));
        assert!(!grid.mark_found(Position::new(4, 5)));
        assert_eq!(
            grid.cell(Position::new(4, 5)),
            Some(Cell::Atom(AtomStatus::Found))
        );
        assert_eq!(grid.atoms_remaining(), 0);
    }

    #[test]
    fn random_layouts() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(12, &mut rng).unwrap();
        assert_eq!(grid.atoms().len(), 12);
        assert!(grid.atoms().iter().all(|atom| is_interior(atom.position())));

        let full = Grid::random(INTERIOR_CAPACITY, &mut rng).unwrap();
        assert_eq!(full.atoms_remaining(), 64);

        assert_eq!(
            Grid::random(65, &mut rng).unwrap_err(),
            InvalidAtomPlacement::TooManyAtoms {
                requested: 65,
                capacity: 64
            }
        );
    }
}
