use quickcheck::Arbitrary;

use crate::{border_cells, CellSet, Position, GRID_SIZE};

/// A valid set of atom positions, in random order.
#[derive(Clone, Debug)]
pub struct AtomLayout {
    // Distinct interior cells
    pub atoms: Vec<Position>,
}

/// A cell from which a ray may be shot.
#[derive(Clone, Copy, Debug)]
pub struct EntryPoint(pub Position);

fn arbitrary_interior_cell(g: &mut quickcheck::Gen) -> Position {
    let interior_size = (GRID_SIZE - 2) as u8;
    let row = (u8::arbitrary(g) % interior_size) as i8 + 1;
    let column = (u8::arbitrary(g) % interior_size) as i8 + 1;
    Position::new(row, column)
}

impl Arbitrary for AtomLayout {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly sparse layouts, which make for long ray paths, with the
        // occasional crowded one
        let num_atoms = if bool::arbitrary(g) {
            usize::arbitrary(g) % 6
        } else {
            usize::arbitrary(g) % 30
        };
        let mut taken = CellSet::new();
        let mut atoms = Vec::with_capacity(num_atoms);
        for _ in 0..num_atoms {
            let position = arbitrary_interior_cell(g);
            if !taken.contains(position) {
                taken = taken.insert(position);
                atoms.push(position);
            }
        }
        AtomLayout { atoms }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Any subset of a valid layout is valid
        Box::new(
            self.atoms
                .shrink()
                .map(|atoms| AtomLayout { atoms }),
        )
    }
}

impl Arbitrary for EntryPoint {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let cells: Vec<Position> = border_cells().collect();
        EntryPoint(*g.choose(&cells).unwrap())
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Position::new(
            (u8::arbitrary(g) % GRID_SIZE as u8) as i8,
            (u8::arbitrary(g) % GRID_SIZE as u8) as i8,
        )
    }
}
