use crate::{AtomStatus, Cell, CellSet, GameSession, Grid, Position, GRID_SIZE};

fn cell_symbol(cell: Cell, used: bool, reveal_atoms: bool) -> char {
    match cell {
        Cell::Corner => ' ',
        Cell::Border if used => '•',
        Cell::Border => '·',
        Cell::Empty => '.',
        Cell::Atom(AtomStatus::Found) => '●',
        Cell::Atom(AtomStatus::NotFound) if reveal_atoms => 'o',
        Cell::Atom(AtomStatus::NotFound) => '.',
    }
}

/// Draws the grid as a box of characters, with row and column numbers.
///
/// Border cells that have been used are drawn as `•`, the others as `·`.
/// Found atoms are drawn as `●`. Atoms that have not been found are only
/// drawn (as `o`) if `reveal_atoms` is set, otherwise they look like empty
/// cells (`.`).
pub fn visualize_grid(grid: &Grid, border_cells_used: CellSet, reveal_atoms: bool) -> String {
    // Draw the top of the box
    let mut result = String::from("    ");
    for column in 0..GRID_SIZE {
        result += &format!(" {}", column);
    }
    result += "\n   ╭";
    for _ in 0..GRID_SIZE {
        result += "──";
    }
    result += "─╮";

    for row in 0..GRID_SIZE {
        result += &format!("\n{:>2} │", row);
        for column in 0..GRID_SIZE {
            let position = Position::new(row, column);
            // Every in-bounds position has a cell
            let symbol = grid
                .cell(position)
                .map(|cell| cell_symbol(cell, border_cells_used.contains(position), reveal_atoms))
                .unwrap_or(' ');
            result.push(' ');
            result.push(symbol);
        }
        result += " │";
    }

    // Draw the bottom of the box
    result += "\n   ╰";
    for _ in 0..GRID_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}

/// Draws the board of a running game, as the player sees it.
pub fn visualize_session(game: &GameSession, reveal_atoms: bool) -> String {
    visualize_grid(game.grid(), game.border_cells_used(), reveal_atoms)
}
