use crate::{GameStatus, Position};

/// The error type for [`Grid::new()`](crate::Grid::new), i.e. for setting up the atoms.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidAtomPlacement {
    OutOfBounds { position: Position },
    OnBorder { position: Position },
    OnCorner { position: Position },
    Duplicate { position: Position },
    TooManyAtoms { requested: usize, capacity: usize },
}

impl std::error::Error for InvalidAtomPlacement {}

impl std::fmt::Display for InvalidAtomPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAtomPlacement::OutOfBounds { position } =>
                write!(f, "Atom at {} lies outside of the grid", position),
            InvalidAtomPlacement::OnBorder { position } =>
                write!(f, "Atom at {} lies on a border cell, but atoms must be in the interior", position),
            InvalidAtomPlacement::OnCorner { position } =>
                write!(f, "Atom at {} lies on a corner cell, but atoms must be in the interior", position),
            InvalidAtomPlacement::Duplicate { position } =>
                write!(f, "More than one atom was placed at {}", position),
            InvalidAtomPlacement::TooManyAtoms { requested, capacity } =>
                write!(f, "Requested {} atoms, but the interior only has room for {}", requested, capacity),
        }
    }
}

/// The error type for one action on a [`GameSession`](crate::GameSession).
///
/// When an action fails, the session is left untouched.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalAction {
    InvalidEntryPoint { position: Position },
    GameAlreadyFinished { status: GameStatus },
}

impl std::error::Error for IllegalAction {}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::InvalidEntryPoint { position } => write!(
                f,
                "Rays can only be shot from a non-corner border cell, but {} is not one",
                position
            ),
            IllegalAction::GameAlreadyFinished { status } => {
                write!(f, "The game is already over, it was {}", status)
            }
        }
    }
}
