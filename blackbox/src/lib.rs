pub use errors::*;
pub use game::*;
pub use grid::*;
pub use protocol_types::*;
pub use ray::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod game;
mod grid;
mod protocol_types;
mod ray;
mod visualization;
