pub mod generator;
pub mod grid;

pub use generator::{ensure_odd, generate};
pub use grid::Maze;
