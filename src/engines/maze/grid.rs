use crate::types::{Position, PATH};
use serde::{Deserialize, Serialize};

/// A generated maze. Immutable once built; the grid is a rows x cols
/// matrix of 0 (wall) / 1 (path) cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<Vec<u8>>,
    pub start: Position,
    pub goal: Position,
}

impl Maze {
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Whether `(row, col)` is a walkable cell. Out-of-bounds counts as
    /// not walkable.
    pub fn is_path(&self, row: isize, col: isize) -> bool {
        self.in_bounds(row, col) && self.grid[row as usize][col as usize] == PATH
    }
}
