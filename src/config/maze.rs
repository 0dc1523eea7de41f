use super::traits::ConfigSection;
use crate::error::MazevolveError;
use serde::{Deserialize, Serialize};

/// Maze generation parameters.
///
/// Even dimensions are accepted and rounded up to the next odd value by
/// the generator; the carving algorithm needs walls on even-indexed
/// rows/columns between path cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for the generation RNG; omitted draws from entropy.
    pub seed: Option<u64>,
    /// Probability of flipping each interior wall cell to path after
    /// carving. Introduces loops, breaking the perfect-maze property.
    pub openness: f64,
    /// Probability of flipping each interior path cell (other than start
    /// and goal) to wall after carving. May disconnect start from goal;
    /// no connectivity re-check is performed.
    pub closeness: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 31,
            cols: 41,
            seed: None,
            openness: 0.0,
            closeness: 0.0,
        }
    }
}

impl ConfigSection for MazeConfig {
    fn section_name() -> &'static str {
        "maze"
    }

    fn validate(&self) -> Result<(), MazevolveError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(MazevolveError::Configuration(
                "Maze dimensions must be at least 3x3".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.openness) {
            return Err(MazevolveError::Configuration(
                "Openness must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.closeness) {
            return Err(MazevolveError::Configuration(
                "Closeness must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
