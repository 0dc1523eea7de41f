//! Fitness scoring for simulated paths.

use super::simulator::SimulationResult;
use crate::types::{manhattan, Position};

/// Per-collision penalty. Small enough that a real distance improvement
/// always outweighs wall-bumping under default chromosome lengths.
const COLLISION_PENALTY: f64 = 0.01;

/// Floor on the final score when collisions are extreme.
const SCORE_FLOOR: f64 = -1.0;

/// Score a simulation result for selection ranking. Higher is better.
///
/// Base score is `1 / (1 + manhattan(final, goal))`, in (0, 1]. Each
/// collision subtracts a small penalty. Reaching the goal adds
/// `1 + 1 / (1 + steps_to_goal)`: a bonus in (1, 2] that dominates the
/// distance term, with the secondary term rewarding faster arrival.
pub fn score(sim: &SimulationResult, goal: Position) -> f64 {
    let dist = manhattan(sim.final_pos, goal);
    let mut score = 1.0 / (1.0 + dist as f64);

    score -= COLLISION_PENALTY * sim.collisions as f64;

    if sim.reached {
        if let Some(steps) = sim.steps_to_goal {
            score += 1.0 + 1.0 / (1.0 + steps as f64);
        }
    }

    score.max(SCORE_FLOOR)
}
