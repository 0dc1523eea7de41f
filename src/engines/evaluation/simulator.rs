//! Deterministic replay of a chromosome against a maze.

use crate::engines::maze::Maze;
use crate::types::{manhattan, Move, Position};
use serde::{Deserialize, Serialize};

/// Per-step trace record for animation and debugging. Field names match
/// the wire format consumed by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    /// Step index within the chromosome.
    pub i: usize,
    /// Move code attempted at this step.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Whether the move was legal.
    pub ok: bool,
    /// Position after the step.
    pub pos: Position,
    /// Manhattan distance to the goal after the step.
    pub dist: usize,
    /// Whether this step collided.
    pub coll: bool,
}

/// Result of replaying one chromosome. Derived entirely from the maze
/// and gene sequence; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Visited cells, starting at the maze start. One entry per executed
    /// step plus the initial position.
    pub positions: Vec<Position>,
    pub reached: bool,
    pub steps_to_goal: Option<usize>,
    /// Moves that would have exited bounds or hit a wall.
    pub collisions: usize,
    pub final_pos: Position,
    pub trace: Option<Vec<TraceStep>>,
}

/// Replay `genes` from the maze start. An illegal move consumes a step,
/// leaves the position unchanged and counts a collision; it is never
/// retried or skipped. Simulation stops at the first goal arrival.
///
/// Tracing is opt-in: bulk population evaluation runs without it to
/// avoid the per-step allocation.
pub fn simulate(maze: &Maze, genes: &[Move], record_trace: bool) -> SimulationResult {
    let (mut r, mut c) = maze.start;
    let mut positions = Vec::with_capacity(genes.len() + 1);
    positions.push((r, c));
    let mut collisions = 0usize;
    let mut reached = false;
    let mut steps_to_goal = None;
    let mut trace = if record_trace { Some(Vec::with_capacity(genes.len())) } else { None };

    for (i, &mv) in genes.iter().enumerate() {
        let (dr, dc) = mv.delta();
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        let ok = maze.is_path(nr, nc);

        if ok {
            r = nr as usize;
            c = nc as usize;
        } else {
            collisions += 1;
        }

        positions.push((r, c));

        if let Some(trace) = trace.as_mut() {
            trace.push(TraceStep {
                i,
                mv,
                ok,
                pos: (r, c),
                dist: manhattan((r, c), maze.goal),
                coll: !ok,
            });
        }

        if (r, c) == maze.goal {
            reached = true;
            steps_to_goal = Some(i + 1);
            break;
        }
    }

    SimulationResult {
        positions,
        reached,
        steps_to_goal,
        collisions,
        final_pos: (r, c),
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeConfig;
    use crate::engines::maze;

    fn test_maze() -> Maze {
        maze::generate(&MazeConfig {
            rows: 9,
            cols: 9,
            seed: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_chromosome() {
        let maze = test_maze();
        let sim = simulate(&maze, &[], false);
        assert_eq!(sim.positions, vec![maze.start]);
        assert!(!sim.reached);
        assert_eq!(sim.steps_to_goal, None);
        assert_eq!(sim.collisions, 0);
        assert_eq!(sim.final_pos, maze.start);
        assert!(sim.trace.is_none());
    }

    #[test]
    fn test_perimeter_bumping_counts_collisions() {
        // From (1,1) both Up and Left run into the outer wall ring.
        let maze = test_maze();
        let genes = vec![Move::Up, Move::Left, Move::Up, Move::Left];
        let sim = simulate(&maze, &genes, false);
        assert_eq!(sim.collisions, 4);
        assert_eq!(sim.final_pos, maze.start);
        assert_eq!(sim.positions.len(), 5);
    }

    #[test]
    fn test_stops_at_first_arrival() {
        // Straight corridor: 3x5 has a single row of path cells.
        let maze = maze::generate(&MazeConfig {
            rows: 3,
            cols: 5,
            seed: Some(2),
            ..Default::default()
        });
        assert_eq!(maze.goal, (1, 3));
        let genes = vec![Move::Right, Move::Right, Move::Right, Move::Right];
        let sim = simulate(&maze, &genes, false);
        assert!(sim.reached);
        assert_eq!(sim.steps_to_goal, Some(2));
        // Arrival stops the walk: two executed steps plus the start.
        assert_eq!(sim.positions.len(), 3);
        assert_eq!(sim.final_pos, maze.goal);
    }

    #[test]
    fn test_trace_records_every_executed_step() {
        let maze = test_maze();
        let genes = vec![Move::Up, Move::Right, Move::Down];
        let sim = simulate(&maze, &genes, true);
        let trace = sim.trace.unwrap();
        assert_eq!(trace.len(), sim.positions.len() - 1);
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.i, i);
            assert_eq!(step.pos, sim.positions[i + 1]);
            assert_eq!(step.coll, !step.ok);
        }
    }
}
