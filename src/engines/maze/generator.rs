//! Perfect-maze generation via randomized depth-first carving.
//!
//! The grid starts fully walled. Carving works on the odd-coordinate
//! sublattice: from the cell on top of the stack, pick a random
//! still-walled neighbor two cells away, open the wall between them and
//! the neighbor itself, then push the neighbor. Dead ends pop the stack.
//! The result is a spanning tree over the carved cells: exactly one
//! simple path between any two of them.

use super::grid::Maze;
use crate::config::MazeConfig;
use crate::types::{PATH, WALL};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Round an even dimension up to the next odd value. Walls occupy the
/// even-indexed rows/columns between path cells, so even dimensions are
/// invalid for the carving algorithm.
pub fn ensure_odd(n: usize) -> usize {
    if n % 2 == 1 {
        n
    } else {
        n + 1
    }
}

/// Generate a maze from `config`. Seeded runs are fully reproducible,
/// including the openness/closeness post-passes.
pub fn generate(config: &MazeConfig) -> Maze {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rows = ensure_odd(config.rows);
    let cols = ensure_odd(config.cols);

    let mut grid = vec![vec![WALL; cols]; rows];

    // Carve from (1,1) with an explicit stack.
    grid[1][1] = PATH;
    let mut stack: Vec<(usize, usize)> = vec![(1, 1)];

    while let Some(&(r, c)) = stack.last() {
        let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
        if r >= 2 && grid[r - 2][c] == WALL {
            neighbors.push((r - 2, c));
        }
        if r + 2 < rows && grid[r + 2][c] == WALL {
            neighbors.push((r + 2, c));
        }
        if c >= 2 && grid[r][c - 2] == WALL {
            neighbors.push((r, c - 2));
        }
        if c + 2 < cols && grid[r][c + 2] == WALL {
            neighbors.push((r, c + 2));
        }

        match neighbors.choose(&mut rng) {
            Some(&(nr, nc)) => {
                // Open the wall between (r,c) and the target, then the
                // target itself.
                grid[(r + nr) / 2][(c + nc) / 2] = PATH;
                grid[nr][nc] = PATH;
                stack.push((nr, nc));
            }
            None => {
                stack.pop();
            }
        }
    }

    let start = (1, 1);
    let goal = (rows - 2, cols - 2);

    if config.openness > 0.0 {
        open_walls(&mut grid, rows, cols, config.openness, &mut rng);
    }
    if config.closeness > 0.0 {
        close_paths(&mut grid, rows, cols, start, goal, config.closeness, &mut rng);
    }

    debug!(
        "generated maze {}x{} (seed {:?}, openness {}, closeness {})",
        rows, cols, config.seed, config.openness, config.closeness
    );

    Maze {
        rows,
        cols,
        grid,
        start,
        goal,
    }
}

/// Flip each interior wall cell to path with probability `openness`.
/// Introduces loops and shortcuts, breaking the perfect-maze property.
fn open_walls(grid: &mut [Vec<u8>], rows: usize, cols: usize, openness: f64, rng: &mut StdRng) {
    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            if grid[r][c] == WALL && rng.gen::<f64>() < openness {
                grid[r][c] = PATH;
            }
        }
    }
}

/// Flip each interior path cell (other than start and goal) to wall with
/// probability `closeness`. May disconnect start from goal; no
/// connectivity re-check is performed.
fn close_paths(
    grid: &mut [Vec<u8>],
    rows: usize,
    cols: usize,
    start: (usize, usize),
    goal: (usize, usize),
    closeness: f64,
    rng: &mut StdRng,
) {
    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            if grid[r][c] == PATH && (r, c) != start && (r, c) != goal {
                if rng.gen::<f64>() < closeness {
                    grid[r][c] = WALL;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn config(rows: usize, cols: usize, seed: u64) -> MazeConfig {
        MazeConfig {
            rows,
            cols,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Flood fill from `from`, returning the set of reachable path cells.
    fn reachable(maze: &Maze, from: (usize, usize)) -> Vec<(usize, usize)> {
        let mut seen = vec![vec![false; maze.cols]; maze.rows];
        let mut queue = VecDeque::from([from]);
        seen[from.0][from.1] = true;
        let mut out = Vec::new();
        while let Some((r, c)) = queue.pop_front() {
            out.push((r, c));
            for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if maze.is_path(nr, nc) && !seen[nr as usize][nc as usize] {
                    seen[nr as usize][nc as usize] = true;
                    queue.push_back((nr as usize, nc as usize));
                }
            }
        }
        out
    }

    #[test]
    fn test_ensure_odd() {
        assert_eq!(ensure_odd(4), 5);
        assert_eq!(ensure_odd(5), 5);
        assert_eq!(ensure_odd(ensure_odd(10)), 11);
    }

    #[test]
    fn test_even_dimensions_rounded_up() {
        let maze = generate(&config(10, 12, 7));
        assert_eq!(maze.rows, 11);
        assert_eq!(maze.cols, 13);
    }

    #[test]
    fn test_start_and_goal_are_paths() {
        let maze = generate(&config(17, 21, 42));
        assert_eq!(maze.start, (1, 1));
        assert_eq!(maze.goal, (15, 19));
        assert_eq!(maze.grid[1][1], PATH);
        assert_eq!(maze.grid[15][19], PATH);
    }

    #[test]
    fn test_outer_ring_is_wall() {
        let maze = generate(&config(9, 9, 3));
        for c in 0..maze.cols {
            assert_eq!(maze.grid[0][c], WALL);
            assert_eq!(maze.grid[maze.rows - 1][c], WALL);
        }
        for r in 0..maze.rows {
            assert_eq!(maze.grid[r][0], WALL);
            assert_eq!(maze.grid[r][maze.cols - 1], WALL);
        }
    }

    #[test]
    fn test_perfect_maze_spanning_tree() {
        // Every carved cell is reachable from the start, and the carving
        // graph over path cells is a tree: path_cells = edges + 1, where
        // each passage cell between two odd-coordinate cells is one edge.
        let maze = generate(&config(17, 21, 99));

        let carved: usize = maze
            .grid
            .iter()
            .map(|row| row.iter().filter(|&&c| c == PATH).count())
            .sum();
        let reached = reachable(&maze, maze.start);
        assert_eq!(reached.len(), carved);

        // Odd-coordinate cells are tree nodes, even/odd mixed cells are
        // carved passages (tree edges).
        let mut nodes = 0usize;
        let mut edges = 0usize;
        for r in 0..maze.rows {
            for c in 0..maze.cols {
                if maze.grid[r][c] == PATH {
                    if r % 2 == 1 && c % 2 == 1 {
                        nodes += 1;
                    } else {
                        edges += 1;
                    }
                }
            }
        }
        assert_eq!(nodes, edges + 1);
    }

    #[test]
    fn test_determinism() {
        let a = generate(&config(17, 21, 12345));
        let b = generate(&config(17, 21, 12345));
        assert_eq!(a.grid, b.grid);

        let c = generate(&config(17, 21, 54321));
        assert_ne!(a.grid, c.grid);
    }

    #[test]
    fn test_openness_only_adds_paths() {
        let base = generate(&config(17, 21, 8));
        let open = generate(&MazeConfig {
            openness: 0.3,
            ..config(17, 21, 8)
        });

        let count = |m: &Maze| -> usize {
            m.grid
                .iter()
                .map(|row| row.iter().filter(|&&c| c == PATH).count())
                .sum()
        };
        assert!(count(&open) >= count(&base));
    }

    #[test]
    fn test_closeness_one_isolates_start_without_repair() {
        // With closeness 1.0 every interior path cell except start and
        // goal becomes a wall again. No reconnection pass runs: the goal
        // must be unreachable and the grid must stay exactly as flipped.
        let maze = generate(&MazeConfig {
            closeness: 1.0,
            ..config(17, 21, 5)
        });

        assert_eq!(maze.grid[maze.start.0][maze.start.1], PATH);
        assert_eq!(maze.grid[maze.goal.0][maze.goal.1], PATH);

        let carved: usize = maze
            .grid
            .iter()
            .map(|row| row.iter().filter(|&&c| c == PATH).count())
            .sum();
        assert_eq!(carved, 2);

        let reached = reachable(&maze, maze.start);
        assert_eq!(reached, vec![maze.start]);
    }
}
