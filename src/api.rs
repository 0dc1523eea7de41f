//! Transport-free boundary records and entry points.
//!
//! A web layer (or any other caller) owns the maze between calls; the
//! core is stateless. A solve invoked without a maze is a precondition
//! violation, surfaced before the engine starts.

use crate::config::{ConfigSection, GaConfig, MazeConfig};
use crate::engines::generation::{
    CancelToken, ChannelProgress, EvolutionEngine, NullProgress, SolveEvent, SolveOutcome,
};
use crate::engines::maze::{self, Maze};
use crate::error::{MazevolveError, Result};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Maze generation request. Missing fields fall back to the defaults of
/// the original service (31x41, no perturbation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub openness: f64,
    pub closeness: f64,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        let cfg = MazeConfig::default();
        Self {
            rows: cfg.rows,
            cols: cfg.cols,
            seed: None,
            openness: 0.0,
            closeness: 0.0,
        }
    }
}

/// Generate a maze from a boundary request.
pub fn generate(request: &GenerateRequest) -> Result<Maze> {
    let config = MazeConfig {
        rows: request.rows,
        cols: request.cols,
        seed: request.seed,
        openness: request.openness,
        closeness: request.closeness,
    };
    config.validate()?;
    Ok(maze::generate(&config))
}

/// Batch solve: runs the whole search and returns the final outcome,
/// with per-generation history attached when `config.history` is set.
pub fn solve(maze: Option<&Maze>, config: &GaConfig) -> Result<SolveOutcome> {
    let maze = require_maze(maze)?;
    EvolutionEngine::new(config.clone()).run(maze, None, &mut NullProgress)
}

/// Streaming solve: emits one `history` event per generation followed by
/// exactly one terminal `final` event carrying the batch payload.
pub fn solve_stream(
    maze: Option<&Maze>,
    config: &GaConfig,
    sender: Sender<SolveEvent>,
    cancel: Option<&CancelToken>,
) -> Result<()> {
    let maze = require_maze(maze)?;

    let mut progress = ChannelProgress::new(sender.clone());
    let outcome = EvolutionEngine::new(config.clone()).run(maze, cancel, &mut progress)?;

    let _ = sender.send(SolveEvent::Final(Box::new(outcome)));
    Ok(())
}

fn require_maze(maze: Option<&Maze>) -> Result<&Maze> {
    maze.ok_or_else(|| {
        MazevolveError::Precondition("No maze available; generate one first".to_string())
    })
}
