//! Maze generation and genetic path search.
//!
//! The crate builds a perfect maze by randomized depth-first carving and
//! then evolves a fixed-length move sequence from start to goal with a
//! generational genetic algorithm: elitism, tournament selection,
//! one-point crossover, per-gene mutation, early stop on arrival, and
//! per-generation progress reporting (batch history or streamed events).

pub mod api;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::generation::{EvolutionEngine, SolveOutcome};
pub use engines::maze::Maze;
pub use error::{MazevolveError, Result};
