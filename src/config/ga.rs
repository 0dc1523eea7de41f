use super::traits::ConfigSection;
use crate::error::MazevolveError;
use serde::{Deserialize, Serialize};

/// Genetic search parameters for one solve run.
///
/// These are threaded explicitly through the engine entry point; there is
/// no process-wide mutable GA state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub pop_size: usize,
    /// Generation budget before the run is declared exhausted.
    pub generations: usize,
    /// Chromosome length; fixed for the whole run.
    pub max_steps: usize,
    /// Per-gene mutation probability.
    pub mut_rate: f64,
    /// Number of top chromosomes copied unchanged into the next generation.
    pub elitism: usize,
    /// Tournament size for parent selection.
    pub tournament_k: usize,
    /// Collect the per-generation history on the batch result.
    pub history: bool,
    /// Seed for the run RNG; omitted draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            pop_size: 150,
            generations: 150,
            max_steps: 800,
            mut_rate: 0.03,
            elitism: 2,
            tournament_k: 3,
            history: true,
            seed: None,
        }
    }
}

impl ConfigSection for GaConfig {
    fn section_name() -> &'static str {
        "ga"
    }

    fn validate(&self) -> Result<(), MazevolveError> {
        if self.pop_size < 2 {
            return Err(MazevolveError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.generations < 1 {
            return Err(MazevolveError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        if self.max_steps < 2 {
            return Err(MazevolveError::Configuration(
                "Chromosome length must be at least 2".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mut_rate) {
            return Err(MazevolveError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if self.elitism > self.pop_size {
            return Err(MazevolveError::Configuration(
                "Elitism count cannot exceed population size".to_string(),
            ));
        }
        if self.tournament_k < 1 {
            return Err(MazevolveError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
