use super::chromosome::Chromosome;
use super::operators::{crossover, mutate, random_chromosome, tournament_selection};
use crate::config::{ConfigSection, GaConfig};
use crate::engines::evaluation::{fitness, simulate, simulator::SimulationResult, TraceStep};
use crate::engines::maze::Maze;
use crate::error::Result;
use crate::types::Position;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a run left the generational loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    /// The generation's best chromosome reached the goal.
    Converged,
    /// The generation budget ran out.
    Exhausted,
    /// The caller's cancel token was set at a generation boundary.
    Cancelled,
}

/// Progress record emitted once per generation: the generation's best
/// trajectory plus the best-ever trajectory observed so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub fitness: f64,
    pub positions: Vec<Position>,
    pub reached: bool,
    pub steps_to_goal: Option<usize>,
    pub best_positions: Vec<Position>,
}

/// Authoritative result of a solve run. The best-ever chromosome is
/// re-simulated with tracing at the end, so `best_trace` is always
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub best_genes: Chromosome,
    pub best_positions: Vec<Position>,
    pub best_reached: bool,
    pub best_steps_to_goal: Option<usize>,
    pub best_fitness: f64,
    pub best_trace: Option<Vec<TraceStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<GenerationRecord>>,
    pub termination: Termination,
}

/// Cooperative cancellation flag checked once per generation boundary,
/// the loop's only natural suspension point. Clone it and hand one half
/// to the thread driving the run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

pub trait ProgressCallback {
    fn on_generation(&mut self, record: &GenerationRecord);
}

/// Best-ever record for one run; replaced only on strictly greater
/// fitness.
struct BestRecord {
    genes: Chromosome,
    sim: SimulationResult,
    fitness: f64,
}

pub struct EvolutionEngine {
    config: GaConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: GaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Run the generational loop against `maze`.
    ///
    /// Each generation: simulate every chromosome without tracing, score
    /// them, re-simulate the generation's best with tracing, update the
    /// best-ever record on strict improvement, and emit one progress
    /// record. Converges as soon as a generation's best reaches the
    /// goal; otherwise runs to the generation budget. The cancel token,
    /// when provided, is checked at the boundary after each generation.
    pub fn run<C: ProgressCallback>(
        &mut self,
        maze: &Maze,
        cancel: Option<&CancelToken>,
        callback: &mut C,
    ) -> Result<SolveOutcome> {
        self.config.validate()?;

        let mut population: Vec<Chromosome> = (0..self.config.pop_size)
            .map(|_| random_chromosome(self.config.max_steps, &mut self.rng))
            .collect();

        let mut best: Option<BestRecord> = None;
        let mut history = if self.config.history { Some(Vec::new()) } else { None };
        let mut termination = Termination::Exhausted;

        for generation in 0..self.config.generations {
            let fitnesses: Vec<f64> = population
                .iter()
                .map(|genes| fitness::score(&simulate(maze, genes, false), maze.goal))
                .collect();

            // Generation best; ties break to the first found.
            let mut gen_best_idx = 0;
            for i in 1..fitnesses.len() {
                if fitnesses[i] > fitnesses[gen_best_idx] {
                    gen_best_idx = i;
                }
            }

            // Only the winner pays the trace cost.
            let gen_best_sim = simulate(maze, &population[gen_best_idx], true);
            let gen_best_fit = fitness::score(&gen_best_sim, maze.goal);

            if best.as_ref().map_or(true, |b| gen_best_fit > b.fitness) {
                best = Some(BestRecord {
                    genes: population[gen_best_idx].clone(),
                    sim: gen_best_sim.clone(),
                    fitness: gen_best_fit,
                });
            }

            debug!(
                "generation {}: best fitness {:.4}, reached {}",
                generation, gen_best_fit, gen_best_sim.reached
            );

            let record = GenerationRecord {
                generation,
                fitness: gen_best_fit,
                positions: gen_best_sim.positions.clone(),
                reached: gen_best_sim.reached,
                steps_to_goal: gen_best_sim.steps_to_goal,
                best_positions: best.as_ref().map(|b| b.sim.positions.clone()).unwrap_or_default(),
            };
            callback.on_generation(&record);
            if let Some(history) = history.as_mut() {
                history.push(record);
            }

            if gen_best_sim.reached {
                termination = Termination::Converged;
                break;
            }

            if cancel.map_or(false, |token| token.is_cancelled()) {
                termination = Termination::Cancelled;
                break;
            }

            population = self.next_population(&population, &fitnesses);
        }

        // generations >= 1 is enforced by validate(), so at least one
        // generation ran and a best record exists.
        let best = best.ok_or_else(|| {
            crate::error::MazevolveError::Configuration(
                "Generation count must be at least 1".to_string(),
            )
        })?;

        // Authoritative terminal step: re-simulate the best-ever
        // chromosome with tracing and recompute its fitness.
        let final_sim = simulate(maze, &best.genes, true);
        let best_fitness = fitness::score(&final_sim, maze.goal);

        info!(
            "run finished: {:?}, fitness {:.4}, reached {}",
            termination, best_fitness, final_sim.reached
        );

        Ok(SolveOutcome {
            best_genes: best.genes,
            best_positions: final_sim.positions.clone(),
            best_reached: final_sim.reached,
            best_steps_to_goal: final_sim.steps_to_goal,
            best_fitness,
            best_trace: final_sim.trace,
            history,
            termination,
        })
    }

    /// Build the next population: elites first, then tournament-selected
    /// parents recombined in pairs. On odd population sizes the surplus
    /// second child of the last pair is dropped.
    fn next_population(&mut self, population: &[Chromosome], fitnesses: &[f64]) -> Vec<Chromosome> {
        let pop_size = population.len();
        let mut next = Vec::with_capacity(pop_size);

        // Stable sort keeps population order among fitness ties.
        let mut ranked: Vec<usize> = (0..pop_size).collect();
        ranked.sort_by(|&a, &b| {
            fitnesses[b]
                .partial_cmp(&fitnesses[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for &i in ranked.iter().take(self.config.elitism) {
            next.push(population[i].clone());
        }

        while next.len() < pop_size {
            let i1 = tournament_selection(fitnesses, self.config.tournament_k, &mut self.rng);
            let i2 = tournament_selection(fitnesses, self.config.tournament_k, &mut self.rng);

            let (mut child1, mut child2) = crossover(&population[i1], &population[i2], &mut self.rng);

            mutate(&mut child1, self.config.mut_rate, &mut self.rng);
            next.push(child1);
            if next.len() < pop_size {
                mutate(&mut child2, self.config.mut_rate, &mut self.rng);
                next.push(child2);
            }
        }

        next
    }
}
