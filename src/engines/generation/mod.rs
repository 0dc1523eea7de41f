pub mod chromosome;
pub mod evolution_engine;
pub mod operators;
pub mod progress;

pub use chromosome::Chromosome;
pub use evolution_engine::{
    CancelToken, EvolutionEngine, GenerationRecord, ProgressCallback, SolveOutcome, Termination,
};
pub use progress::{ChannelProgress, ConsoleProgress, NullProgress, SolveEvent};
