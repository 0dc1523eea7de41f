pub mod fitness;
pub mod simulator;

pub use simulator::{simulate, SimulationResult, TraceStep};
