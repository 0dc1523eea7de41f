use super::evolution_engine::{GenerationRecord, ProgressCallback, SolveOutcome};
use log::info;
use serde::{Deserialize, Serialize};

/// Streaming event at the solve boundary. Consumers read `history`
/// events until the single terminal `final` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SolveEvent {
    History(GenerationRecord),
    Final(Box<SolveOutcome>),
}

/// Logs one line per generation.
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_generation(&mut self, record: &GenerationRecord) {
        info!(
            "generation {}: fitness {:.4}, reached {}, steps {:?}",
            record.generation, record.fitness, record.reached, record.steps_to_goal
        );
    }
}

/// Discards progress; for batch callers that only want the outcome.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn on_generation(&mut self, _record: &GenerationRecord) {}
}

/// Forwards each generation as a `SolveEvent::History` over a channel,
/// for callers driving the run from another thread. Send failures are
/// ignored; a dropped receiver simply stops observing.
pub struct ChannelProgress {
    sender: std::sync::mpsc::Sender<SolveEvent>,
}

impl ChannelProgress {
    pub fn new(sender: std::sync::mpsc::Sender<SolveEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_generation(&mut self, record: &GenerationRecord) {
        let _ = self.sender.send(SolveEvent::History(record.clone()));
    }
}
