//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker resolves turns and applies move completions; the
//! tokio scheduler feeds those completions back to it.

mod scheduler;
mod simulation;

pub use scheduler::TokioTransitionScheduler;
pub use simulation::{Command, SimulationWorker};
