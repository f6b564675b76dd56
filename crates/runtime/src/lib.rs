//! Runtime orchestration for the predator/prey simulation.
//!
//! This crate wires together oracle access, scenario setup, and the worker
//! task into a cohesive runtime API. Consumers embed [`Runtime`] to resolve
//! turns, subscribe to events, and query the board through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] and [`scenario`] adapt loaded content for the engine
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod scenario;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, MoveEvent, Topic, TurnEvent};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TransitionPolicy};
pub use scenario::create_initial_state;
