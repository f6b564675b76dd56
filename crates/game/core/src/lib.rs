//! Deterministic predator/prey rules and data types shared across hosts.
//!
//! `game-core` defines the board, the entity model, the hunger/voracity
//! consumption arithmetic, and the turn engine. It exposes pure, synchronous
//! APIs that the runtime drives. All state mutation during play flows through
//! [`engine::TurnEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod consumption;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use consumption::{AppetiteCaps, PredatorState, PreyState};
pub use engine::{
    MoveCompletion, OutcomeKind, PredatorOutcome, Spawned, TransitionError, TurnEngine,
    TurnError, TurnReport,
};
pub use env::{
    Env, GameEnv, ImmediateScheduler, OracleError, PcgRng, Point, RngContext, RngOracle,
    SpeciesOracle, SpeciesTable, SpeciesTraits, Transition, TransitionScheduler,
    TransitionTicket, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Board, BoardDimensions, BoardError, EntitiesState, Entity, EntityBody, EntityId, EntityKind,
    GameState, PendingMove, PlantState, Position, ResourceMeter, SpeciesId, StateError, Tile,
    TurnPhase, TurnState,
};
