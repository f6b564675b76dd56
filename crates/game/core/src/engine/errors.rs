//! Error types for turn resolution and move completion.

use crate::config::ConfigError;
use crate::env::{OracleError, TransitionTicket};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, SpeciesId, StateError};

/// Errors surfaced by [`TurnEngine`](super::TurnEngine) turn and spawn calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// The turn lock is still held: an earlier resolution aborted midway.
    #[error("turn resolution is locked")]
    Locked,

    /// Moves scheduled by an earlier turn have not completed yet.
    #[error("{count} transition(s) from the previous turn are still pending")]
    TransitionsPending { count: usize },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("species {species} is not a predator species")]
    NotAPredatorSpecies { species: SpeciesId },

    #[error("cannot spawn outside the board at {position}")]
    SpawnOutOfBounds { position: Position },

    /// Target tile has a resident or is reserved by a pending move.
    #[error("cannot spawn at {position}: tile is taken")]
    SpawnBlocked { position: Position },

    #[error("state invariant violated: {0}")]
    Invariant(#[from] StateError),
}

impl TurnError {
    pub fn transitions_pending(count: usize) -> Self {
        Self::TransitionsPending { count }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::Locked => ErrorSeverity::Fatal,
            TurnError::TransitionsPending { .. } => ErrorSeverity::Recoverable,
            TurnError::Oracle(error) => error.severity(),
            TurnError::Config(error) => error.severity(),
            TurnError::NotAPredatorSpecies { .. }
            | TurnError::SpawnOutOfBounds { .. }
            | TurnError::SpawnBlocked { .. } => ErrorSeverity::Validation,
            TurnError::Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::Locked => "TURN_LOCKED",
            TurnError::TransitionsPending { .. } => "TURN_TRANSITIONS_PENDING",
            TurnError::Oracle(error) => error.error_code(),
            TurnError::Config(error) => error.error_code(),
            TurnError::NotAPredatorSpecies { .. } => "TURN_NOT_A_PREDATOR_SPECIES",
            TurnError::SpawnOutOfBounds { .. } => "TURN_SPAWN_OUT_OF_BOUNDS",
            TurnError::SpawnBlocked { .. } => "TURN_SPAWN_BLOCKED",
            TurnError::Invariant(_) => "TURN_INVARIANT",
        }
    }
}

/// Errors surfaced while completing a deferred move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    /// Ticket was never issued, already completed, or settled.
    #[error("unknown or stale {0}")]
    UnknownTicket(TransitionTicket),

    #[error("state invariant violated: {0}")]
    Invariant(#[from] StateError),
}

impl GameError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TransitionError::UnknownTicket(_) => ErrorSeverity::Validation,
            TransitionError::Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TransitionError::UnknownTicket(_) => "TRANSITION_UNKNOWN_TICKET",
            TransitionError::Invariant(_) => "TRANSITION_INVARIANT",
        }
    }
}
