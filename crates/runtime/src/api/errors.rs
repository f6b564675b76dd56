//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, scenario setup, and the turn
//! engine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{TransitionError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),

    #[error("scenario references unknown species '{0}'")]
    UnknownSpecies(String),

    #[error("failed to place scenario entity '{species}'")]
    Placement {
        species: String,
        #[source]
        source: TurnError,
    },

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
