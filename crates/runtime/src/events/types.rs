//! Event types for different topics.

use game_core::{EntityId, MoveCompletion, Position, TransitionTicket, TurnReport};
use serde::Serialize;

/// Events related to turn resolution.
#[derive(Debug, Clone, Serialize)]
pub enum TurnEvent {
    /// Turn `turn` is about to be resolved.
    Started { turn: u64 },

    /// Turn resolved; the report lists every predator outcome and the spawn.
    Resolved { report: TurnReport },

    /// A turn request was refused or aborted.
    Skipped { turn: u64, reason: String },
}

/// Events related to deferred predator moves.
#[derive(Debug, Clone, Serialize)]
pub enum MoveEvent {
    /// A transition was handed to the scheduler.
    Scheduled {
        ticket: TransitionTicket,
        predator: EntityId,
        from: Position,
        to: Position,
        duration_ms: u32,
    },

    /// A pending move was applied to the board.
    Completed(MoveCompletion),

    /// A completion signal arrived for a ticket that was already settled.
    Stale { ticket: TransitionTicket },
}
