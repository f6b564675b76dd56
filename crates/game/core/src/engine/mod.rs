//! Turn resolution and deferred-move bookkeeping.
//!
//! The [`TurnEngine`] is the authoritative reducer for [`GameState`]. Each
//! call to [`TurnEngine::resolve_turn`] walks the active-predator roster once,
//! settles one move/eat/exit decision per predator, and spawns a newcomer.
//! Advances into empty tiles are handed to a
//! [`TransitionScheduler`](crate::env::TransitionScheduler) and only applied
//! once [`TurnEngine::complete_transition`] reports them done.

mod errors;
mod spawn;
mod transition;
mod turns;

pub use errors::{TransitionError, TurnError};

use crate::env::TransitionTicket;
use crate::state::{EntityId, GameState, Position, SpeciesId};

/// What happened to one predator during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// Reached the terminal column and left the board.
    Exited,
    /// Destination was empty; the move completes with `ticket`.
    Advancing {
        to: Position,
        ticket: TransitionTicket,
    },
    /// Ate the plant on `to` and moved in.
    AtePlant { plant: EntityId, to: Position },
    /// Ate the prey on `to` and was removed along with it.
    AtePrey {
        prey: EntityId,
        to: Position,
        nutrition: i32,
    },
    /// Destination held another predator or a pending reservation.
    Blocked { by: EntityId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorOutcome {
    pub predator: EntityId,
    pub from: Position,
    pub kind: OutcomeKind,
}

/// The predator added by the end-of-turn spawn step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawned {
    pub predator: EntityId,
    pub species: SpeciesId,
    pub position: Position,
}

/// Summary of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Zero-based index of the resolved turn.
    pub turn: u64,
    /// One entry per roster predator, in processing (reverse roster) order.
    pub outcomes: Vec<PredatorOutcome>,
    /// `None` when every column-0 tile was taken.
    pub spawned: Option<Spawned>,
}

impl TurnReport {
    /// Tickets scheduled during this turn.
    pub fn tickets(&self) -> impl Iterator<Item = TransitionTicket> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome.kind {
            OutcomeKind::Advancing { ticket, .. } => Some(ticket),
            _ => None,
        })
    }
}

/// A deferred move that has been applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCompletion {
    pub ticket: TransitionTicket,
    pub predator: EntityId,
    pub from: Position,
    pub to: Position,
}

/// Turn engine that resolves turns and completes deferred moves.
///
/// Holds the only mutable borrow of the state while it exists, so the board
/// and the roster cannot drift apart behind its back.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Number of turns resolved so far.
    pub fn turn(&self) -> u64 {
        self.state.turn.turn
    }

    pub fn roster(&self) -> &[EntityId] {
        &self.state.turn.roster
    }

    pub fn pending_count(&self) -> usize {
        self.state.turn.pending.len()
    }
}
