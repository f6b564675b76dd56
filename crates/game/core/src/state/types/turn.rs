use std::collections::BTreeMap;

use super::{EntityId, Position};
use crate::env::TransitionTicket;

/// Turn lock. `ResolvingTurn` is held for the duration of one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    Idle,
    ResolvingTurn,
}

/// An empty-tile advance waiting for its transition to complete.
///
/// Until completion the predator stays resident on `from`, and `to` is
/// reserved against other arrivals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingMove {
    pub ticket: TransitionTicket,
    pub entity: EntityId,
    pub from: Position,
    pub to: Position,
    /// Turn in which the move was scheduled.
    pub turn: u64,
}

/// Outstanding moves keyed by ticket.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingMoves {
    next_ticket: u64,
    moves: BTreeMap<TransitionTicket, PendingMove>,
}

impl PendingMoves {
    pub fn issue_ticket(&mut self) -> TransitionTicket {
        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    pub fn insert(&mut self, pending: PendingMove) {
        self.moves.insert(pending.ticket, pending);
    }

    pub fn remove(&mut self, ticket: TransitionTicket) -> Option<PendingMove> {
        self.moves.remove(&ticket)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingMove> {
        self.moves.values()
    }

    pub fn tickets(&self) -> Vec<TransitionTicket> {
        self.moves.keys().copied().collect()
    }

    pub fn is_reserved(&self, position: Position) -> bool {
        self.moves.values().any(|pending| pending.to == position)
    }

    pub fn for_entity(&self, entity: EntityId) -> Option<&PendingMove> {
        self.moves.values().find(|pending| pending.entity == entity)
    }

    /// Drops every move belonging to `entity`.
    pub fn cancel_for(&mut self, entity: EntityId) -> usize {
        let before = self.moves.len();
        self.moves.retain(|_, pending| pending.entity != entity);
        before - self.moves.len()
    }
}

/// Turn bookkeeping: counter, lock, roster, and deferred moves.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Number of turns resolved so far.
    pub turn: u64,

    pub phase: TurnPhase,

    /// Active-predator roster in insertion order. Resolution walks it in
    /// reverse so removals never skip an entry.
    pub roster: Vec<EntityId>,

    pub pending: PendingMoves,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.phase == TurnPhase::ResolvingTurn
    }

    pub fn in_roster(&self, entity: EntityId) -> bool {
        self.roster.contains(&entity)
    }

    /// Removes `entity` from the roster, returning whether it was present.
    pub fn remove_from_roster(&mut self, entity: EntityId) -> bool {
        match self.roster.iter().position(|&id| id == entity) {
            Some(index) => {
                self.roster.remove(index);
                true
            }
            None => false,
        }
    }
}
