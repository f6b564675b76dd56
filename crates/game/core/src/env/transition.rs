//! Deferred move scheduling.
//!
//! Moving into an empty tile is not applied during turn resolution. The turn
//! engine records a pending move and hands a [`Transition`] to a scheduler,
//! which plays it out and later reports completion by ticket through
//! [`TurnEngine::complete_transition`](crate::engine::TurnEngine::complete_transition).

use std::fmt;

use crate::state::{EntityId, Position};

/// Identifies one pending move and its completion signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTicket(pub u64);

impl fmt::Display for TransitionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticket:{}", self.0)
    }
}

/// Continuous board coordinate, in tile units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn tile_center(position: Position) -> Self {
        Self::new(position.x as f32 + 0.5, position.y as f32 + 0.5)
    }
}

/// A scheduled visual move from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub entity: EntityId,
    pub from: Position,
    pub to: Position,
    pub destination: Point,
    pub duration_ms: u32,
}

/// Accepts transitions without blocking the turn engine.
///
/// Implementations must eventually report every scheduled ticket back to
/// the engine, unless the engine settles it first.
pub trait TransitionScheduler {
    fn schedule(&mut self, transition: Transition);
}

/// Scheduler that only records what it was given.
///
/// Useful headless and in tests: the caller decides when each move completes.
#[derive(Clone, Debug, Default)]
pub struct ImmediateScheduler {
    scheduled: Vec<Transition>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> &[Transition] {
        &self.scheduled
    }
}

impl TransitionScheduler for ImmediateScheduler {
    fn schedule(&mut self, transition: Transition) {
        self.scheduled.push(transition);
    }
}
