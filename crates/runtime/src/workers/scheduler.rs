//! Tokio-backed transition scheduler.
//!
//! Each scheduled move becomes a sleeping task that reports completion back
//! to the simulation worker through its command channel.

use std::time::Duration;

use tokio::sync::mpsc;

use game_core::{Transition, TransitionScheduler};

use super::simulation::Command;
use crate::events::{Event, EventBus, MoveEvent};

/// Schedules transitions as timed tasks on the current tokio runtime.
///
/// Holds only a weak sender, so outstanding timers never keep the worker
/// alive after every handle has been dropped.
pub struct TokioTransitionScheduler {
    command_tx: mpsc::WeakSender<Command>,
    event_bus: EventBus,
}

impl TokioTransitionScheduler {
    pub fn new(command_tx: mpsc::WeakSender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }
}

impl TransitionScheduler for TokioTransitionScheduler {
    fn schedule(&mut self, transition: Transition) {
        tracing::debug!(
            target: "runtime::scheduler",
            ticket = %transition.ticket,
            predator = %transition.entity,
            to = %transition.to,
            duration_ms = transition.duration_ms,
            "Scheduling transition"
        );

        self.event_bus.publish(Event::Move(MoveEvent::Scheduled {
            ticket: transition.ticket,
            predator: transition.entity,
            from: transition.from,
            to: transition.to,
            duration_ms: transition.duration_ms,
        }));

        let command_tx = self.command_tx.clone();
        let ticket = transition.ticket;
        let delay = Duration::from_millis(u64::from(transition.duration_ms));

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(command_tx) = command_tx.upgrade() else {
                tracing::trace!(%ticket, "Worker gone before transition finished");
                return;
            };
            if command_tx
                .send(Command::TransitionFinished { ticket })
                .await
                .is_err()
            {
                tracing::trace!(%ticket, "Command channel closed before transition finished");
            }
        });
    }
}
