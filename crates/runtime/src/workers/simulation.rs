//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), resolves
//! turns via [`game_core::TurnEngine`], applies move completions reported by
//! the scheduler, and publishes events to the EventBus.

use std::collections::VecDeque;

use tokio::sync::{mpsc, oneshot};

use game_core::{GameError, GameState, TransitionError, TransitionTicket, TurnEngine, TurnReport};
use tracing::{debug, error, info, warn};

use super::scheduler::TokioTransitionScheduler;
use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, MoveEvent, TurnEvent};
use crate::oracle::OracleManager;
use crate::runtime::TransitionPolicy;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Resolve the next turn. Deferred while moves are pending, unless the
    /// worker settles them.
    ResolveTurn {
        reply: oneshot::Sender<Result<TurnReport>>,
    },
    /// A scheduled transition has finished playing out.
    TransitionFinished { ticket: TransitionTicket },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

type TurnReply = oneshot::Sender<Result<TurnReport>>;

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    policy: TransitionPolicy,
    command_rx: mpsc::Receiver<Command>,
    scheduler: TokioTransitionScheduler,
    event_bus: EventBus,
    /// Turn requests waiting for pending moves to drain.
    deferred: VecDeque<TurnReply>,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        policy: TransitionPolicy,
        command_rx: mpsc::Receiver<Command>,
        scheduler: TokioTransitionScheduler,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            roster = state.turn.roster.len(),
            entities = state.entities.len(),
            ?policy,
            "SimulationWorker initialized"
        );

        Self {
            state,
            oracles,
            policy,
            command_rx,
            scheduler,
            event_bus,
            deferred: VecDeque::new(),
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }

        if !self.deferred.is_empty() {
            warn!(
                target: "runtime::worker",
                deferred = self.deferred.len(),
                "Worker stopping with deferred turn requests"
            );
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ResolveTurn { reply } => self.handle_turn_request(reply),
            Command::TransitionFinished { ticket } => {
                self.handle_transition_finished(ticket);
                self.drain_deferred();
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_turn_request(&mut self, reply: TurnReply) {
        let pending = self.state.turn.pending.len();
        if pending > 0 {
            match self.policy {
                TransitionPolicy::Wait => {
                    debug!(
                        target: "runtime::worker",
                        pending,
                        "Deferring turn until pending moves complete"
                    );
                    self.deferred.push_back(reply);
                    return;
                }
                TransitionPolicy::Settle => {
                    if let Err(e) = self.settle_pending() {
                        Self::send_reply(reply, Err(e));
                        return;
                    }
                }
            }
        }

        let result = self.resolve_turn();
        Self::send_reply(reply, result);
    }

    /// Serves deferred requests in arrival order while nothing is pending.
    fn drain_deferred(&mut self) {
        while self.state.turn.pending.is_empty() {
            let Some(reply) = self.deferred.pop_front() else {
                break;
            };
            let result = self.resolve_turn();
            Self::send_reply(reply, result);
        }
    }

    fn resolve_turn(&mut self) -> Result<TurnReport> {
        let turn = self.state.turn.turn;
        self.event_bus
            .publish(Event::Turn(TurnEvent::Started { turn }));

        let env = self.oracles.as_game_env();
        let mut engine = TurnEngine::new(&mut self.state);

        match engine.resolve_turn(env, &mut self.scheduler) {
            Ok(report) => {
                info!(
                    target: "runtime::worker",
                    turn = report.turn,
                    outcomes = report.outcomes.len(),
                    spawned = ?report.spawned.map(|s| s.predator),
                    roster = self.state.turn.roster.len(),
                    pending = self.state.turn.pending.len(),
                    "Turn resolved"
                );
                self.event_bus.publish(Event::Turn(TurnEvent::Resolved {
                    report: report.clone(),
                }));
                Ok(report)
            }
            Err(e) => {
                if e.severity().is_recoverable() {
                    warn!(target: "runtime::worker", turn, code = e.error_code(), "Turn refused: {}", e);
                } else {
                    error!(target: "runtime::worker", turn, code = e.error_code(), "Turn failed: {}", e);
                }
                self.event_bus.publish(Event::Turn(TurnEvent::Skipped {
                    turn,
                    reason: e.to_string(),
                }));
                Err(RuntimeError::Turn(e))
            }
        }
    }

    fn handle_transition_finished(&mut self, ticket: TransitionTicket) {
        let mut engine = TurnEngine::new(&mut self.state);
        match engine.complete_transition(ticket) {
            Ok(completion) => {
                debug!(
                    target: "runtime::worker",
                    %ticket,
                    predator = %completion.predator,
                    to = %completion.to,
                    "Move completed"
                );
                self.event_bus
                    .publish(Event::Move(MoveEvent::Completed(completion)));
            }
            Err(TransitionError::UnknownTicket(_)) => {
                // Settled before its timer fired.
                warn!(target: "runtime::worker", %ticket, "Ignoring stale transition");
                self.event_bus
                    .publish(Event::Move(MoveEvent::Stale { ticket }));
            }
            Err(e) => {
                error!(target: "runtime::worker", %ticket, code = e.error_code(), "Move completion failed: {}", e);
            }
        }
    }

    fn settle_pending(&mut self) -> Result<()> {
        let completions = TurnEngine::new(&mut self.state).settle_pending()?;
        info!(
            target: "runtime::worker",
            settled = completions.len(),
            "Settled pending moves before next turn"
        );
        for completion in completions {
            self.event_bus
                .publish(Event::Move(MoveEvent::Completed(completion)));
        }
        Ok(())
    }

    fn send_reply(reply: TurnReply, result: Result<TurnReport>) {
        if reply.send(result).is_err() {
            debug!("ResolveTurn reply channel closed (caller dropped)");
        }
    }
}
