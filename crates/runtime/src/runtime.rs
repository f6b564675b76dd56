//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_content::{GameContent, Scenario};
use game_core::{GameState, TurnReport};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::scenario::create_initial_state;
use crate::workers::{Command, SimulationWorker, TokioTransitionScheduler};

/// What the worker does with a turn request while moves are still pending.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TransitionPolicy {
    /// Hold the request until every scheduled move has completed.
    #[default]
    Wait,
    /// Apply pending moves immediately, then resolve. Timers that fire later
    /// are reported as stale.
    Settle,
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub transition_policy: TransitionPolicy,
    /// Seed for a state built by the runtime itself. Ignored when an initial
    /// state is supplied.
    pub game_seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            transition_policy: TransitionPolicy::default(),
            game_seed: 0,
        }
    }
}

/// Main runtime that orchestrates game simulation
///
/// Runtime owns the worker task; [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Resolve a single turn.
    pub async fn step(&self) -> Result<TurnReport> {
        self.handle.resolve_turn().await
    }

    /// Resolve `turns` turns in sequence, stopping at the first error.
    pub async fn run_turns(&self, turns: u64) -> Result<Vec<TurnReport>> {
        let mut reports = Vec::new();
        for _ in 0..turns {
            reports.push(self.step().await?);
        }
        Ok(reports)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker exits once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    oracles: Option<OracleManager>,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            oracles: None,
            scenario: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build the initial state from scenario placements.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Set the transition policy
    pub fn transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.config.transition_policy = policy;
        self
    }

    /// Use loaded content for oracles, scenario, and the configured seed.
    pub fn content(mut self, content: GameContent) -> Self {
        if let Some(seed) = content.config.game_seed {
            self.config.game_seed = seed;
        }
        self.oracles = Some(OracleManager::new(
            Arc::new(content.species),
            Arc::new(content.config.game),
        ));
        self.scenario = Some(content.scenario);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        oracles
            .config()
            .validate(oracles.species())
            .map_err(|e| RuntimeError::InvalidConfig(e.to_string()))?;

        let initial_state = match (self.state, self.scenario) {
            (Some(state), _) => state,
            (None, Some(scenario)) => {
                create_initial_state(&scenario, &oracles, self.config.game_seed)?
            }
            (None, None) => GameState::new(oracles.config().board, self.config.game_seed),
        };

        if initial_state.board.dimensions() != oracles.config().board {
            return Err(RuntimeError::InvalidConfig(format!(
                "initial state board {:?} does not match configured board {:?}",
                initial_state.board.dimensions(),
                oracles.config().board
            )));
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let scheduler = TokioTransitionScheduler::new(command_tx.downgrade(), event_bus.clone());
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            initial_state,
            oracles,
            self.config.transition_policy,
            command_rx,
            scheduler,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
