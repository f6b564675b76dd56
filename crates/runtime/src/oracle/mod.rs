//! Runtime wrapper around static game content oracles.
//!
//! [`OracleManager`] bundles the species table, the game config, and the PCG
//! random source so the runtime can build [`game_core::Env`] snapshots on
//! demand. The data is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].
use std::sync::Arc;

use game_core::{Env, GameConfig, GameEnv, PcgRng, SpeciesTable};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) species: Arc<SpeciesTable>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(species: Arc<SpeciesTable>, config: Arc<GameConfig>) -> Self {
        Self {
            species,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(self.species.as_ref(), &self.rng, self.config.as_ref()).into_game_env()
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
