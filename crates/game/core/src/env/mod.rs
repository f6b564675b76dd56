//! Traits describing read-only collaborators.
//!
//! Oracles expose species traits and deterministic randomness; together with
//! [`GameConfig`] they form the [`Env`] the turn engine reads from. The
//! transition scheduler lives here too, although it is the one collaborator
//! the engine writes to.
mod error;
mod rng;
mod species;
mod transition;

pub use error::OracleError;
pub use rng::{PcgRng, RngContext, RngOracle, compute_seed};
pub use species::{SpeciesOracle, SpeciesTable, SpeciesTraits};
pub use transition::{ImmediateScheduler, Point, Transition, TransitionScheduler, TransitionTicket};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the turn engine.
pub struct Env<'a, S, R>
where
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    species: Option<&'a S>,
    rng: Option<&'a R>,
    config: Option<&'a GameConfig>,
}

pub type GameEnv<'a> = Env<'a, dyn SpeciesOracle + 'a, dyn RngOracle + 'a>;

// Manual impls: derive would demand `S: Copy`, which trait objects never are.
impl<S, R> Clone for Env<'_, S, R>
where
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, R> Copy for Env<'_, S, R>
where
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, S, R> Env<'a, S, R>
where
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(species: Option<&'a S>, rng: Option<&'a R>, config: Option<&'a GameConfig>) -> Self {
        Self {
            species,
            rng,
            config,
        }
    }

    pub fn with_all(species: &'a S, rng: &'a R, config: &'a GameConfig) -> Self {
        Self::new(Some(species), Some(rng), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            species: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the SpeciesOracle, or an error if not available.
    pub fn species(&self) -> Result<&'a S, OracleError> {
        self.species.ok_or(OracleError::SpeciesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the GameConfig, or an error if not available.
    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, S, R> Env<'a, S, R>
where
    S: SpeciesOracle + 'a,
    R: RngOracle + 'a,
{
    /// Erases concrete oracle types.
    pub fn into_game_env(self) -> GameEnv<'a> {
        Env {
            species: self.species.map(|species| species as &'a dyn SpeciesOracle),
            rng: self.rng.map(|rng| rng as &'a dyn RngOracle),
            config: self.config,
        }
    }
}
