//! Game configuration and tunable parameters.

use crate::env::SpeciesOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BoardDimensions, EntityKind, SpeciesId};

/// Game configuration shared by the turn engine and its hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Board size. Width doubles as the terminal column predators exit through.
    pub board: BoardDimensions,
    /// Species drawn uniformly for the end-of-turn spawn.
    pub predator_roster: Vec<SpeciesId>,
    /// Duration handed to the transition scheduler for empty-tile advances.
    pub transition_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: u32 = 9;
    pub const DEFAULT_HEIGHT: u32 = 5;
    pub const DEFAULT_TRANSITION_MS: u32 = 1000;

    pub fn new(board: BoardDimensions, predator_roster: Vec<SpeciesId>) -> Self {
        Self {
            board,
            predator_roster,
            transition_ms: Self::DEFAULT_TRANSITION_MS,
        }
    }

    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: u32) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    /// Checks the config against the species table it will run with.
    pub fn validate(&self, species: &dyn SpeciesOracle) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.board.width,
                height: self.board.height,
            });
        }

        let max = BoardDimensions::MAX_SIDE;
        if self.board.width > max || self.board.height > max {
            return Err(ConfigError::BoardTooLarge {
                width: self.board.width,
                height: self.board.height,
                max,
            });
        }

        if self.predator_roster.is_empty() {
            return Err(ConfigError::EmptyPredatorRoster);
        }

        for &id in &self.predator_roster {
            match species.kind(id) {
                Some(EntityKind::Predator) => {}
                Some(kind) => return Err(ConfigError::NotAPredator { species: id, kind }),
                None => return Err(ConfigError::UnknownSpecies(id)),
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            BoardDimensions::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            Vec::new(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("board must have at least one tile (got {width}x{height})")]
    EmptyBoard { width: u32, height: u32 },

    #[error("board sides are limited to {max} tiles (got {width}x{height})")]
    BoardTooLarge { width: u32, height: u32, max: u32 },

    #[error("predator roster is empty")]
    EmptyPredatorRoster,

    #[error("predator roster references unknown species {0}")]
    UnknownSpecies(SpeciesId),

    #[error("predator roster entry {species} is a {kind}, not a predator")]
    NotAPredator { species: SpeciesId, kind: EntityKind },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::EmptyBoard { .. } => "CONFIG_EMPTY_BOARD",
            ConfigError::BoardTooLarge { .. } => "CONFIG_BOARD_TOO_LARGE",
            ConfigError::EmptyPredatorRoster => "CONFIG_EMPTY_PREDATOR_ROSTER",
            ConfigError::UnknownSpecies(_) => "CONFIG_UNKNOWN_SPECIES",
            ConfigError::NotAPredator { .. } => "CONFIG_NOT_A_PREDATOR",
        }
    }
}
