//! Oracle access errors.
//!
//! Errors related to oracle availability and species table validation.

use crate::error::{ErrorSeverity, GameError};
use crate::state::SpeciesId;

/// Errors that occur when accessing or building oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SpeciesOracle is not available in the environment.
    #[error("SpeciesOracle not available")]
    SpeciesNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// GameConfig is not available in the environment.
    #[error("GameConfig not available")]
    ConfigNotAvailable,

    #[error("species {0} not found")]
    SpeciesNotFound(SpeciesId),

    #[error("species '{0}' not found")]
    UnknownSpecies(String),

    #[error("species '{0}' is defined more than once")]
    DuplicateSpecies(String),

    #[error("species at index {expected} carries id {found}")]
    SpeciesIdMismatch { expected: usize, found: SpeciesId },

    #[error("species '{species}' lists unknown prey '{prey}'")]
    UnknownPrey { species: String, prey: String },

    #[error("species '{0}' has a negative capacity")]
    NegativeCapacity(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            SpeciesNotAvailable | RngNotAvailable | ConfigNotAvailable => ErrorSeverity::Fatal,

            SpeciesNotFound(_)
            | UnknownSpecies(_)
            | DuplicateSpecies(_)
            | SpeciesIdMismatch { .. }
            | UnknownPrey { .. }
            | NegativeCapacity(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SpeciesNotAvailable => "ORACLE_SPECIES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            SpeciesNotFound(_) => "ORACLE_SPECIES_NOT_FOUND",
            UnknownSpecies(_) => "ORACLE_UNKNOWN_SPECIES",
            DuplicateSpecies(_) => "ORACLE_DUPLICATE_SPECIES",
            SpeciesIdMismatch { .. } => "ORACLE_SPECIES_ID_MISMATCH",
            UnknownPrey { .. } => "ORACLE_UNKNOWN_PREY",
            NegativeCapacity(_) => "ORACLE_NEGATIVE_CAPACITY",
        }
    }
}
