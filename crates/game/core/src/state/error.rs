//! State management errors.
//!
//! Errors related to board lookups, entity bookkeeping, and the
//! roster/occupancy invariants.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position, SpeciesId};

/// Bounds-checked board access failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Position is outside the grid.
    #[error("position {position} is out of bounds (board size: {width}x{height})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        // The edge check runs before every destination lookup, so reaching
        // this is a programming defect.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            BoardError::OutOfBounds { .. } => "BOARD_OUT_OF_BOUNDS",
        }
    }
}

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Entity ID allocation overflow (all IDs exhausted).
    #[error("entity id overflow (current: {current})")]
    EntityIdOverflow { current: u32 },

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("species {0} not found")]
    SpeciesNotFound(SpeciesId),

    /// Position is already occupied by another entity.
    #[error("position {position} is already occupied by entity {occupant}")]
    PositionOccupied {
        position: Position,
        occupant: EntityId,
    },

    /// Tile resident reports a different position than the tile itself.
    #[error("entity {entity} resides on {tile} but records position {recorded:?}")]
    ResidentPositionMismatch {
        entity: EntityId,
        tile: Position,
        recorded: Option<Position>,
    },

    /// A tile references an entity that no longer exists.
    #[error("tile {tile} references missing entity {entity}")]
    DanglingResident { entity: EntityId, tile: Position },

    /// An entity records a position but no tile holds it.
    #[error("entity {entity} records position {position} but the tile does not hold it")]
    OrphanedEntity { entity: EntityId, position: Position },

    #[error("predator {0} is in the roster but not on the board")]
    RosterEntryOffBoard(EntityId),

    #[error("predator {0} is on the board but missing from the roster")]
    PredatorNotInRoster(EntityId),

    #[error("entity {0} appears more than once in the roster")]
    DuplicateRosterEntry(EntityId),

    #[error("entity {0} is in the roster but is not a predator")]
    RosterEntryNotPredator(EntityId),

    #[error("pending move for {entity} no longer holds its source tile {from}")]
    PendingMoveDetached { entity: EntityId, from: Position },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            Board(error) => error.severity(),
            EntityIdOverflow { .. } => ErrorSeverity::Fatal,
            EntityNotFound(_) | SpeciesNotFound(_) | PositionOccupied { .. } => {
                ErrorSeverity::Validation
            }
            ResidentPositionMismatch { .. }
            | DanglingResident { .. }
            | OrphanedEntity { .. }
            | RosterEntryOffBoard(_)
            | PredatorNotInRoster(_)
            | DuplicateRosterEntry(_)
            | RosterEntryNotPredator(_)
            | PendingMoveDetached { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            Board(error) => error.error_code(),
            EntityIdOverflow { .. } => "STATE_ENTITY_ID_OVERFLOW",
            EntityNotFound(_) => "STATE_ENTITY_NOT_FOUND",
            SpeciesNotFound(_) => "STATE_SPECIES_NOT_FOUND",
            PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
            ResidentPositionMismatch { .. } => "STATE_RESIDENT_POSITION_MISMATCH",
            DanglingResident { .. } => "STATE_DANGLING_RESIDENT",
            OrphanedEntity { .. } => "STATE_ORPHANED_ENTITY",
            RosterEntryOffBoard(_) => "STATE_ROSTER_ENTRY_OFF_BOARD",
            PredatorNotInRoster(_) => "STATE_PREDATOR_NOT_IN_ROSTER",
            DuplicateRosterEntry(_) => "STATE_DUPLICATE_ROSTER_ENTRY",
            RosterEntryNotPredator(_) => "STATE_ROSTER_ENTRY_NOT_PREDATOR",
            PendingMoveDetached { .. } => "STATE_PENDING_MOVE_DETACHED",
        }
    }
}
