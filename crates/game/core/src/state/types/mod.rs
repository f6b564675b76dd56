pub mod board;
pub mod common;
pub mod entities;
pub mod turn;

pub use board::{Board, BoardDimensions, Tile};
pub use common::{EntityId, Position, ResourceMeter, SpeciesId};
pub use entities::{EntitiesState, Entity, EntityBody, EntityKind, PlantState};
pub use turn::{PendingMove, PendingMoves, TurnPhase, TurnState};
