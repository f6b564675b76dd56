//! Authoritative game state representation.
//!
//! This module owns the board, the entity table, and turn bookkeeping.
//! Runtime layers clone or query this state but mutate it exclusively through
//! the [`TurnEngine`](crate::engine::TurnEngine).
pub mod error;
pub mod types;

use std::collections::BTreeSet;

use crate::consumption::{PredatorState, PreyState};
use crate::env::SpeciesOracle;
pub use error::{BoardError, StateError};
pub use types::{
    Board, BoardDimensions, EntitiesState, Entity, EntityBody, EntityId, EntityKind,
    PendingMove, PendingMoves, PlantState, Position, ResourceMeter, SpeciesId, Tile, TurnPhase,
    TurnState,
};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic spawn draws.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `turn.turn` to derive a seed for each draw.
    pub game_seed: u64,

    /// Sequential entity ID allocator (monotonically increasing, never reused).
    next_entity_id: u32,

    /// Turn counter, lock, active-predator roster, and pending moves.
    pub turn: TurnState,
    /// All live entities, on or off the board.
    pub entities: EntitiesState,
    pub board: Board,
}

impl GameState {
    /// Creates an empty board of the given size.
    pub fn new(dimensions: BoardDimensions, game_seed: u64) -> Self {
        Self {
            game_seed,
            next_entity_id: 0,
            turn: TurnState::default(),
            entities: EntitiesState::default(),
            board: Board::new(dimensions),
        }
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> Result<EntityId, StateError> {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id =
            self.next_entity_id
                .checked_add(1)
                .ok_or(StateError::EntityIdOverflow {
                    current: self.next_entity_id,
                })?;
        Ok(id)
    }

    /// Builds an off-board entity of `species`, shaped by its kind and traits.
    ///
    /// The entity holds no tile until [`place_entity`](Self::place_entity)
    /// is called for it.
    pub fn create_entity(
        &mut self,
        species: SpeciesId,
        oracle: &dyn SpeciesOracle,
    ) -> Result<EntityId, StateError> {
        let traits = oracle
            .traits(species)
            .ok_or(StateError::SpeciesNotFound(species))?;

        let body = match traits.kind {
            EntityKind::Plant => EntityBody::Plant(PlantState { species }),
            EntityKind::Prey => EntityBody::Prey(PreyState::from_traits(traits)),
            EntityKind::Predator => EntityBody::Predator(PredatorState::from_traits(traits)),
        };

        let id = self.allocate_entity_id()?;
        self.entities.insert(Entity::new(id, body));
        Ok(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn predator(&self, id: EntityId) -> Option<&PredatorState> {
        self.entities.get(id).and_then(Entity::as_predator)
    }

    /// Resident of the tile at `position`, resolved to its entity.
    pub fn resident_at(&self, position: Position) -> Result<Option<&Entity>, StateError> {
        Ok(self
            .board
            .resident(position)?
            .and_then(|id| self.entities.get(id)))
    }

    /// Puts `id` on the tile at `position` and records the matching
    /// coordinates on the entity.
    ///
    /// The entity is lifted from whatever tile it held before. Any prior
    /// resident of the target tile is overwritten and returned with its
    /// recorded position cleared; disposing of it is the caller's job.
    pub fn place_entity(
        &mut self,
        id: EntityId,
        position: Position,
    ) -> Result<Option<EntityId>, StateError> {
        if !self.entities.contains(id) {
            return Err(StateError::EntityNotFound(id));
        }
        // Bounds first, so a failed placement leaves everything untouched.
        self.board.tile(position)?;

        self.lift_entity(id)?;

        let displaced = self
            .board
            .tile_mut(position)?
            .remove_resident()
            .filter(|&resident| resident != id);
        if let Some(resident) = displaced
            && let Some(entity) = self.entities.get_mut(resident)
        {
            entity.position = None;
        }

        self.board.tile_mut(position)?.set_resident(Some(id));
        if let Some(entity) = self.entities.get_mut(id) {
            entity.position = Some(position);
        }

        Ok(displaced)
    }

    /// Clears the tile held by `id`, if any, and returns where it was.
    pub fn lift_entity(&mut self, id: EntityId) -> Result<Option<Position>, StateError> {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or(StateError::EntityNotFound(id))?;

        let Some(position) = entity.position.take() else {
            return Ok(None);
        };

        let tile = self.board.tile_mut(position)?;
        if tile.resident() == Some(id) {
            tile.remove_resident();
        }
        Ok(Some(position))
    }

    /// Removes `id` from the simulation: its tile, the roster, any pending
    /// move, and the entity table.
    pub fn destroy_entity(&mut self, id: EntityId) -> Result<Entity, StateError> {
        self.lift_entity(id)?;
        self.turn.remove_from_roster(id);
        self.turn.pending.cancel_for(id);
        self.entities
            .remove(id)
            .ok_or(StateError::EntityNotFound(id))
    }

    /// Verifies tile/entity coordinate agreement, roster/occupancy lockstep,
    /// and that every pending move still holds its source tile.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        for (position, resident) in self.board.occupied() {
            let entity = self
                .entities
                .get(resident)
                .ok_or(StateError::DanglingResident {
                    entity: resident,
                    tile: position,
                })?;
            if entity.position != Some(position) {
                return Err(StateError::ResidentPositionMismatch {
                    entity: resident,
                    tile: position,
                    recorded: entity.position,
                });
            }
        }

        for entity in self.entities.iter() {
            if let Some(position) = entity.position
                && self.board.resident(position)? != Some(entity.id)
            {
                return Err(StateError::OrphanedEntity {
                    entity: entity.id,
                    position,
                });
            }
        }

        let mut seen = BTreeSet::new();
        for &id in &self.turn.roster {
            if !seen.insert(id) {
                return Err(StateError::DuplicateRosterEntry(id));
            }
            let entity = self.entities.get(id).ok_or(StateError::EntityNotFound(id))?;
            if !entity.is_predator() {
                return Err(StateError::RosterEntryNotPredator(id));
            }
            if entity.position.is_none() {
                return Err(StateError::RosterEntryOffBoard(id));
            }
        }

        for entity in self.entities.iter() {
            if entity.is_predator() && entity.position.is_some() && !seen.contains(&entity.id) {
                return Err(StateError::PredatorNotInRoster(entity.id));
            }
        }

        for pending in self.turn.pending.iter() {
            if self.board.resident(pending.from)? != Some(pending.entity) {
                return Err(StateError::PendingMoveDetached {
                    entity: pending.entity,
                    from: pending.from,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{SpeciesTable, SpeciesTraits};

    fn table() -> SpeciesTable {
        SpeciesTable::new(vec![
            SpeciesTraits::new(SpeciesId(0), "fox", EntityKind::Predator).with_appetite(5, 2),
            SpeciesTraits::new(SpeciesId(1), "clover", EntityKind::Plant),
            SpeciesTraits::new(SpeciesId(2), "rabbit", EntityKind::Prey).with_health(3),
        ])
        .unwrap()
    }

    fn state() -> GameState {
        GameState::new(BoardDimensions::new(4, 3), 7)
    }

    #[test]
    fn ids_are_sequential() {
        let mut state = state();
        assert_eq!(state.allocate_entity_id().unwrap(), EntityId(0));
        assert_eq!(state.allocate_entity_id().unwrap(), EntityId(1));
    }

    #[test]
    fn create_entity_builds_body_from_kind() {
        let table = table();
        let mut state = state();

        let fox = state.create_entity(SpeciesId(0), &table).unwrap();
        let rabbit = state.create_entity(SpeciesId(2), &table).unwrap();

        let predator = state.predator(fox).unwrap();
        assert_eq!(predator.hunger(), 5);
        assert_eq!(predator.voracity(), 2);
        assert!(state.entity(rabbit).unwrap().is_prey());
        assert_eq!(state.entity(fox).unwrap().position, None);

        assert_eq!(
            state.create_entity(SpeciesId(9), &table),
            Err(StateError::SpeciesNotFound(SpeciesId(9)))
        );
    }

    #[test]
    fn place_entity_keeps_coordinates_in_sync() {
        let table = table();
        let mut state = state();
        let clover = state.create_entity(SpeciesId(1), &table).unwrap();

        state.place_entity(clover, Position::new(1, 1)).unwrap();
        assert_eq!(state.board.resident(Position::new(1, 1)), Ok(Some(clover)));

        state.place_entity(clover, Position::new(2, 1)).unwrap();
        assert_eq!(state.board.resident(Position::new(1, 1)), Ok(None));
        assert_eq!(
            state.entity(clover).unwrap().position,
            Some(Position::new(2, 1))
        );
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn place_entity_overwrites_and_reports_prior_resident() {
        let table = table();
        let mut state = state();
        let clover = state.create_entity(SpeciesId(1), &table).unwrap();
        let rabbit = state.create_entity(SpeciesId(2), &table).unwrap();

        state.place_entity(clover, Position::new(0, 0)).unwrap();
        let displaced = state.place_entity(rabbit, Position::new(0, 0)).unwrap();

        assert_eq!(displaced, Some(clover));
        assert_eq!(state.entity(clover).unwrap().position, None);
    }

    #[test]
    fn place_entity_rejects_out_of_bounds() {
        let table = table();
        let mut state = state();
        let clover = state.create_entity(SpeciesId(1), &table).unwrap();

        assert!(matches!(
            state.place_entity(clover, Position::new(4, 0)),
            Err(StateError::Board(BoardError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn invariants_catch_roster_drift() {
        let table = table();
        let mut state = state();
        let fox = state.create_entity(SpeciesId(0), &table).unwrap();
        state.place_entity(fox, Position::new(0, 2)).unwrap();

        assert_eq!(
            state.check_invariants(),
            Err(StateError::PredatorNotInRoster(fox))
        );

        state.turn.roster.push(fox);
        assert_eq!(state.check_invariants(), Ok(()));

        state.turn.roster.push(fox);
        assert_eq!(
            state.check_invariants(),
            Err(StateError::DuplicateRosterEntry(fox))
        );
    }

    #[test]
    fn destroy_entity_clears_tile_and_roster() {
        let table = table();
        let mut state = state();
        let fox = state.create_entity(SpeciesId(0), &table).unwrap();
        state.place_entity(fox, Position::new(0, 0)).unwrap();
        state.turn.roster.push(fox);

        let removed = state.destroy_entity(fox).unwrap();

        assert_eq!(removed.id, fox);
        assert!(state.turn.roster.is_empty());
        assert_eq!(state.board.resident(Position::new(0, 0)), Ok(None));
        assert_eq!(state.check_invariants(), Ok(()));
    }
}
