use crate::config::GameConfig;
use crate::env::{GameEnv, RngContext, RngOracle, SpeciesOracle, compute_seed};
use crate::state::{EntityId, EntityKind, Position, SpeciesId};

use super::{Spawned, TurnEngine, TurnError};

impl<'a> TurnEngine<'a> {
    /// Places a new entity of `species` on an empty tile.
    ///
    /// Predators join the end of the active roster in the same step.
    pub fn spawn(
        &mut self,
        env: GameEnv<'_>,
        species: SpeciesId,
        position: Position,
    ) -> Result<EntityId, TurnError> {
        if self.state.turn.is_locked() {
            return Err(TurnError::Locked);
        }
        let oracle = env.species()?;
        self.spawn_checked(oracle, species, position)
    }

    /// Like [`spawn`](Self::spawn), but only for predator species.
    pub fn spawn_predator(
        &mut self,
        env: GameEnv<'_>,
        species: SpeciesId,
        position: Position,
    ) -> Result<EntityId, TurnError> {
        let oracle = env.species()?;
        if oracle.kind(species) != Some(EntityKind::Predator) {
            return Err(TurnError::NotAPredatorSpecies { species });
        }
        self.spawn(env, species, position)
    }

    /// Whether nothing stands on, or is headed for, `position`.
    pub fn is_free(&self, position: Position) -> bool {
        matches!(self.state.board.resident(position), Ok(None))
            && !self.state.turn.pending.is_reserved(position)
    }

    fn spawn_checked(
        &mut self,
        oracle: &dyn SpeciesOracle,
        species: SpeciesId,
        position: Position,
    ) -> Result<EntityId, TurnError> {
        if !self.state.board.contains(position) {
            return Err(TurnError::SpawnOutOfBounds { position });
        }
        if !self.is_free(position) {
            return Err(TurnError::SpawnBlocked { position });
        }

        let id = self.state.create_entity(species, oracle)?;
        self.state.place_entity(id, position)?;
        if oracle.kind(species) == Some(EntityKind::Predator) {
            self.state.turn.roster.push(id);
        }
        Ok(id)
    }

    /// End-of-turn spawn: one predator in column 0.
    ///
    /// The row is drawn uniformly from the free column-0 rows and the species
    /// uniformly from the configured roster. Returns `None` when the column
    /// is full.
    pub(super) fn spawn_step(
        &mut self,
        turn: u64,
        oracle: &dyn SpeciesOracle,
        rng: &dyn RngOracle,
        config: &GameConfig,
    ) -> Result<Option<Spawned>, TurnError> {
        let height = self.state.board.dimensions().height as i32;
        let free_rows: Vec<i32> = (0..height)
            .filter(|&y| self.is_free(Position::new(0, y)))
            .collect();
        if free_rows.is_empty() || config.predator_roster.is_empty() {
            return Ok(None);
        }

        let game_seed = self.state.game_seed;
        let row_draw = rng.below(
            compute_seed(game_seed, turn, RngContext::SpawnRow),
            free_rows.len() as u32,
        );
        let species_draw = rng.below(
            compute_seed(game_seed, turn, RngContext::SpawnSpecies),
            config.predator_roster.len() as u32,
        );

        let position = Position::new(0, free_rows[row_draw as usize]);
        let species = config.predator_roster[species_draw as usize];
        let predator = self.spawn_checked(oracle, species, position)?;

        Ok(Some(Spawned {
            predator,
            species,
            position,
        }))
    }
}
