//! Scenario system for initial entity placement.
//!
//! Scenarios name species and positions; this module resolves the names
//! against the species oracle and builds the starting [`GameState`].
//! Predators placed here join the active roster in file order.

use game_content::Scenario;
use game_core::{GameState, SpeciesOracle, TurnEngine};

use crate::api::{Result, RuntimeError};
use crate::oracle::OracleManager;

/// Initialize GameState from `scenario` on an empty board sized by the
/// oracle config.
pub fn create_initial_state(
    scenario: &Scenario,
    oracles: &OracleManager,
    game_seed: u64,
) -> Result<GameState> {
    let mut state = GameState::new(oracles.config().board, game_seed);

    tracing::info!(
        "Creating initial state from scenario with {} placements",
        scenario.placements.len()
    );

    let mut engine = TurnEngine::new(&mut state);
    for placement in &scenario.placements {
        let species = oracles
            .species()
            .species_id(&placement.species)
            .ok_or_else(|| RuntimeError::UnknownSpecies(placement.species.clone()))?;

        engine
            .spawn(oracles.as_game_env(), species, placement.position)
            .map_err(|source| RuntimeError::Placement {
                species: placement.species.clone(),
                source,
            })?;
    }

    tracing::debug!(
        roster = state.turn.roster.len(),
        entities = state.entities.len(),
        "Scenario applied"
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_content::Placement;
    use game_core::{
        BoardDimensions, EntityKind, GameConfig, Position, SpeciesId, SpeciesTable, SpeciesTraits,
    };

    use super::*;

    fn oracles() -> OracleManager {
        let species = SpeciesTable::new(vec![
            SpeciesTraits::new(SpeciesId(0), "fox", EntityKind::Predator).with_appetite(5, 2),
            SpeciesTraits::new(SpeciesId(1), "clover", EntityKind::Plant),
        ])
        .unwrap();
        let config = GameConfig::new(BoardDimensions::new(9, 5), vec![SpeciesId(0)]);
        OracleManager::new(Arc::new(species), Arc::new(config))
    }

    fn placement(species: &str, x: i32, y: i32) -> Placement {
        Placement {
            species: species.to_string(),
            position: Position::new(x, y),
        }
    }

    #[test]
    fn predators_join_the_roster_in_order() {
        let scenario = Scenario::new(vec![
            placement("fox", 1, 0),
            placement("clover", 2, 0),
            placement("fox", 3, 4),
        ]);

        let state = create_initial_state(&scenario, &oracles(), 5).unwrap();

        assert_eq!(state.turn.roster.len(), 2);
        assert_eq!(state.entities.len(), 3);
        assert_eq!(state.game_seed, 5);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let scenario = Scenario::new(vec![placement("bear", 0, 0)]);

        let result = create_initial_state(&scenario, &oracles(), 0);

        assert!(matches!(result, Err(RuntimeError::UnknownSpecies(name)) if name == "bear"));
    }

    #[test]
    fn overlapping_placements_are_rejected() {
        let scenario = Scenario::new(vec![placement("clover", 2, 2), placement("fox", 2, 2)]);

        let result = create_initial_state(&scenario, &oracles(), 0);

        assert!(matches!(result, Err(RuntimeError::Placement { .. })));
    }
}
