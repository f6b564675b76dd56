//! Game configuration loader.

use std::path::Path;

use game_core::{BoardDimensions, GameConfig, SpeciesOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardToml {
    width: u32,
    height: u32,
}

/// `config.toml` layout. The predator roster is written as species names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigToml {
    #[serde(default)]
    game_seed: Option<u64>,
    #[serde(default = "default_transition_ms")]
    transition_ms: u32,
    predator_roster: Vec<String>,
    board: BoardToml,
}

fn default_transition_ms() -> u32 {
    GameConfig::DEFAULT_TRANSITION_MS
}

/// Loaded configuration: the engine config plus host-level settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    pub game: GameConfig,
    /// Fixed seed for reproducible games; hosts pick one when absent.
    pub game_seed: Option<u64>,
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file, resolving roster names against
    /// `species`.
    pub fn load(path: &Path, species: &dyn SpeciesOracle) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        Self::parse(&content, species)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str, species: &dyn SpeciesOracle) -> LoadResult<ContentConfig> {
        let raw: ConfigToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let roster = raw
            .predator_roster
            .iter()
            .map(|name| {
                species
                    .species_id(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown species '{}' in predator_roster", name))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let game = GameConfig::new(BoardDimensions::new(raw.board.width, raw.board.height), roster)
            .with_transition_ms(raw.transition_ms);
        game.validate(species)
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;

        Ok(ContentConfig {
            game,
            game_seed: raw.game_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityKind, SpeciesId, SpeciesTable, SpeciesTraits};

    fn table() -> SpeciesTable {
        SpeciesTable::new(vec![
            SpeciesTraits::new(SpeciesId(0), "fox", EntityKind::Predator).with_appetite(5, 2),
            SpeciesTraits::new(SpeciesId(1), "clover", EntityKind::Plant),
        ])
        .unwrap()
    }

    #[test]
    fn roster_names_become_ids() {
        let config = ConfigLoader::parse(
            r#"
                predator_roster = ["fox"]

                [board]
                width = 9
                height = 5
            "#,
            &table(),
        )
        .unwrap();

        assert_eq!(config.game.predator_roster, vec![SpeciesId(0)]);
        assert_eq!(config.game.transition_ms, GameConfig::DEFAULT_TRANSITION_MS);
        assert_eq!(config.game_seed, None);
    }

    #[test]
    fn plant_in_roster_is_rejected() {
        let result = ConfigLoader::parse(
            r#"
                predator_roster = ["clover"]

                [board]
                width = 9
                height = 5
            "#,
            &table(),
        );

        assert!(result.is_err());
    }
}
