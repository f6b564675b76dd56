//! Content factory for loading a whole content directory.

use std::path::{Path, PathBuf};

use game_core::SpeciesTable;

use crate::loaders::{
    ConfigLoader, ContentConfig, LoadResult, Scenario, ScenarioLoader, SpeciesLoader,
};

/// Everything a host needs to start a game.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub species: SpeciesTable,
    pub config: ContentConfig,
    pub scenario: Scenario,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── species.ron
/// ├── config.toml
/// └── scenario.ron   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the species table from `species.ron`.
    pub fn load_species(&self) -> LoadResult<SpeciesTable> {
        SpeciesLoader::load(&self.data_dir.join("species.ron"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self, species: &SpeciesTable) -> LoadResult<ContentConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"), species)
    }

    /// Load placements from `scenario.ron`, or an empty scenario if the file
    /// does not exist.
    pub fn load_scenario(&self) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenario.ron");
        if !path.exists() {
            return Ok(Scenario::default());
        }
        ScenarioLoader::load(&path)
    }

    /// Load species, config and scenario together.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        let species = self.load_species()?;
        let config = self.load_config(&species)?;
        let scenario = self.load_scenario()?;

        Ok(GameContent {
            species,
            config,
            scenario,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
