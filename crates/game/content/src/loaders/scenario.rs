//! Scenario loader.
//!
//! A scenario lists the entities on the board before the first turn. It
//! names species rather than ids; the runtime resolves them when it builds
//! the initial state.

use std::path::Path;

use game_core::Position;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    placements: Vec<(String, i32, i32)>, // (species, x, y)
}

/// One entity to put on the board at setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub species: String,
    pub position: Position,
}

/// Initial placements, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    pub placements: Vec<Placement>,
}

impl Scenario {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario file {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let placements = data
            .placements
            .into_iter()
            .map(|(species, x, y)| Placement {
                species,
                position: Position::new(x, y),
            })
            .collect();

        Ok(Scenario::new(placements))
    }
}
