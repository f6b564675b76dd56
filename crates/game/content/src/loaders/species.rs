//! Species table loader.
//!
//! Species are listed in file order; a species' position is its
//! [`SpeciesId`]. Prey are referenced by name and resolved here, so the
//! engine only ever sees validated ids.

use std::collections::HashMap;
use std::path::Path;

use game_core::{EntityKind, SpeciesId, SpeciesTable, SpeciesTraits};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One species entry as written in `species.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpeciesRon {
    name: String,
    kind: EntityKind,
    #[serde(default)]
    hunger: i32,
    #[serde(default)]
    voracity: i32,
    #[serde(default)]
    health: i32,
    #[serde(default)]
    prey: Vec<String>,
}

/// Loader for the species table from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load the species table from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpeciesTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid species file {}: {}", path.display(), e))
    }

    /// Parse a species table from RON text.
    pub fn parse(content: &str) -> LoadResult<SpeciesTable> {
        let entries: Vec<SpeciesRon> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))?;

        let mut ids = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let id = u16::try_from(index)
                .map_err(|_| anyhow::anyhow!("Too many species (limit {})", u16::MAX))?;
            if ids.insert(entry.name.as_str(), SpeciesId(id)).is_some() {
                anyhow::bail!("Duplicate species '{}'", entry.name);
            }
        }

        let mut species = Vec::with_capacity(entries.len());
        for entry in &entries {
            let id = ids[entry.name.as_str()];
            let prey = entry
                .prey
                .iter()
                .map(|name| {
                    ids.get(name.as_str()).copied().ok_or_else(|| {
                        anyhow::anyhow!("Species '{}' lists unknown prey '{}'", entry.name, name)
                    })
                })
                .collect::<LoadResult<Vec<_>>>()?;

            species.push(
                SpeciesTraits::new(id, entry.name.clone(), entry.kind)
                    .with_appetite(entry.hunger, entry.voracity)
                    .with_health(entry.health)
                    .with_prey(prey),
            );
        }

        SpeciesTable::new(species).map_err(|e| anyhow::anyhow!("Invalid species table: {}", e))
    }
}
