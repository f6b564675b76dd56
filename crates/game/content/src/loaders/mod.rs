//! Content loaders for reading game data from files.
//!
//! This module converts RON/TOML files into the species oracle, the game
//! configuration, and scenario placements.

pub mod config;
pub mod factory;
pub mod scenario;
pub mod species;

pub use config::{ConfigLoader, ContentConfig};
pub use factory::{ContentFactory, GameContent};
pub use scenario::{Placement, Scenario, ScenarioLoader};
pub use species::SpeciesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
