//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML files that describe a game:
//! - Species table (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//! - Starting scenario placements (data-driven via RON)
//!
//! Content is consumed by runtime oracles and the scenario builder; it never
//! appears in game state directly. Species names are resolved to
//! [`SpeciesId`](game_core::SpeciesId)s once, at load time.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentConfig, ContentFactory, GameContent, LoadResult, Placement, Scenario,
    ScenarioLoader, SpeciesLoader,
};
