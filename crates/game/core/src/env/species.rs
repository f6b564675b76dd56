//! Species trait table.
//!
//! Species are addressed by [`SpeciesId`], a dense index validated when the
//! table is built. Name lookups exist for content loading and scenario setup;
//! the turn engine and the consumption model only ever use ids.

use std::collections::HashMap;

use super::OracleError;
use crate::state::{EntityKind, SpeciesId};

/// Read-only access to per-species static traits.
pub trait SpeciesOracle: Send + Sync {
    fn traits(&self, id: SpeciesId) -> Option<&SpeciesTraits>;

    fn species_id(&self, name: &str) -> Option<SpeciesId>;

    fn kind(&self, id: SpeciesId) -> Option<EntityKind> {
        self.traits(id).map(|traits| traits.kind)
    }

    fn hunger_capacity(&self, id: SpeciesId) -> Option<i32> {
        self.traits(id).map(|traits| traits.hunger)
    }

    fn voracity_capacity(&self, id: SpeciesId) -> Option<i32> {
        self.traits(id).map(|traits| traits.voracity)
    }

    /// Natural prey of `id`. Unknown species have none.
    fn prey_species(&self, id: SpeciesId) -> &[SpeciesId] {
        self.traits(id)
            .map(|traits| traits.prey.as_slice())
            .unwrap_or(&[])
    }

    fn is_predator_of(&self, predator: SpeciesId, prey: SpeciesId) -> bool {
        self.prey_species(predator).contains(&prey)
    }
}

/// Static traits of one species.
///
/// `hunger` and `voracity` are the caps used by predators; `health` is the
/// starting health of prey. Fields that do not apply to a kind stay zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesTraits {
    pub id: SpeciesId,
    pub name: String,
    pub kind: EntityKind,
    pub hunger: i32,
    pub voracity: i32,
    pub health: i32,
    pub prey: Vec<SpeciesId>,
}

impl SpeciesTraits {
    pub fn new(id: SpeciesId, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hunger: 0,
            voracity: 0,
            health: 0,
            prey: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_appetite(mut self, hunger: i32, voracity: i32) -> Self {
        self.hunger = hunger;
        self.voracity = voracity;
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_prey(mut self, prey: Vec<SpeciesId>) -> Self {
        self.prey = prey;
        self
    }
}

/// Validated, id-indexed species table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesTable {
    species: Vec<SpeciesTraits>,
    by_name: HashMap<String, SpeciesId>,
}

impl SpeciesTable {
    /// Builds the table, rejecting anything a lookup could later trip over:
    /// ids must equal their index, names must be unique, caps non-negative,
    /// and every prey reference must resolve.
    pub fn new(species: Vec<SpeciesTraits>) -> Result<Self, OracleError> {
        let mut by_name = HashMap::with_capacity(species.len());

        for (index, traits) in species.iter().enumerate() {
            if traits.id.index() != index {
                return Err(OracleError::SpeciesIdMismatch {
                    expected: index,
                    found: traits.id,
                });
            }
            if traits.hunger < 0 || traits.voracity < 0 || traits.health < 0 {
                return Err(OracleError::NegativeCapacity(traits.name.clone()));
            }
            if by_name.insert(traits.name.clone(), traits.id).is_some() {
                return Err(OracleError::DuplicateSpecies(traits.name.clone()));
            }
        }

        for traits in &species {
            if let Some(missing) = traits.prey.iter().find(|prey| prey.index() >= species.len()) {
                return Err(OracleError::UnknownPrey {
                    species: traits.name.clone(),
                    prey: missing.to_string(),
                });
            }
        }

        Ok(Self { species, by_name })
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesTraits> {
        self.species.iter()
    }
}

impl SpeciesOracle for SpeciesTable {
    fn traits(&self, id: SpeciesId) -> Option<&SpeciesTraits> {
        self.species.get(id.index())
    }

    fn species_id(&self, name: &str) -> Option<SpeciesId> {
        self.by_name.get(name).copied()
    }
}
