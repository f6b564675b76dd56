use crate::env::SpeciesTraits;
use crate::state::{ResourceMeter, SpeciesId};

/// Prey instance state: nothing but injurable health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreyState {
    species: SpeciesId,
    health: ResourceMeter,
}

impl PreyState {
    pub fn new(species: SpeciesId, health: i32) -> Self {
        Self {
            species,
            health: ResourceMeter::full(health.max(0)),
        }
    }

    pub fn from_traits(traits: &SpeciesTraits) -> Self {
        Self::new(traits.id, traits.health)
    }

    #[must_use]
    pub fn with_health(mut self, current: i32) -> Self {
        self.health.current = current.clamp(0, self.health.maximum);
        self
    }

    pub fn species(&self) -> SpeciesId {
        self.species
    }

    pub fn health(&self) -> ResourceMeter {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    /// Removes up to `amount` health and returns what was actually removed,
    /// which is the nutrition the attacker gains.
    pub fn injure(&mut self, amount: i32) -> i32 {
        let dealt = amount.max(0).min(self.health.current.max(0));
        self.health.current -= dealt;
        dealt
    }
}
